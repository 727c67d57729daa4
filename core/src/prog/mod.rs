//! PROG file loader (spec.md §4.7, §6).
//!
//! A PROG file is a small little-endian container: a 4-byte magic, a
//! version, a section count, then that many typed sections. Only
//! `memory-bytes` sections actually move data; `program-name` and
//! `basic-flag` are carried through to the returned descriptor for the host
//! to display. Unrecognized section types are skipped with a logged
//! warning rather than rejected, so older loaders stay forward-compatible
//! with newer PROG files.

use log::warn;

use crate::core::bus::{MemoryBus, ROM_LEN};
use crate::error::{ProgParseError, RomSizeError};

const MAGIC: [u8; 4] = *b"PROG";
const HEADER_LEN: usize = 8; // magic(4) + version(2) + section count(2)
const SECTION_HEADER_LEN: usize = 6; // type(2) + length(4)

const SECTION_PROGRAM_NAME: u16 = 0x0001;
const SECTION_BASIC_FLAG: u16 = 0x0002;
const SECTION_MEMORY_BYTES: u16 = 0x0100;

/// What a PROG file described, after a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgDescriptor {
    pub name: Option<String>,
    pub is_basic: bool,
    pub memory_sections_applied: usize,
}

fn read_u16(data: &[u8], at: usize) -> Result<u16, ProgParseError> {
    data.get(at..at + 2)
        .map(|s| u16::from_le_bytes([s[0], s[1]]))
        .ok_or(ProgParseError::Truncated {
            expected: at + 2,
            actual: data.len(),
        })
}

fn read_u32(data: &[u8], at: usize) -> Result<u32, ProgParseError> {
    data.get(at..at + 4)
        .map(|s| u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
        .ok_or(ProgParseError::Truncated {
            expected: at + 4,
            actual: data.len(),
        })
}

/// Parses `data` as a PROG file and applies its memory sections to `bus`'s
/// RAM in order. Memory is left untouched if parsing fails at any point.
pub fn load_prog(bus: &mut MemoryBus, data: &[u8]) -> Result<ProgDescriptor, ProgParseError> {
    if data.len() < HEADER_LEN {
        return Err(ProgParseError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    if data[0..4] != MAGIC {
        let mut got = [0u8; 4];
        got.copy_from_slice(&data[0..4]);
        return Err(ProgParseError::BadMagic(got));
    }

    let _version = read_u16(data, 4)?;
    let section_count = read_u16(data, 6)?;

    // Parse every section before writing anything, so a late parse error
    // never leaves RAM half-patched.
    struct Section<'a> {
        kind: u16,
        payload: &'a [u8],
    }
    let mut sections = Vec::with_capacity(section_count as usize);
    let mut cursor = HEADER_LEN;
    for _ in 0..section_count {
        let kind = read_u16(data, cursor)?;
        let length = read_u32(data, cursor + 2)? as usize;
        let payload_start = cursor + SECTION_HEADER_LEN;
        let payload_end =
            payload_start
                .checked_add(length)
                .ok_or_else(|| ProgParseError::BadLength {
                    description: format!("section at offset {cursor} overflows usize"),
                })?;
        let payload = data
            .get(payload_start..payload_end)
            .ok_or(ProgParseError::Truncated {
                expected: payload_end,
                actual: data.len(),
            })?;
        sections.push(Section { kind, payload });
        cursor = payload_end;
    }

    let mut descriptor = ProgDescriptor::default();
    let mut pending_writes: Vec<(u16, &[u8])> = Vec::new();

    for section in &sections {
        match section.kind {
            SECTION_PROGRAM_NAME => {
                descriptor.name = Some(String::from_utf8_lossy(section.payload).into_owned());
            }
            SECTION_BASIC_FLAG => {
                descriptor.is_basic = section.payload.first().copied().unwrap_or(0) != 0;
            }
            SECTION_MEMORY_BYTES => {
                if section.payload.len() < 4 {
                    return Err(ProgParseError::Truncated {
                        expected: 4,
                        actual: section.payload.len(),
                    });
                }
                let address = u16::from_le_bytes([section.payload[0], section.payload[1]]);
                let size = u16::from_le_bytes([section.payload[2], section.payload[3]]) as usize;
                let bytes = section.payload.get(4..4 + size).ok_or_else(|| {
                    ProgParseError::BadLength {
                        description: format!(
                            "memory section at 0x{address:04X} declares {size} bytes but only has {}",
                            section.payload.len().saturating_sub(4)
                        ),
                    }
                })?;
                if address as u32 + size as u32 > 0x1_0000 {
                    return Err(ProgParseError::BadLength {
                        description: format!(
                            "memory section at 0x{address:04X} of length {size} overflows the 16-bit address space"
                        ),
                    });
                }
                pending_writes.push((address, bytes));
            }
            other => {
                warn!("PROG loader: skipping unrecognized section type 0x{other:04X}");
            }
        }
    }

    for (address, bytes) in pending_writes {
        for (i, byte) in bytes.iter().enumerate() {
            bus.write8(address.wrapping_add(i as u16), *byte);
        }
        descriptor.memory_sections_applied += 1;
    }

    Ok(descriptor)
}

/// Loads a raw, header-less ROM image (the BASIC ROM case from spec.md §6):
/// exactly 8192 bytes, copied verbatim to 0xE000.
pub fn load_raw_rom(bus: &mut MemoryBus, data: &[u8]) -> Result<(), RomSizeError> {
    if data.len() != ROM_LEN as usize {
        return Err(RomSizeError { actual: data.len() });
    }
    bus.load_rom(data);
    Ok(())
}
