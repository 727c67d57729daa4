//! Error taxonomy for the emulation core (spec.md §7).

/// Fatal CPU-level fault: the fetch/decode/execute loop cannot continue
/// without host intervention.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    IllegalOpcode { pc: u16, opcode: u8 },
}

/// Reserved for host-injected bus faults. Never raised internally: unmapped
/// reads return the open-bus constant and unmapped writes are no-ops.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    #[error("bus fault at address 0x{addr:04X}")]
    Fault { addr: u16 },
}

/// PROG file rejected by the loader. The machine's memory is left
/// untouched when any of these are returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgParseError {
    #[error("truncated PROG file: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("bad PROG magic: expected `PROG`, got {0:?}")]
    BadMagic([u8; 4]),

    #[error("section length overflow: {description}")]
    BadLength { description: String },
}

/// Raw ROM image was not exactly 8192 bytes.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ROM size mismatch: expected 8192 bytes, got {actual}")]
pub struct RomSizeError {
    pub actual: usize,
}

/// Non-fatal: the tone generator's host audio backend could not be
/// initialized. The generator degrades to silent mode.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("audio device unavailable, continuing silently")]
pub struct AudioUnavailable;
