//! MB8861 CPU core (6800-family instruction set plus NIM/OIM/XIM/TMM).

mod alu;
mod branch;
mod extended;
mod load_store;
mod stack;

use crate::core::bus::Bus;
use crate::cpu::state::{CpuStateTrait, Mb8861State};
use crate::cpu::Cpu;
use crate::error::CpuError;

pub(crate) const RESET_VECTOR: u16 = 0xFFFE;
pub(crate) const NMI_VECTOR: u16 = 0xFFFC;
pub(crate) const SWI_VECTOR: u16 = 0xFFFA;
pub(crate) const IRQ_VECTOR: u16 = 0xFFF8;

#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum CcFlag {
    C = 0x01,
    V = 0x02,
    Z = 0x04,
    N = 0x08,
    I = 0x10,
    H = 0x20,
}

/// MB8861 register file and interrupt-line state.
pub struct Mb8861 {
    pub a: u8,
    pub b: u8,
    pub x: u16,
    pub sp: u16,
    pub pc: u16,
    pub cc: u8,

    sleeping: bool,
    nmi_line: bool,
    nmi_previous: bool,
    irq_line: bool,
}

impl Default for Mb8861 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mb8861 {
    pub fn new() -> Self {
        Self {
            a: 0,
            b: 0,
            x: 0,
            sp: 0,
            pc: 0,
            cc: CcFlag::I as u8,
            sleeping: false,
            nmi_line: false,
            nmi_previous: false,
            irq_line: false,
        }
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: CcFlag, set: bool) {
        if set {
            self.cc |= flag as u8;
        } else {
            self.cc &= !(flag as u8);
        }
    }

    #[inline]
    pub(crate) fn flag_set(&self, flag: CcFlag) -> bool {
        self.cc & (flag as u8) != 0
    }

    /// Checks the interrupt lines and, if one is unmasked, enters it.
    /// Returns the cycle cost of the interrupt-entry sequence taken.
    fn service_interrupts(&mut self, bus: &mut impl Bus) -> Option<u8> {
        let nmi_edge = self.nmi_line && !self.nmi_previous;
        self.nmi_previous = self.nmi_line;

        if nmi_edge {
            return Some(self.vector_into(bus, NMI_VECTOR));
        }
        if self.irq_line && !self.flag_set(CcFlag::I) {
            return Some(self.vector_into(bus, IRQ_VECTOR));
        }
        None
    }

    fn vector_into(&mut self, bus: &mut impl Bus, vector: u16) -> u8 {
        if self.sleeping {
            // WAI already pushed the full register image; just mask and vector.
            self.sleeping = false;
            self.set_flag(CcFlag::I, true);
            self.pc = bus.read16(vector);
            4
        } else {
            self.enter_interrupt(bus, vector);
            12
        }
    }

    fn op_wai(&mut self, bus: &mut impl Bus) {
        self.push16(bus, self.pc);
        self.push16(bus, self.x);
        self.push8(bus, self.a);
        self.push8(bus, self.b);
        self.push8(bus, self.cc);
        self.sleeping = true;
    }

    fn dispatch(&mut self, opcode: u8, bus: &mut impl Bus) -> Option<u8> {
        use CcFlag::*;
        Some(match opcode {
            0x01 => {
                self.op_nop();
                2
            }
            0x06 => {
                self.op_tap();
                2
            }
            0x07 => {
                self.op_tpa();
                2
            }
            0x08 => {
                self.op_inx();
                4
            }
            0x09 => {
                self.op_dex();
                4
            }
            0x0A => {
                self.op_clv();
                2
            }
            0x0B => {
                self.op_sev();
                2
            }
            0x0C => {
                self.op_clc();
                2
            }
            0x0D => {
                self.op_sec();
                2
            }
            0x0E => {
                self.op_cli();
                2
            }
            0x0F => {
                self.op_sei();
                2
            }
            0x10 => {
                self.op_sba();
                2
            }
            0x11 => {
                self.op_cba();
                2
            }
            0x16 => {
                self.op_tab();
                2
            }
            0x17 => {
                self.op_tba();
                2
            }
            0x19 => {
                self.op_daa();
                2
            }
            0x1B => {
                self.op_aba();
                2
            }

            0x20 => {
                self.op_bra(bus);
                4
            }
            0x22 => {
                self.op_bhi(bus);
                4
            }
            0x23 => {
                self.op_bls(bus);
                4
            }
            0x24 => {
                self.op_bcc(bus);
                4
            }
            0x25 => {
                self.op_bcs(bus);
                4
            }
            0x26 => {
                self.op_bne(bus);
                4
            }
            0x27 => {
                self.op_beq(bus);
                4
            }
            0x28 => {
                self.op_bvc(bus);
                4
            }
            0x29 => {
                self.op_bvs(bus);
                4
            }
            0x2A => {
                self.op_bpl(bus);
                4
            }
            0x2B => {
                self.op_bmi(bus);
                4
            }
            0x2C => {
                self.op_bge(bus);
                4
            }
            0x2D => {
                self.op_blt(bus);
                4
            }
            0x2E => {
                self.op_bgt(bus);
                4
            }
            0x2F => {
                self.op_ble(bus);
                4
            }

            0x30 => {
                self.op_tsx();
                4
            }
            0x31 => {
                self.op_ins();
                4
            }
            0x32 => {
                self.op_pula(bus);
                4
            }
            0x33 => {
                self.op_pulb(bus);
                4
            }
            0x34 => {
                self.op_des();
                4
            }
            0x35 => {
                self.op_txs();
                4
            }
            0x36 => {
                self.op_psha(bus);
                4
            }
            0x37 => {
                self.op_pshb(bus);
                4
            }
            0x39 => {
                self.op_rts(bus);
                5
            }
            0x3B => {
                self.op_rti(bus);
                10
            }
            0x3E => {
                self.op_wai(bus);
                9
            }
            0x3F => {
                self.op_swi(bus);
                12
            }

            0x40 => {
                self.a = self.perform_neg(self.a);
                2
            }
            0x43 => {
                self.a = self.perform_com(self.a);
                2
            }
            0x44 => {
                self.a = self.perform_lsr(self.a);
                2
            }
            0x46 => {
                self.a = self.perform_ror(self.a);
                2
            }
            0x47 => {
                self.a = self.perform_asr(self.a);
                2
            }
            0x48 => {
                self.a = self.perform_asl(self.a);
                2
            }
            0x49 => {
                self.a = self.perform_rol(self.a);
                2
            }
            0x4A => {
                self.a = self.perform_dec(self.a);
                2
            }
            0x4C => {
                self.a = self.perform_inc(self.a);
                2
            }
            0x4D => {
                self.perform_tst(self.a);
                2
            }
            0x4F => {
                self.a = self.perform_clr();
                2
            }

            0x50 => {
                self.b = self.perform_neg(self.b);
                2
            }
            0x53 => {
                self.b = self.perform_com(self.b);
                2
            }
            0x54 => {
                self.b = self.perform_lsr(self.b);
                2
            }
            0x56 => {
                self.b = self.perform_ror(self.b);
                2
            }
            0x57 => {
                self.b = self.perform_asr(self.b);
                2
            }
            0x58 => {
                self.b = self.perform_asl(self.b);
                2
            }
            0x59 => {
                self.b = self.perform_rol(self.b);
                2
            }
            0x5A => {
                self.b = self.perform_dec(self.b);
                2
            }
            0x5C => {
                self.b = self.perform_inc(self.b);
                2
            }
            0x5D => {
                self.perform_tst(self.b);
                2
            }
            0x5F => {
                self.b = self.perform_clr();
                2
            }

            0x60 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_neg(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x63 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_com(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x64 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_lsr(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x66 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_ror(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x67 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_asr(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x68 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_asl(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x69 => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_rol(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x6A => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_dec(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x6C => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_inc(bus.read8(addr));
                bus.write8(addr, r);
                7
            }
            0x6D => {
                let addr = self.indexed_addr(bus);
                self.perform_tst(bus.read8(addr));
                6
            }
            0x6E => {
                self.op_jmp_idx(bus);
                4
            }
            0x6F => {
                let addr = self.indexed_addr(bus);
                let r = self.perform_clr();
                bus.write8(addr, r);
                7
            }

            0x70 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_neg(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x71 => {
                self.op_nim_idx(bus);
                7
            }
            0x72 => {
                self.op_oim_idx(bus);
                7
            }
            0x73 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_com(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x74 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_lsr(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x75 => {
                self.op_xim_idx(bus);
                7
            }
            0x76 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_ror(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x77 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_asr(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x78 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_asl(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x79 => {
                let addr = self.extended_addr(bus);
                let r = self.perform_rol(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x7A => {
                let addr = self.extended_addr(bus);
                let r = self.perform_dec(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x7B => {
                self.op_tmm_idx(bus);
                6
            }
            0x7C => {
                let addr = self.extended_addr(bus);
                let r = self.perform_inc(bus.read8(addr));
                bus.write8(addr, r);
                6
            }
            0x7D => {
                let addr = self.extended_addr(bus);
                self.perform_tst(bus.read8(addr));
                6
            }
            0x7E => {
                self.op_jmp_ext(bus);
                3
            }
            0x7F => {
                let addr = self.extended_addr(bus);
                let r = self.perform_clr();
                bus.write8(addr, r);
                6
            }

            0x80 => {
                let v = self.fetch8(bus);
                self.perform_suba(v);
                2
            }
            0x81 => {
                let v = self.fetch8(bus);
                self.perform_cmpa(v);
                2
            }
            0x82 => {
                let v = self.fetch8(bus);
                self.perform_sbca(v);
                2
            }
            0x84 => {
                let v = self.fetch8(bus);
                self.perform_anda(v);
                2
            }
            0x85 => {
                let v = self.fetch8(bus);
                self.perform_bita(v);
                2
            }
            0x86 => {
                self.op_ldaa_imm(bus);
                2
            }
            0x88 => {
                let v = self.fetch8(bus);
                self.perform_eora(v);
                2
            }
            0x89 => {
                let v = self.fetch8(bus);
                self.perform_adca(v);
                2
            }
            0x8A => {
                let v = self.fetch8(bus);
                self.perform_oraa(v);
                2
            }
            0x8B => {
                let v = self.fetch8(bus);
                self.perform_adda(v);
                2
            }
            0x8C => {
                self.op_cpx_imm(bus);
                3
            }
            0x8D => {
                self.op_bsr(bus);
                8
            }
            0x8E => {
                self.op_lds_imm(bus);
                3
            }

            0x90 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_suba(v);
                3
            }
            0x91 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpa(v);
                3
            }
            0x92 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbca(v);
                3
            }
            0x94 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_anda(v);
                3
            }
            0x95 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_bita(v);
                3
            }
            0x96 => {
                self.op_ldaa_dir(bus);
                3
            }
            0x97 => {
                self.op_staa_dir(bus);
                4
            }
            0x98 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_eora(v);
                3
            }
            0x99 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_adca(v);
                3
            }
            0x9A => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_oraa(v);
                3
            }
            0x9B => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_adda(v);
                3
            }
            0x9C => {
                self.op_cpx_dir(bus);
                4
            }
            0x9E => {
                self.op_lds_dir(bus);
                4
            }
            0x9F => {
                self.op_sts_dir(bus);
                5
            }

            0xA0 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_suba(v);
                5
            }
            0xA1 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpa(v);
                5
            }
            0xA2 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbca(v);
                5
            }
            0xA4 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_anda(v);
                5
            }
            0xA5 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_bita(v);
                5
            }
            0xA6 => {
                self.op_ldaa_idx(bus);
                5
            }
            0xA7 => {
                self.op_staa_idx(bus);
                6
            }
            0xA8 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_eora(v);
                5
            }
            0xA9 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_adca(v);
                5
            }
            0xAA => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_oraa(v);
                5
            }
            0xAB => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_adda(v);
                5
            }
            0xAC => {
                self.op_cpx_idx(bus);
                6
            }
            0xAD => {
                self.op_jsr_idx(bus);
                8
            }
            0xAE => {
                self.op_lds_idx(bus);
                6
            }
            0xAF => {
                self.op_sts_idx(bus);
                6
            }

            0xB0 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_suba(v);
                4
            }
            0xB1 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpa(v);
                4
            }
            0xB2 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbca(v);
                4
            }
            0xB4 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_anda(v);
                4
            }
            0xB5 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_bita(v);
                4
            }
            0xB6 => {
                self.op_ldaa_ext(bus);
                4
            }
            0xB7 => {
                self.op_staa_ext(bus);
                5
            }
            0xB8 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_eora(v);
                4
            }
            0xB9 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_adca(v);
                4
            }
            0xBA => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_oraa(v);
                4
            }
            0xBB => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_adda(v);
                4
            }
            0xBC => {
                self.op_cpx_ext(bus);
                5
            }
            0xBD => {
                self.op_jsr_ext(bus);
                9
            }
            0xBE => {
                self.op_lds_ext(bus);
                5
            }
            0xBF => {
                self.op_sts_ext(bus);
                6
            }

            0xC0 => {
                let v = self.fetch8(bus);
                self.perform_subb(v);
                2
            }
            0xC1 => {
                let v = self.fetch8(bus);
                self.perform_cmpb(v);
                2
            }
            0xC2 => {
                let v = self.fetch8(bus);
                self.perform_sbcb(v);
                2
            }
            0xC4 => {
                let v = self.fetch8(bus);
                self.perform_andb(v);
                2
            }
            0xC5 => {
                let v = self.fetch8(bus);
                self.perform_bitb(v);
                2
            }
            0xC6 => {
                self.op_ldab_imm(bus);
                2
            }
            0xC8 => {
                let v = self.fetch8(bus);
                self.perform_eorb(v);
                2
            }
            0xC9 => {
                let v = self.fetch8(bus);
                self.perform_adcb(v);
                2
            }
            0xCA => {
                let v = self.fetch8(bus);
                self.perform_orab(v);
                2
            }
            0xCB => {
                let v = self.fetch8(bus);
                self.perform_addb(v);
                2
            }
            0xCE => {
                self.op_ldx_imm(bus);
                3
            }

            0xD0 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_subb(v);
                3
            }
            0xD1 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpb(v);
                3
            }
            0xD2 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbcb(v);
                3
            }
            0xD4 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_andb(v);
                3
            }
            0xD5 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_bitb(v);
                3
            }
            0xD6 => {
                self.op_ldab_dir(bus);
                3
            }
            0xD7 => {
                self.op_stab_dir(bus);
                4
            }
            0xD8 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_eorb(v);
                3
            }
            0xD9 => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_adcb(v);
                3
            }
            0xDA => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_orab(v);
                3
            }
            0xDB => {
                let addr = self.direct_addr(bus);
                let v = bus.read8(addr);
                self.perform_addb(v);
                3
            }
            0xDE => {
                self.op_ldx_dir(bus);
                4
            }
            0xDF => {
                self.op_stx_dir(bus);
                5
            }

            0xE0 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_subb(v);
                5
            }
            0xE1 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpb(v);
                5
            }
            0xE2 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbcb(v);
                5
            }
            0xE4 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_andb(v);
                5
            }
            0xE5 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_bitb(v);
                5
            }
            0xE6 => {
                self.op_ldab_idx(bus);
                5
            }
            0xE7 => {
                self.op_stab_idx(bus);
                6
            }
            0xE8 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_eorb(v);
                5
            }
            0xE9 => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_adcb(v);
                5
            }
            0xEA => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_orab(v);
                5
            }
            0xEB => {
                let addr = self.indexed_addr(bus);
                let v = bus.read8(addr);
                self.perform_addb(v);
                5
            }
            0xEC => {
                self.op_adx_imm(bus);
                4
            }
            0xEE => {
                self.op_ldx_idx(bus);
                6
            }
            0xEF => {
                self.op_stx_idx(bus);
                6
            }

            0xF0 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_subb(v);
                4
            }
            0xF1 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_cmpb(v);
                4
            }
            0xF2 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_sbcb(v);
                4
            }
            0xF4 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_andb(v);
                4
            }
            0xF5 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_bitb(v);
                4
            }
            0xF6 => {
                self.op_ldab_ext(bus);
                4
            }
            0xF7 => {
                self.op_stab_ext(bus);
                5
            }
            0xF8 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_eorb(v);
                4
            }
            0xF9 => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_adcb(v);
                4
            }
            0xFA => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_orab(v);
                4
            }
            0xFB => {
                let addr = self.extended_addr(bus);
                let v = bus.read8(addr);
                self.perform_addb(v);
                4
            }
            0xFE => {
                self.op_ldx_ext(bus);
                5
            }
            0xFF => {
                self.op_stx_ext(bus);
                6
            }

            _ => return None,
        })
    }
}

impl Cpu for Mb8861 {
    fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.a = 0;
        self.b = 0;
        self.x = 0;
        self.sp = 0x01FF;
        self.cc = CcFlag::I as u8;
        self.sleeping = false;
        self.nmi_line = false;
        self.nmi_previous = false;
        self.irq_line = false;
        self.pc = bus.read16(RESET_VECTOR);
    }

    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u8, CpuError> {
        if let Some(cycles) = self.service_interrupts(bus) {
            return Ok(cycles);
        }
        if self.sleeping {
            return Ok(1);
        }

        let pc_at_fetch = self.pc;
        let opcode = self.fetch8(bus);
        self.dispatch(opcode, bus)
            .ok_or(CpuError::IllegalOpcode {
                pc: pc_at_fetch,
                opcode,
            })
    }

    fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    fn set_nmi_line(&mut self, asserted: bool) {
        self.nmi_line = asserted;
    }
}

impl CpuStateTrait for Mb8861 {
    type Snapshot = Mb8861State;

    fn snapshot(&self) -> Mb8861State {
        Mb8861State {
            a: self.a,
            b: self.b,
            x: self.x,
            sp: self.sp,
            pc: self.pc,
            cc: self.cc,
            sleeping: self.sleeping,
        }
    }
}
