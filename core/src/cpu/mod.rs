//! CPU abstraction (spec.md §4.1, §4.1a).

pub mod mb8861;
pub mod state;

pub use state::{CpuStateTrait, Mb8861State};

use crate::core::bus::Bus;
use crate::error::CpuError;

/// Generic stepping interface the machine loop drives.
///
/// Unlike a per-cycle tick model, `step` always executes exactly one
/// instruction (or, when an interrupt is serviced, one interrupt-entry
/// sequence) and reports how many clock cycles that took.
pub trait Cpu {
    /// Reset to power-on state and load PC from the reset vector.
    fn reset<B: Bus>(&mut self, bus: &mut B);

    /// Execute the next instruction (or interrupt entry, if one is
    /// pending and unmasked) and return the cycles it consumed.
    fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u8, CpuError>;

    /// True while halted in a WAI wait-for-interrupt state.
    fn is_sleeping(&self) -> bool;

    /// Level-sensitive IRQ line, masked by the CC register's I bit.
    fn set_irq_line(&mut self, asserted: bool);

    /// Edge-sensitive NMI line; only the low-to-high transition matters.
    fn set_nmi_line(&mut self, asserted: bool);
}
