//! Machine assembly (spec.md §4.8).

use crate::core::bus::MemoryBus;
use crate::cpu::mb8861::Mb8861;
use crate::cpu::Cpu;
use crate::device::tone::ToneGenerator;
use crate::error::CpuError;

/// Owns the CPU, bus, and peripherals, and drives them together one
/// instruction at a time.
pub struct Machine {
    pub cpu: Mb8861,
    pub bus: MemoryBus,
    pub tone: ToneGenerator,
    irq_pending: bool,
    nmi_pending: bool,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Mb8861::new(),
            bus: MemoryBus::new(),
            tone: ToneGenerator::new(),
            irq_pending: false,
            nmi_pending: false,
        }
    }

    /// Zeroes RAM, resets the CPU (which loads PC from the reset vector),
    /// and clears VIA state.
    pub fn reset(&mut self) {
        self.bus.clear_ram();
        self.bus.via = Default::default();
        self.irq_pending = false;
        self.nmi_pending = false;
        self.cpu.reset(&mut self.bus);
    }

    /// Executes one instruction and ticks peripherals by the same cycle
    /// count, keeping the CPU, VIA timers, and tone generator in lockstep.
    pub fn step_one(&mut self) -> Result<u8, CpuError> {
        self.cpu.set_irq_line(self.irq_pending);
        self.cpu.set_nmi_line(self.nmi_pending);
        self.nmi_pending = false;

        let cycles = self.cpu.step(&mut self.bus)?;
        self.bus.via.tick(cycles);
        self.tone
            .update(self.bus.via.pb7_output_enabled(), self.bus.via.t1_latch());
        Ok(cycles)
    }

    /// Repeats `step_one` until cumulative cycles reach `budget`. Returns
    /// the overshoot past `budget` so the caller can subtract it from the
    /// next call's budget and avoid clock drift.
    pub fn run_for(&mut self, budget: u32) -> Result<u32, CpuError> {
        let mut consumed = 0u32;
        while consumed < budget {
            consumed += self.step_one()? as u32;
        }
        Ok(consumed - budget)
    }

    /// Latches a level-sensitive IRQ request, checked before the next fetch.
    pub fn raise_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Clears a previously latched IRQ request (the device deasserted it).
    pub fn lower_irq(&mut self) {
        self.irq_pending = false;
    }

    /// Latches an edge-sensitive NMI request, checked before the next fetch.
    pub fn raise_nmi(&mut self) {
        self.nmi_pending = true;
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
