use jr100_core::prelude::*;

/// Minimal bus for testing: flat 64KB read/write memory, no peripherals.
pub struct TestBus {
    pub memory: [u8; 0x10000],
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// Runs `n` whole instructions (NOT cycles — `step` always executes exactly
/// one instruction per call).
pub fn step_n(cpu: &mut Mb8861, bus: &mut TestBus, n: usize) {
    for _ in 0..n {
        cpu.step(bus).expect("illegal opcode in test program");
    }
}
