use crate::config::EmulatorConfig;

use super::{Cpu, CycleState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&EmulatorConfig::default())
    }
}

impl Cpu {
    /// Create a CPU in its power-on state: every register cleared and PC at
    /// 0x0000, where the boot ROM is expected to be mapped.
    pub fn new(config: &EmulatorConfig) -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            state: CycleState::CheckInterrupts,
            low_power: None,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            ir: 0,
            mbr: [0; 2],
            prefix_cb: false,
            instr_addr: 0,
            illegal_opcode_policy: config.illegal_opcode_policy,
            fault: None,
            last_cycles: 0,
            total_cycles: 0,
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// The illegal-opcode policy chosen at construction is kept.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.state = CycleState::CheckInterrupts;
        self.low_power = None;
        self.halt_bug = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.ir = 0;
        self.mbr = [0; 2];
        self.prefix_cb = false;
        self.instr_addr = 0;
        self.fault = None;
        self.last_cycles = 0;
        self.total_cycles = 0;
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    ///
    /// These values follow Pan Docs ("Power Up Sequence", DMG column).
    pub fn apply_post_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z, N, H, C = 1,0,1,1
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches 0x0100; software enables
        // interrupts itself via EI/RETI.
        self.ime = false;
    }
}
