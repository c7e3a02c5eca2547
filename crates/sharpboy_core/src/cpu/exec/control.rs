use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_jr_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        self.jr(self.cc_condition(opcode >> 3))
    }

    pub(super) fn exec_jp_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        self.jp_cond(self.cc_condition(opcode >> 3))
    }

    pub(super) fn exec_jp_a16(&mut self) -> u32 {
        self.regs.pc = self.imm16();
        16
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cond = self.cc_condition(opcode >> 3);
        self.call_cond(bus, cond)
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cond = self.cc_condition(opcode >> 3);
        self.ret_cond(bus, cond)
    }
}
