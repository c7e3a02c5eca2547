use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_push_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.regs.rp2(opcode >> 4);
        self.push_u16(bus, value);
        16
    }

    /// POP rr. POP AF drops the low nibble of F.
    pub(super) fn exec_pop_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        self.regs.set_rp2(opcode >> 4, value);
        12
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        16
    }

    pub(super) fn exec_call_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.call_cond(bus, true)
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        16
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        16
    }
}
