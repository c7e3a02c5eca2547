use crate::cpu::{Bus, Cpu, LowPower};

impl Cpu {
    pub(super) fn exec_ld_rr_d16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.imm16();
        self.regs.set_rp(opcode >> 4, value);
        12
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));
        let reg = (opcode >> 3) & 0x07;
        let value = self.imm8();
        self.write_reg8(bus, reg, value);

        if reg == 6 { 12 } else { 8 }
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.imm16();
        bus.write16(addr, self.regs.sp);
        20
    }

    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = 0xFF00 | u16::from(self.imm8());
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        12
    }

    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c);
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        8
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = self.imm16();
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        16
    }

    /// Address for the `(BC)`, `(DE)`, `(HL+)`, `(HL-)` forms, applying the
    /// HL post-increment/decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        8
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        8
    }

    pub(super) fn exec_ld_rr_or_halt<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        if opcode == 0x76 {
            // With IME clear and an interrupt already pending the CPU does
            // not halt; instead the next opcode byte is fetched twice.
            if !self.ime && !Self::pending_interrupts(bus).is_empty() {
                self.halt_bug = true;
            } else {
                self.low_power = Some(LowPower::Halt);
            }
            return 4;
        }

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);

        if dst == 6 || src == 6 { 8 } else { 4 }
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }
}
