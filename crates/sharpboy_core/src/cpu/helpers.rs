use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Read the byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            // HALT bug: the first fetch after the bug does not increment PC,
            // so the same byte is read twice.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    /// 8-bit immediate operand latched during decode.
    #[inline]
    pub(super) fn imm8(&self) -> u8 {
        self.mbr[0]
    }

    /// 16-bit little-endian immediate operand latched during decode.
    #[inline]
    pub(super) fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.mbr)
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write16(self.regs.sp, value);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    #[inline]
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.get_flag(Flag::Z), // NZ
            1 => self.get_flag(Flag::Z),  // Z
            2 => !self.get_flag(Flag::C), // NC
            _ => self.get_flag(Flag::C),  // C
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(super) fn jr(&mut self, cond: bool) -> u32 {
        let offset = self.imm8() as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
            12
        } else {
            8
        }
    }

    /// Absolute jump helper used by JP cc,a16.
    pub(super) fn jp_cond(&mut self, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.imm16();
            16
        } else {
            12
        }
    }

    /// Conditional call helper used by CALL cc,a16.
    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = self.imm16();
            24
        } else {
            12
        }
    }

    /// Conditional return helper used by RET cc.
    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop_u16(bus);
            20
        } else {
            8
        }
    }
}
