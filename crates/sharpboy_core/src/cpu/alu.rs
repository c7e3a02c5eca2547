use super::{Cpu, Flag};

/// The eight accumulator operations selected by bits 3-5 of the
/// `0x80..=0xBF` and `0xC6..=0xFE` opcode groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub(super) fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotate/shift operations of the CB table's first quarter, indexed by
/// bits 3-5 of the CB opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    #[inline]
    pub(super) fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

impl Cpu {
    /// Overwrite all four flags at once.
    #[inline]
    pub(super) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.clear_flags();
        self.set_flag(Flag::Z, z);
        self.set_flag(Flag::N, n);
        self.set_flag(Flag::H, h);
        self.set_flag(Flag::C, c);
    }

    #[inline]
    fn carry_in(&self, use_carry: bool) -> u8 {
        u8::from(use_carry && self.get_flag(Flag::C))
    }

    /// Apply an accumulator operation with `value` as the second operand.
    pub(super) fn alu8(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => {
                self.regs.a &= value;
                self.set_flags(self.regs.a == 0, false, true, false);
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            // CP is SUB with the result discarded.
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    /// ADD/ADC: H on carry out of bit 3, C on carry out of bit 7.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry = self.carry_in(use_carry);

        let half = (a & 0x0F) + (value & 0x0F) + carry;
        let full = u16::from(a) + u16::from(value) + u16::from(carry);
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, false, half > 0x0F, full > 0xFF);
    }

    /// SUB/SBC/CP: H on borrow from bit 4, C on borrow from bit 8.
    /// Returns the difference without storing it.
    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry = self.carry_in(use_carry);

        let half_borrow = (a & 0x0F) < (value & 0x0F) + carry;
        let borrow = u16::from(a) < u16::from(value) + u16::from(carry);
        let result = a.wrapping_sub(value).wrapping_sub(carry);

        self.set_flags(result == 0, true, half_borrow, borrow);
        result
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction value, updates A, Z, H
    /// and C, and leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if self.get_flag(Flag::N) {
            a = a.wrapping_sub(adjust);
        } else {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        }

        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, adjust >= 0x60);
        self.regs.a = a;
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// ADD HL,rr: Z preserved, N cleared, H from bit 11, C from bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, u32::from(hl) + u32::from(value) > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed 8-bit immediate (ADD SP,r8 and LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the unsigned addition of the
    /// low byte.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let h = (base & 0x000F) + (offset & 0x000F) > 0x000F;
        let c = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
        self.set_flags(false, false, h, c);
        base.wrapping_add(offset)
    }

    /// Rotate/shift core shared by the CB table and the unprefixed
    /// accumulator rotates. Sets Z from the result, clears N and H, and
    /// sets C from the bit shifted out (SWAP clears C).
    pub(super) fn alu_shift(&mut self, op: ShiftOp, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry_out) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry_out);
        result
    }
}
