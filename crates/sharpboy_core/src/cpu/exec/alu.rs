use crate::cpu::alu::{AluOp, ShiftOp};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.alu8(AluOp::from_opcode(opcode), value);

        if src == 6 { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.imm8();
        self.alu8(AluOp::from_opcode(opcode), value);
        8
    }

    /// RLCA/RRCA/RLA/RRA: like their CB counterparts on A, except that Z is
    /// always cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let op = ShiftOp::from_index(opcode >> 3);
        self.regs.a = self.alu_shift(op, self.regs.a);
        self.set_flag(Flag::Z, false);
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.rp(opcode >> 4);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8(&mut self) -> u32 {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, self.imm8());
        16
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, self.imm8());
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    /// CPL: A = !A, N and H set, Z and C untouched.
    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    /// SCF: C set, N and H cleared, Z untouched.
    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    /// CCF: C inverted, N and H cleared, Z untouched.
    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
