use super::alu::ShiftOp;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute the CB-prefixed instruction held in IR (bit operations,
    /// shifts and rotates).
    ///
    /// The opcode splits into `x` (bits 6-7: group), `y` (bits 3-5: shift
    /// kind or bit index) and `z` (bits 0-2: register, 6 = (HL)).
    pub(super) fn execute_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let op = self.ir;
        let x = op >> 6;
        let y = (op >> 3) & 0x07;
        let z = op & 0x07;
        let on_hl = z == 6;

        match x {
            0 => {
                let value = self.read_reg8(bus, z);
                let result = self.alu_shift(ShiftOp::from_index(y), value);
                self.write_reg8(bus, z, result);
                if on_hl { 16 } else { 8 }
            }
            1 => {
                // BIT b,r: Z = !bit, N = 0, H = 1, C untouched.
                let value = self.read_reg8(bus, z);
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                if on_hl { 12 } else { 8 }
            }
            2 => {
                // RES b,r: no flags.
                let value = self.read_reg8(bus, z) & !(1 << y);
                self.write_reg8(bus, z, value);
                if on_hl { 16 } else { 8 }
            }
            _ => {
                // SET b,r: no flags.
                let value = self.read_reg8(bus, z) | (1 << y);
                self.write_reg8(bus, z, value);
                if on_hl { 16 } else { 8 }
            }
        }
    }
}
