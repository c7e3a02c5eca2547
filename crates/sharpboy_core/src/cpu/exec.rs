mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};

impl Cpu {
    /// Execute the unprefixed opcode held in IR and return its T-cycles.
    ///
    /// Operands were already latched into MBR by the decode stage. The
    /// match is exhaustive over all 256 byte values; the opcode holes go
    /// through `exec_illegal`, which only returns here under the NOP
    /// policy.
    pub(super) fn execute_main<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let opcode = self.ir;
        let cycles = match opcode {
            0x00 => 4,

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(opcode),

            // LD (BC/DE/HL±), A
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(bus, opcode),

            // LD A, (BC/DE/HL±)
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(bus, opcode),

            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.exec_inc8_reg(bus, opcode)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.exec_dec8_reg(bus, opcode)
            }

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(bus, opcode)
            }

            // RLCA / RRCA / RLA / RRA
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            0x08 => self.exec_ld_a16_sp(bus),
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            0x10 => self.exec_stop(),

            0x18 => self.jr(true),
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(opcode),

            0x27 => self.exec_daa(),
            0x2F => self.exec_cpl(),
            0x37 => self.exec_scf(),
            0x3F => self.exec_ccf(),

            // LD r1, r2 (0x76 is HALT)
            0x40..=0x7F => self.exec_ld_rr_or_halt(bus, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode),

            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.exec_ret_cc(bus, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(bus, opcode),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.exec_jp_cc(opcode),
            0xC3 => self.exec_jp_a16(),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.exec_call_cc(bus, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(bus, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(opcode),

            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            0xC9 => self.exec_ret(bus),
            // Only reachable if IR was loaded without going through fetch.
            0xCB => self.execute_cb(bus),
            0xCD => self.exec_call_a16(bus),
            0xD9 => self.exec_reti(bus),

            0xE0 | 0xF0 => self.exec_ldh_a8(bus, opcode),
            0xE2 | 0xF2 => self.exec_ldh_c(bus, opcode),
            0xE8 => self.exec_add_sp_r8(),
            0xE9 => self.exec_jp_hl(),
            0xEA | 0xFA => self.exec_ld_a16_a(bus, opcode),

            0xF3 => self.exec_di(),
            0xF8 => self.exec_ld_hl_sp_r8(),
            0xF9 => self.exec_ld_sp_hl(),
            0xFB => self.exec_ei(),

            // Opcode holes. Pan Docs: these hard-lock the CPU on hardware.
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
                return self.exec_illegal();
            }
        };
        Some(cycles)
    }
}
