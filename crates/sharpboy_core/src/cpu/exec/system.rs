use crate::config::IllegalOpcodePolicy;
use crate::cpu::{Cpu, LowPower};
use crate::error::CpuError;

impl Cpu {
    /// STOP is a 2-byte instruction; its padding byte was consumed by
    /// decode and is ignored here.
    pub(super) fn exec_stop(&mut self) -> u32 {
        self.low_power = Some(LowPower::Stop);
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        4
    }

    /// Handle one of the unassigned opcodes according to the configured
    /// policy. Returns `None` once the fault has been latched.
    pub(super) fn exec_illegal(&mut self) -> Option<u32> {
        let opcode = self.ir;
        let addr = self.instr_addr;
        match self.illegal_opcode_policy {
            IllegalOpcodePolicy::Nop => {
                log::warn!("illegal opcode 0x{opcode:02X} at 0x{addr:04X} executed as NOP");
                Some(4)
            }
            IllegalOpcodePolicy::Fault => {
                log::error!(
                    "CPU locked: illegal opcode 0x{opcode:02X} at 0x{addr:04X} ({regs})",
                    regs = self.regs,
                );
                self.fault = Some(CpuError::IllegalOpcode {
                    addr,
                    opcode,
                    regs: self.regs,
                });
                None
            }
        }
    }
}
