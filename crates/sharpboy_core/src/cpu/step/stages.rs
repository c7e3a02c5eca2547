use crate::cpu::decode::{cb_instruction_length, instruction_length};
use crate::cpu::{Bus, Cpu};
use crate::error::CpuError;

impl Cpu {
    /// Fetch: load IR from PC. A 0xCB prefix pulls in the following byte
    /// as the real opcode and selects the CB table.
    pub(in crate::cpu) fn fetch<B: Bus>(&mut self, bus: &mut B) {
        self.instr_addr = self.regs.pc;
        self.ir = self.fetch8(bus);
        self.prefix_cb = self.ir == 0xCB;
        if self.prefix_cb {
            self.ir = self.fetch8(bus);
        }
    }

    /// Decode: latch the remaining operand bytes into MBR.
    ///
    /// Unassigned opcodes carry no operands; execute decides what to do
    /// with them.
    pub(in crate::cpu) fn decode<B: Bus>(&mut self, bus: &mut B) {
        let length = if self.prefix_cb {
            cb_instruction_length(self.ir)
        } else {
            instruction_length(self.ir).unwrap_or(1)
        };
        // The CB table's two bytes were both consumed by fetch.
        let operands = if self.prefix_cb { 0 } else { length.saturating_sub(1) };

        self.mbr = [0; 2];
        for slot in 0..operands as usize {
            self.mbr[slot] = self.fetch8(bus);
        }
    }

    /// Execute: dispatch IR through the main or CB table.
    pub(in crate::cpu) fn execute<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{:04X}: {}{:02X} [{:02X} {:02X}] {}",
                self.instr_addr,
                if self.prefix_cb { "CB " } else { "" },
                self.ir,
                self.mbr[0],
                self.mbr[1],
                self.regs,
            );
        }

        let cycles = if self.prefix_cb {
            Some(self.execute_cb(bus))
        } else {
            self.execute_main(bus)
        };
        self.prefix_cb = false;
        cycles
    }

    pub(super) fn locked_error(&self) -> CpuError {
        self.fault.clone().unwrap_or(CpuError::IllegalOpcode {
            addr: self.instr_addr,
            opcode: self.ir,
            regs: self.regs,
        })
    }
}
