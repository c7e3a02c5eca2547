use super::super::{Bus, Cpu};
use super::{IE_REGISTER, IF_REGISTER};

impl Cpu {
    /// Service the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    pub(in crate::cpu) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime || Self::pending_interrupts(bus).is_empty() {
            return None;
        }

        self.ime = false;
        let mut pc = self.regs.pc;
        if self.halt_bug {
            // The HALT bug's repeated fetch never happens; the handler
            // returns to the byte that would have been read twice.
            self.halt_bug = false;
            pc = pc.wrapping_sub(1);
        }
        let [lo, hi] = pc.to_le_bytes();

        // The high byte of PC is pushed first. When SP was 0x0000 that write
        // lands on IE, so the source is selected only after it.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);

        let selected = Self::pending_interrupts(bus).highest_priority();

        // Writes made by the low-byte push are too late to retarget the
        // dispatch.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);

        match selected {
            Some(interrupt) => {
                let iflags = bus.read8(IF_REGISTER);
                bus.write8(IF_REGISTER, iflags & !interrupt.bits());
                self.regs.pc = interrupt.vector();
                log::debug!(
                    "interrupt {:?}: vector=0x{:04X} return=0x{:04X} SP=0x{:04X} IE=0x{:02X}",
                    interrupt,
                    self.regs.pc,
                    pc,
                    self.regs.sp,
                    bus.read8(IE_REGISTER),
                );
            }
            None => {
                // Every source vanished during the push: the dispatch is
                // cancelled and execution continues at 0x0000.
                self.regs.pc = 0x0000;
            }
        }

        Some(20)
    }
}
