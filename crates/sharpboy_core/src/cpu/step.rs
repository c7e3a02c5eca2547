mod stages;

use crate::error::CpuError;

use super::{Bus, Cpu};

/// Instruction-cycle state.
///
/// The normal walk is CheckInterrupts -> Fetch -> Decode -> Execute and
/// back to CheckInterrupts. `Stop` parks the machine after HALT or STOP
/// and is left only through a wake-up condition, never by `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleState {
    Stop,
    CheckInterrupts,
    Fetch,
    Decode,
    Execute,
}

impl CycleState {
    /// Successor in the normal instruction cycle. `Stop` maps to itself.
    pub fn next(self) -> Self {
        match self {
            CycleState::Stop => CycleState::Stop,
            CycleState::CheckInterrupts => CycleState::Fetch,
            CycleState::Fetch => CycleState::Decode,
            CycleState::Decode => CycleState::Execute,
            CycleState::Execute => CycleState::CheckInterrupts,
        }
    }
}

/// Idle cost charged for each `cycle()` call spent parked.
const PARKED_CYCLES: u32 = 4;

impl Cpu {
    /// Run one full instruction cycle: service a pending interrupt if IME
    /// allows, then fetch, decode and execute one instruction.
    ///
    /// Returns `Ok(true)` while the CPU is running and `Ok(false)` when it
    /// is parked in HALT/STOP (time still advances by 4 T-cycles per call
    /// so that peripherals can raise the interrupt that wakes it). An
    /// illegal opcode under the fault policy returns an error, and every
    /// later call returns the same error.
    pub fn cycle<B: Bus>(&mut self, bus: &mut B) -> Result<bool, CpuError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        self.last_cycles = 0;

        if self.state == CycleState::Stop {
            if !self.should_wake(bus) {
                self.account(PARKED_CYCLES);
                return Ok(false);
            }
            log::trace!("waking from {:?} at PC=0x{:04X}", self.low_power, self.regs.pc);
            self.low_power = None;
            self.state = CycleState::CheckInterrupts;
        }

        loop {
            match self.state {
                CycleState::CheckInterrupts => {
                    if let Some(cycles) = self.service_interrupt(bus) {
                        self.account(cycles);
                    }
                }
                CycleState::Fetch => self.fetch(bus),
                CycleState::Decode => self.decode(bus),
                CycleState::Execute => {
                    let Some(cycles) = self.execute(bus) else {
                        return Err(self.locked_error());
                    };
                    self.account(cycles);
                    self.apply_ime_delay();
                }
                CycleState::Stop => return Ok(false),
            }

            let finished = self.state == CycleState::Execute;
            self.state = self.state.next();
            if finished {
                break;
            }
        }

        if self.low_power.is_some() {
            self.state = CycleState::Stop;
            return Ok(false);
        }
        Ok(true)
    }

    #[inline]
    fn account(&mut self, cycles: u32) {
        self.last_cycles += cycles;
        self.total_cycles += u64::from(cycles);
    }
}
