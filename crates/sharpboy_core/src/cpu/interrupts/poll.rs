use super::super::{Bus, Cpu, LowPower};
use super::{Interrupt, IE_REGISTER, IF_REGISTER};

impl Cpu {
    /// Sources that are both requested (IF) and enabled (IE).
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(bus: &mut B) -> Interrupt {
        let ie = bus.read8(IE_REGISTER);
        let iflags = bus.read8(IF_REGISTER);
        Interrupt::from_bits_truncate(ie & iflags)
    }

    /// Decide whether a parked CPU resumes.
    ///
    /// HALT ends as soon as any enabled interrupt is pending, whether or not
    /// IME allows it to be serviced. STOP only ends on a joypad request.
    pub(in crate::cpu) fn should_wake<B: Bus>(&self, bus: &mut B) -> bool {
        match self.low_power {
            Some(LowPower::Halt) => !Self::pending_interrupts(bus).is_empty(),
            Some(LowPower::Stop) => {
                let iflags = Interrupt::from_bits_truncate(bus.read8(IF_REGISTER));
                iflags.contains(Interrupt::JOYPAD)
            }
            None => true,
        }
    }
}
