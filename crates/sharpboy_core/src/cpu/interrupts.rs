mod ime;
mod poll;
mod service;

use bitflags::bitflags;

use super::Bus;

/// Interrupt flag register (IF).
pub const IF_REGISTER: u16 = 0xFF0F;
/// Interrupt enable register (IE).
pub const IE_REGISTER: u16 = 0xFFFF;

bitflags! {
    /// Interrupt sources as laid out in IE and IF. Lower bits have higher
    /// priority.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interrupt: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl Interrupt {
    /// Highest-priority source in the set, if any.
    pub fn highest_priority(self) -> Option<Interrupt> {
        if self.is_empty() {
            None
        } else {
            Some(Interrupt::from_bits_truncate(1 << self.bits().trailing_zeros()))
        }
    }

    /// Handler address for a single source: 0x0040, 0x0048, 0x0050, 0x0058
    /// or 0x0060.
    pub fn vector(self) -> u16 {
        0x0040 + (self.bits().trailing_zeros() as u16) * 8
    }
}

/// Raise `interrupt` in IF. Peripherals call this between CPU cycles.
pub fn request_interrupt<B: Bus>(bus: &mut B, interrupt: Interrupt) {
    let iflags = bus.read8(IF_REGISTER);
    bus.write8(IF_REGISTER, iflags | interrupt.bits());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_follow_bit_order() {
        assert_eq!(Interrupt::VBLANK.vector(), 0x0040);
        assert_eq!(Interrupt::LCD_STAT.vector(), 0x0048);
        assert_eq!(Interrupt::TIMER.vector(), 0x0050);
        assert_eq!(Interrupt::SERIAL.vector(), 0x0058);
        assert_eq!(Interrupt::JOYPAD.vector(), 0x0060);
    }

    #[test]
    fn vblank_wins_priority() {
        let pending = Interrupt::JOYPAD | Interrupt::TIMER | Interrupt::VBLANK;
        assert_eq!(pending.highest_priority(), Some(Interrupt::VBLANK));
        assert_eq!(
            (Interrupt::SERIAL | Interrupt::JOYPAD).highest_priority(),
            Some(Interrupt::SERIAL)
        );
        assert_eq!(Interrupt::empty().highest_priority(), None);
    }
}
