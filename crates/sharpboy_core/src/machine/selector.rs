use crate::memory::{Memory, BOOT_ROM_SWITCH};

use super::Cartridge;

/// Polled boot-ROM switch.
///
/// While 0xFF50 reads 1, every poll copies the cartridge's fixed window over
/// 0x0000, undoing any CPU writes into the ROM area since the last poll.
#[derive(Clone, Debug, Default)]
pub struct Selector {
    switched: bool,
}

impl Selector {
    /// Returns true if this poll mapped the cartridge.
    pub fn poll(&mut self, memory: &mut Memory, cartridge: &Cartridge) -> bool {
        if memory.read_byte(BOOT_ROM_SWITCH) != 1 {
            return false;
        }

        memory.map_buffer(cartridge.fixed_window(), 0x0000);
        if !self.switched {
            self.switched = true;
            log::info!("boot ROM switched out, cartridge mapped at 0x0000");
        }
        true
    }

    pub fn switched(&self) -> bool {
        self.switched
    }

    pub(super) fn mark_switched(&mut self) {
        self.switched = true;
    }
}
