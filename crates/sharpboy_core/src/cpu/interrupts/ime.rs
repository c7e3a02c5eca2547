use super::super::Cpu;

impl Cpu {
    /// Advance the EI pipeline after an instruction completes.
    ///
    /// EI arms `ime_enable_pending`; the first completed instruction turns
    /// that into `ime_enable_delay` (this is the EI itself), the second
    /// sets IME.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
