use typed_builder::TypedBuilder;

/// DMG master clock in Hz.
pub const DMG_CLOCK_HZ: u32 = 4_194_304;

/// Size of the cartridge external-RAM window (0xA000..=0xBFFF).
pub const DEFAULT_EXTERNAL_RAM_SIZE: usize = 0x2000;

/// What the CPU does when it dispatches one of the unassigned opcodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum IllegalOpcodePolicy {
    /// Log the failing address and lock the core with [`crate::CpuError`].
    #[default]
    Fault,
    /// Log a warning and carry on as if a NOP had been executed.
    ///
    /// Useful when fuzzing or running homebrew that jumps into data.
    Nop,
}

/// Emulator-wide settings, fixed at power-on.
///
/// ```
/// use sharpboy_core::{EmulatorConfig, IllegalOpcodePolicy};
///
/// let config = EmulatorConfig::builder()
///     .illegal_opcode_policy(IllegalOpcodePolicy::Nop)
///     .run_boot_rom(false)
///     .build();
/// assert_eq!(config.clock_hz, 4_194_304);
/// ```
#[derive(TypedBuilder, Clone, Debug, PartialEq, Eq)]
pub struct EmulatorConfig {
    #[builder(default = DMG_CLOCK_HZ)]
    pub clock_hz: u32,
    #[builder(default = DEFAULT_EXTERNAL_RAM_SIZE)]
    pub external_ram_size: usize,
    #[builder(default)]
    pub illegal_opcode_policy: IllegalOpcodePolicy,
    /// Start from the built-in boot program at 0x0000. When false the
    /// console powers on directly in the post-boot state at 0x0100.
    #[builder(default = true)]
    pub run_boot_rom: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
