use std::path::Path;

use anyhow::{Context, Result};
use sharpboy_core::{Cartridge, Console, EmulatorConfig};

/// What a headless run got through.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub title: String,
    pub frames: u32,
    pub cycles: u64,
    pub emulated_seconds: f64,
    pub pc: u16,
}

/// Load the ROM at `rom_path` and run it headless for `frames` frames.
pub fn run(rom_path: &Path, frames: u32, config: EmulatorConfig) -> Result<RunReport> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM file '{}'", rom_path.display()))?;
    run_rom(rom, frames, config)
}

/// Run an in-memory ROM image headless for `frames` frames.
pub fn run_rom(rom: Vec<u8>, frames: u32, config: EmulatorConfig) -> Result<RunReport> {
    let cartridge = Cartridge::new(rom, &config).context("invalid ROM image")?;
    let mut console = Console::new(config, cartridge);

    for frame in 0..frames {
        console
            .step_frame()
            .with_context(|| format!("emulation stopped during frame {frame}"))?;
    }

    let report = RunReport {
        title: console.cartridge().title(),
        frames,
        cycles: console.cpu.total_cycles(),
        emulated_seconds: console.emulated_seconds(),
        pc: console.cpu.regs.pc,
    };
    log::info!(
        "ran {} frames ({} cycles, {:.3}s emulated), PC=0x{:04X}",
        report.frames,
        report.cycles,
        report.emulated_seconds,
        report.pc,
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharpboy_core::IllegalOpcodePolicy;

    fn spin_rom() -> Vec<u8> {
        let mut rom = vec![0x00; 0x8000];
        rom[0x0100..0x0102].copy_from_slice(&[0x18, 0xFE]); // JR -2
        rom[0x0134..0x0138].copy_from_slice(b"SPIN");
        rom
    }

    #[test]
    fn runs_boot_and_cartridge_for_requested_frames() {
        // The boot program's VRAM clear alone takes a bit over three frames.
        let report = run_rom(spin_rom(), 6, EmulatorConfig::default()).unwrap();
        assert_eq!(report.title, "SPIN");
        assert_eq!(report.frames, 6);
        assert!(report.cycles >= 6 * 70_224);
        assert!((0x0100..=0x0101).contains(&report.pc));
    }

    #[test]
    fn reports_illegal_opcode_with_frame_context() {
        let mut rom = spin_rom();
        rom[0x0100] = 0xDD;
        let config = EmulatorConfig::builder()
            .run_boot_rom(false)
            .illegal_opcode_policy(IllegalOpcodePolicy::Fault)
            .build();

        let err = run_rom(rom, 1, config).unwrap_err();
        assert!(err.to_string().contains("frame 0"));
        assert!(format!("{err:#}").contains("0xDD"));
    }

    #[test]
    fn rejects_truncated_rom() {
        let err = run_rom(vec![0; 0x40], 1, EmulatorConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("0x150"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("definitely/not/here.gb");
        let err = run(path, 1, EmulatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("here.gb"));
    }
}
