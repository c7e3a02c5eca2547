use std::path::PathBuf;

use sharpboy_core::{EmulatorConfig, IllegalOpcodePolicy};

const DEFAULT_FRAMES: u32 = 60;

fn usage() -> ! {
    eprintln!(
        "Usage: sharpboy <rom.gb> [frames] [--skip-boot] [--lenient]\n\
         \n\
         --skip-boot  start at 0x0100 in the post-boot state\n\
         --lenient    execute illegal opcodes as NOP instead of stopping"
    );
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let mut rom_path = None;
    let mut frames = DEFAULT_FRAMES;
    let mut run_boot_rom = true;
    let mut policy = IllegalOpcodePolicy::Fault;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--skip-boot" => run_boot_rom = false,
            "--lenient" => policy = IllegalOpcodePolicy::Nop,
            "-h" | "--help" => usage(),
            _ if rom_path.is_none() => rom_path = Some(PathBuf::from(arg)),
            other => match other.parse() {
                Ok(n) => frames = n,
                Err(_) => {
                    eprintln!("Invalid frame count '{other}'");
                    usage();
                }
            },
        }
    }

    let Some(rom_path) = rom_path else {
        usage();
    };

    let config = EmulatorConfig::builder()
        .run_boot_rom(run_boot_rom)
        .illegal_opcode_policy(policy)
        .build();

    log::info!("Running ROM '{}' for {} frames", rom_path.display(), frames);
    match sharpboy::run(&rom_path, frames, config) {
        Ok(report) => println!(
            "{}: {} frames, {} cycles ({:.3}s emulated), PC=0x{:04X}",
            if report.title.is_empty() { "<untitled>" } else { report.title.as_str() },
            report.frames,
            report.cycles,
            report.emulated_seconds,
            report.pc,
        ),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
