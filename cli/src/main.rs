use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jr100_core::error::RomSizeError;
use jr100_core::prelude::*;
use jr100_core::prog;

/// Cycles per emulated frame, derived from the real JR-100's ~894kHz CPU
/// clock at a 60Hz frame rate. Recorded as an invented constant in
/// DESIGN.md — the spec leaves the exact clock unspecified.
const CYCLES_PER_FRAME: u32 = 14_894;

#[derive(Parser)]
#[command(name = "jr100-cli", about = "Headless JR-100 emulation core driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a ROM (and optional PROG file) and run a bounded number of frames.
    Run {
        /// Path to an 8KB raw JR-100 BASIC ROM image.
        #[arg(long)]
        rom: PathBuf,

        /// Path to a JR-100 PROG-format program file, loaded after reset.
        #[arg(long)]
        program: Option<PathBuf>,

        /// Presentation scale factor. Accepted for compatibility with a
        /// future display front-end; this CLI has no presentation layer.
        #[arg(long, default_value_t = 3)]
        scale: u32,

        /// Accepted for compatibility with a future display front-end.
        #[arg(long, default_value_t = false)]
        fullscreen: bool,

        /// Number of 60Hz frames to run before reporting final CPU state.
        #[arg(long, default_value_t = 60)]
        frames: u32,
    },
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("JR100_DEBUG").as_deref() == Ok("audio") {
        builder.filter_module("jr100_cli::audio", log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            rom,
            program,
            scale,
            fullscreen,
            frames,
        } => run(&rom, program.as_deref(), scale, fullscreen, frames),
    }
}

fn run(
    rom_path: &std::path::Path,
    program_path: Option<&std::path::Path>,
    scale: u32,
    fullscreen: bool,
    frames: u32,
) -> ExitCode {
    log::debug!("scale={scale} fullscreen={fullscreen} frames={frames}");

    let rom_data = match std::fs::read(rom_path) {
        Ok(data) => data,
        Err(e) => {
            log::error!("failed to read ROM {}: {e}", rom_path.display());
            eprintln!("error: failed to read ROM {}: {e}", rom_path.display());
            return ExitCode::from(2);
        }
    };

    let mut machine = Machine::new();
    if let Err(RomSizeError { actual }) = prog::load_raw_rom(&mut machine.bus, &rom_data) {
        log::error!("bad ROM size: expected 8192 bytes, got {actual}");
        eprintln!("error: ROM size mismatch: expected 8192 bytes, got {actual}");
        return ExitCode::from(2);
    }
    machine.reset();

    if let Some(path) = program_path {
        let prog_data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::error!("failed to read PROG file {}: {e}", path.display());
                eprintln!("error: failed to read PROG file {}: {e}", path.display());
                return ExitCode::from(2);
            }
        };
        match prog::load_prog(&mut machine.bus, &prog_data) {
            Ok(descriptor) => {
                log::info!(
                    "loaded PROG file {} (name={:?}, basic={})",
                    path.display(),
                    descriptor.name,
                    descriptor.is_basic
                );
            }
            Err(e) => {
                log::error!("failed to parse PROG file {}: {e}", path.display());
                eprintln!("error: failed to parse PROG file {}: {e}", path.display());
                return ExitCode::from(2);
            }
        }
    }

    for frame in 0..frames {
        if let Err(e) = machine.run_for(CYCLES_PER_FRAME) {
            log::error!("CPU fault on frame {frame}: {e}");
            eprintln!("error: CPU fault on frame {frame}: {e}");
            return ExitCode::from(1);
        }
    }

    println!(
        "ran {frames} frames; pc=0x{:04X} a=0x{:02X} b=0x{:02X} x=0x{:04X} sp=0x{:04X} cc=0x{:02X}",
        machine.cpu.pc, machine.cpu.a, machine.cpu.b, machine.cpu.x, machine.cpu.sp, machine.cpu.cc
    );
    ExitCode::SUCCESS
}
