use std::{
    fs,
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use libdisassembler::Disassembler;

/// Disassemble a .c8 binary into Chip-8 assembly.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the .c8 file to disassemble
    path: PathBuf,

    /// Write the result to a file instead of the console
    #[arg(short, long)]
    out: bool,

    /// Name for the resulting file
    #[arg(short, long)]
    name: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let program = fs::read(&args.path)
        .with_context(|| format!("Couldn't read program file {}", args.path.display()))?;

    let disassembler = Disassembler::new(&program)
        .with_context(|| format!("Couldn't load program file {}", args.path.display()))?;

    let listing = disassembler.disassemble();

    if args.out {
        let out_path = args
            .name
            .clone()
            .unwrap_or_else(|| default_dump_path(&args.path));

        fs::write(&out_path, listing.to_string())
            .with_context(|| format!("Couldn't write dump file {}", out_path.display()))?;

        log::info!("Wrote {} entries to {}", listing.len(), out_path.display());
    } else {
        print!("{}", listing);
    }

    Ok(())
}

/// `path/to/rom.c8` becomes `path/to/rom_dump.txt`.
fn default_dump_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push("_dump.txt");

    input.with_file_name(name)
}
