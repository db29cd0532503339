use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use log::*;

use mmu::instructions::{parse_input, Instruction};
use mmu::{report, Mmu, Policy};

const USAGE: &str = "usage: mmu <input file> -{F | B | W}\n\
                     (F=FIFO | B=BESTFIT | W=WORSTFIT)";

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    // Exactly two arguments: the instruction file and the
    // placement policy flag.
    let mut args = std::env::args().skip(1);
    let (path, flag) = match (args.next(), args.next(), args.next()) {
        (Some(path), Some(flag), None) => (PathBuf::from(path), flag),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let policy = match flag.parse::<Policy>() {
        Ok(policy) => policy,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = run(&path, policy) {
        error!("{error:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(path: &std::path::Path, policy: Policy) -> Result<()> {
    let (partition_size, instructions) = parse_input(path)?;
    info!("Simulating {partition_size} blocks under the {policy} policy.");

    let mut mmu = Mmu::new(partition_size, policy);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for instruction in instructions {
        writeln!(out, "************************")?;

        // Core failures are recoverable: report them and move
        // on to the next instruction.
        let outcome = match instruction {
            Instruction::Allocate { pid, size } => {
                writeln!(out, "ALLOCATE: {size} FROM PID: {pid}")?;
                mmu.allocate(pid, size)
            }
            Instruction::Deallocate { pid } => {
                writeln!(out, "DEALLOCATE MEM: PID {pid}")?;
                mmu.deallocate(pid)
            }
            Instruction::Coalesce => {
                writeln!(out, "COALESCE/COMPACT")?;
                mmu.coalesce();
                Ok(())
            }
        };

        if let Err(error) = outcome {
            warn!("{error}");
        }

        writeln!(out, "************************")?;
        report::write_list(&mut out, "Free Memory", mmu.free_blocks())?;
        writeln!(out)?;
        report::write_list(&mut out, "Allocated Memory", mmu.allocated_blocks())?;
        writeln!(out)?;
        writeln!(out)?;
    }

    Ok(())
}
