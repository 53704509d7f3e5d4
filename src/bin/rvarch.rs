//! Command-line front end for the architecture string parser.
//!
//! Mirrors the hooks a compiler driver calls: `expand` turns an arch string into a
//! normalized `-march=`, `cpu` does the same from a `-mcpu=` value and `tune` resolves the
//! default `-mtune=`. Set `RUST_LOG=debug` to trace parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rvarch::{ArchContext, ArchFlags, TargetOption};

#[derive(Parser)]
#[command(name = "rvarch", version, about = "RISC-V -march string canonicalizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints `-march=` with implied extensions spelled out
    Expand { arch: String },
    /// Prints the canonical form with every version written out
    Canonical { arch: String },
    /// Prints `-march=` for a CPU's default architecture
    Cpu {
        name: String,
        /// Architecture to use when the CPU is unknown
        #[arg(long)]
        default_arch: Option<String>,
    },
    /// Prints the tuning model for a CPU
    Tune {
        cpu: String,
        #[arg(long, default_value = "rocket")]
        fallback: String,
    },
    /// Lists the feature flags an architecture enables
    Flags { arch: String },
    /// Processes `-march=` / `-mcpu=` arguments in order and prints the final architecture
    Options {
        #[arg(allow_hyphen_values = true, required = true)]
        args: Vec<String>,
        /// Include every version in the output
        #[arg(long)]
        versions: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Expand { arch } => println!("{}", rvarch::expand_arch(&arch)?),
        Command::Canonical { arch } => println!("{}", rvarch::parse(&arch)?),
        Command::Cpu { name, default_arch } => {
            println!(
                "{}",
                rvarch::expand_arch_from_cpu(&name, default_arch.as_deref())?
            );
        }
        Command::Tune { cpu, fallback } => {
            println!("{}", rvarch::default_mtune(&cpu, &fallback));
        }
        Command::Flags { arch } => {
            let list = rvarch::parse(&arch)?;
            for (name, _) in ArchFlags::from_subsets(&list).iter_names() {
                println!("{name}");
            }
        }
        Command::Options { args, versions } => return Ok(run_options(&args, versions)),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_options(args: &[String], versions: bool) -> ExitCode {
    let mut ctx = ArchContext::new();
    let mut failed = false;
    for arg in args {
        let Some(option) = TargetOption::from_arg(arg) else {
            eprintln!("{}", rvarch::unrecognized_option(arg).format_human());
            continue;
        };
        if let Err(err) = ctx.handle_option(&option) {
            eprintln!("{}", err.to_diagnostic().format_human());
            failed = true;
        }
    }
    let arch = ctx.arch_str(versions);
    if !arch.is_empty() {
        println!("-march={arch}");
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
