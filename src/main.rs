use std::fs;

use bpp::{execute, run_with_report};
use clap::Parser;
use tracing::{Level, debug};

/// bpp runs b++ programs: a tiny integer language with `dhori`, `dekhao`,
/// `jodi`, `nahole` and `ghuri`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bpp to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the phase-by-phase transcript instead of only the program
    /// output.
    #[arg(short, long)]
    report: bool,

    /// Increases log verbosity on stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    debug!(bytes = script.len(), file = args.file, "source loaded");

    if args.report {
        let report = run_with_report(&script);
        println!("{report}");
        if !report.outcome.success {
            std::process::exit(1);
        }
        return;
    }

    match execute(&script) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
