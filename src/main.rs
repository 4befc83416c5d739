use std::env;
use std::ffi::OsString;
use std::process;

use clap::Parser;

use dueling_generators::day_15::{self, Mode, Part};
use dueling_generators::utils::errors::Result;

/// Counts how often two congruential generators agree on their low 16 bits.
/// Any argument at all switches from the puzzle input to the worked example.
#[derive(Parser, Debug)]
#[command(
    name = "generator",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    // clap swallows a bare `--`, so presence is taken from the raw arguments.
    #[arg(skip)]
    any_argument: bool,
}

impl Args {
    fn parse_args<I, T>(raw: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let mut args = Args::parse_from(raw.iter().cloned());
        args.any_argument = raw.len() > 1;

        args
    }

    fn mode(&self) -> Mode {
        if self.any_argument {
            Mode::Example
        } else {
            Mode::Input
        }
    }
}

fn run(mode: Mode) -> Result<()> {
    println!("{}\n", mode.banner());

    let parts = Part::all();
    for (index, part) in parts.iter().enumerate() {
        let report = day_15::play(&part.config(mode))?;

        println!("{}\n", day_15::format_samples(&report.samples));
        println!("{}", day_15::format_count(report.count));

        if index + 1 < parts.len() {
            println!();
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse_args(env::args_os());

    if let Err(e) = run(args.mode()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
