//! jsonfmt CLI.
//!
//! Reads a JSON document from a file or stdin and prints it formatted, or
//! just validates it with `--check`. Parse and lex errors go to stderr
//! verbatim with a failing exit code.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsonfmt::{format, parse, FormatOptions};

#[derive(Parser)]
#[command(name = "jsonfmt")]
#[command(about = "Format or validate a JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Indent width per nesting level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    tabs: bool,

    /// Only check that the input parses; print nothing on success
    #[arg(long)]
    check: bool,
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        return match parse(&input) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let options = FormatOptions {
        indent_size: if cli.tabs { 1 } else { cli.indent },
        indent_char: if cli.tabs { '\t' } else { ' ' },
    };

    match format(&input, &options) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
