//! mez: command-line front end for the mez scanner.
//!
//! Usage:
//!   mez [OPTIONS] [FILE]
//!
//! Scans a script and prints its token stream, one token per line (or a
//! JSON array with --json). Diagnostics go to stderr; any reported error
//! makes the exit code non-zero.

use clap::Parser as ClapParser;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "mez", about = "mez - a scanner for the mez scripting language", disable_version_flag = true)]
struct Cli {
    /// Script file to scan.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Print the token stream as a JSON array.
    #[arg(long)]
    json: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the scanner version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

// Exit codes follow the BSD sysexits convention.
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("mez Version 0.1.0");
        return;
    }

    let Some(ref file) = cli.file else {
        print_error("No input file given.");
        eprintln!("Usage: mez [OPTIONS] [FILE]");
        process::exit(EX_USAGE);
    };

    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Failed to read '{}': {}", file, e));
            process::exit(EX_NOINPUT);
        }
    };

    process::exit(run_scan(&cli, &source));
}

fn run_scan(cli: &Cli, source: &str) -> i32 {
    let result = mez_scanner::scan(source);

    // An aborted scan (unterminated string) has no tokens to print.
    if let Some(ref tokens) = result.tokens {
        if cli.json {
            match serde_json::to_string_pretty(tokens) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    print_error(&format!("Failed to serialize tokens: {}", e));
                    return 1;
                }
            }
        } else {
            for token in tokens {
                println!("{}", token);
            }
        }
    }

    let use_color = cli.pretty && atty_is_terminal();
    for diag in result.diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if result.had_error() {
        let count = result.diagnostics.error_count();
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                count,
                if count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        return EX_DATAERR;
    }

    0
}

fn print_diagnostic(diag: &mez_diagnostics::Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        let category = if diag.is_error() { "error" } else { "warning" };
        if let Some(line) = diag.line {
            eprint!("{}line {}{}: ", CYAN, line, RESET);
        }
        eprintln!(
            "{}{}{}{} {}{}{}: {}",
            BOLD, color, category, RESET,
            CYAN, format!("MZ{}", diag.code), RESET,
            diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
