//! Command-line entry point and argument definitions.
//!
//! This is presentation glue over the engine: every subcommand bottoms out
//! in `catalog`/`validate`/`form` calls, and errors render as miette
//! diagnostics.

use std::process;

use clap::{Parser, Subcommand};

use crate::catalog::default_catalog;
use crate::repl::{print_verdict, run_shell};
use crate::validate::validate_field;
use crate::RegraError;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "regra",
    version,
    about = "A regular-language validation engine for named form fields."
)]
pub struct RegraArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// List every registered field with its optionality and pattern.
    Fields,
    /// Validate a single value against one field's pattern.
    Check {
        /// The field id to validate against (e.g. cpf, q2a).
        #[arg(required = true)]
        field: String,
        /// The candidate value. An omitted value checks the empty string.
        #[arg(default_value = "")]
        value: String,
    },
    /// Fill a form interactively and submit it.
    Form,
}

/// Renders an engine error as a miette diagnostic on stderr.
pub fn print_error(error: RegraError) {
    eprintln!("{:?}", miette::Report::new(error));
}

/// The main entry point for the CLI.
pub fn run() {
    let args = RegraArgs::parse();

    match args.command {
        ArgsCommand::Fields => {
            for spec in default_catalog().iter() {
                let flag = if spec.optional() { "optional" } else { "required" };
                println!("{:<10} {:<9} {}", spec.id(), flag, spec.pattern().source());
            }
        }
        ArgsCommand::Check { field, value } => {
            match validate_field(default_catalog(), &field, &value) {
                Ok(result) => {
                    print_verdict(&field, result.status(), result.message());
                    if result.status().is_invalid() {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    print_error(e);
                    process::exit(2);
                }
            }
        }
        ArgsCommand::Form => run_shell(),
    }
}
