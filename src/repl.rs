//! Interactive form shell.
//!
//! A terminal front-end for the engine: one persistent [`FormState`] edited
//! one field at a time, with colored per-field verdicts and a JSON dump of
//! the snapshot on successful submission.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalog::default_catalog;
use crate::cli::print_error;
use crate::form::FormState;
use crate::validate::Status;

/// Shell state that persists across commands.
pub struct FormShell {
    form: FormState<'static>,
}

enum ShellCommand {
    Continue,
    Quit,
}

impl FormShell {
    pub fn new() -> Self {
        Self {
            form: FormState::new(default_catalog()),
        }
    }

    /// Applies one `set` edit and prints the field's fresh verdict.
    fn set(&mut self, field: &str, raw: &str) {
        match self.form.set_value(field, raw) {
            Ok(()) => {
                // set_value just stored a result for this id.
                if let Ok(result) = self.form.result(field) {
                    print_verdict(field, result.status(), result.message());
                }
            }
            Err(e) => print_error(e),
        }
    }

    fn show(&self) {
        for (value, result) in self.form.fields() {
            let shown = if value.raw().is_empty() {
                "(empty)"
            } else {
                value.raw()
            };
            print_verdict(&format!("{:<10} {}", value.id(), shown), result.status(), "");
        }
        println!(
            "submittable: {}",
            if self.form.is_submittable() { "yes" } else { "no" }
        );
    }

    fn submit(&self) {
        match self.form.submit() {
            Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => {
                    println!("You submitted the following values:");
                    println!("{}", json);
                }
                Err(e) => eprintln!("Error serializing snapshot: {}", e),
            },
            Err(e) => print_error(e),
        }
    }
}

impl Default for FormShell {
    fn default() -> Self {
        Self::new()
    }
}

/// Main shell entry point.
pub fn run_shell() {
    println!("Regra form shell");
    println!("Commands: set <field> <value>, show, submit, fields");
    println!("Type :help for help, :quit to exit, :clear to reset the form");
    println!();

    let mut shell = FormShell::new();

    loop {
        print!("regra> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.starts_with(':') {
                    match handle_shell_command(line, &mut shell) {
                        ShellCommand::Continue => continue,
                        ShellCommand::Quit => break,
                    }
                }
                eval_line(line, &mut shell);
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

fn eval_line(line: &str, shell: &mut FormShell) {
    let mut parts = line.splitn(3, ' ');
    match parts.next() {
        Some("set") => match (parts.next(), parts.next()) {
            // `set <field>` with no value clears the field.
            (Some(field), raw) => shell.set(field, raw.unwrap_or("")),
            _ => println!("usage: set <field> <value>"),
        },
        Some("show") => shell.show(),
        Some("submit") => shell.submit(),
        Some("fields") => {
            for id in shell.form.field_ids() {
                println!("{}", id);
            }
        }
        _ => println!("Unknown command (try :help)"),
    }
}

fn handle_shell_command(line: &str, shell: &mut FormShell) -> ShellCommand {
    match line {
        ":quit" | ":q" | ":exit" => {
            println!("Goodbye!");
            ShellCommand::Quit
        }
        ":clear" => {
            *shell = FormShell::new();
            println!("Form reset.");
            ShellCommand::Continue
        }
        ":help" | ":h" => {
            println!("Commands:");
            println!("  set <field> <value>  edit one field and re-validate it");
            println!("  set <field>          clear one field");
            println!("  show                 list every field with its status");
            println!("  submit               submit the form, printing the snapshot");
            println!("  fields               list the registered field ids");
            println!("  :clear               reset the form to untouched");
            println!("  :quit                exit");
            ShellCommand::Continue
        }
        _ => {
            println!("Unknown command: {} (try :help)", line);
            ShellCommand::Continue
        }
    }
}

/// Prints a label colored by validation status, plus the violation message
/// when there is one.
pub(crate) fn print_verdict(label: &str, status: Status, message: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = match status {
        Status::Valid => Some(Color::Green),
        Status::Invalid => Some(Color::Red),
        Status::Untouched => None,
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(color));
    print!("{}", label);
    let _ = stdout.reset();
    if message.is_empty() {
        println!(" [{}]", status);
    } else {
        println!(" [{}] {}", status, message);
    }
}
