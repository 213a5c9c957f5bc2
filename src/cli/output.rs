use crate::cli::Action;
use crate::config::OutputMode;
use crate::control::Outcome;
use crate::error::AppError;

pub fn print_outcome(outcome: &Outcome, mode: OutputMode) {
    match mode {
        OutputMode::Text => println!("{}", render_line(outcome)),
        OutputMode::Json => print_json(&serde_json::to_value(outcome).unwrap_or_default()),
    }
}

pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_error(err: &AppError, mode: OutputMode) {
    match mode {
        OutputMode::Text => eprintln!("{}", err),
        OutputMode::Json => eprintln!(
            "{}",
            serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
        ),
    }
}

/// One-line summary matching the wording scripts already scrape.
pub fn render_line(outcome: &Outcome) -> String {
    match outcome.action {
        Action::On | Action::Off => format!(
            "{} turned {} successfully",
            outcome.device,
            outcome.power.label()
        ),
        Action::Status => format!(
            "{} is currently {}",
            outcome.device,
            outcome.power.label()
        ),
    }
}
