use crate::app::screen::{Notification, TipScreen, UiEvent};
use crate::core::{CurrencyFormatter, TipPercentage};
use crate::utils::error::{Result, TipError};
use std::io::{BufRead, Write};

const HELP: &str = "\
Type a cost and press Enter to calculate.
  :tip <15|18|20>   select the tip percentage
  :round <on|off>   toggle rounding up
  :calc             press the calculate button
  :show             show the current form
  :help             show this help
  :quit             leave";

/// One line of terminal input, translated for the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        // A bare line is typed into the cost field and submitted with Enter
        return Ok(Command::Events(vec![
            UiEvent::CostEdited(line.to_string()),
            UiEvent::ConfirmKey,
        ]));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::to_ascii_lowercase);

    match (name, arg.as_deref()) {
        ("tip", Some(value)) => {
            let percentage: TipPercentage = value.parse()?;
            Ok(Command::Events(vec![UiEvent::PercentSelected(percentage)]))
        }
        ("round", Some("on" | "true" | "yes")) => {
            Ok(Command::Events(vec![UiEvent::RoundUpToggled(true)]))
        }
        ("round", Some("off" | "false" | "no")) => {
            Ok(Command::Events(vec![UiEvent::RoundUpToggled(false)]))
        }
        ("calc", None) => Ok(Command::Events(vec![UiEvent::CalculatePressed])),
        ("show", None) => Ok(Command::Show),
        ("help", None) | ("h", None) => Ok(Command::Help),
        ("quit", None) | ("q", None) | ("exit", None) => Ok(Command::Quit),
        _ => Err(TipError::InvalidConfigValueError {
            field: "command".to_string(),
            value: line.to_string(),
            reason: "unknown command, type :help".to_string(),
        }),
    }
}

/// Drives the screen from line input until `:quit` or end of input.
pub fn run_session<F, R, W>(screen: &mut TipScreen<F>, input: R, mut output: W) -> Result<()>
where
    F: CurrencyFormatter,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", HELP)?;
    write_form(screen, &mut output)?;

    for line in input.lines() {
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e.user_friendly_message())?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Show => write_form(screen, &mut output)?,
            Command::Events(events) => {
                for event in events {
                    for notification in screen.handle(event) {
                        render(&notification, &mut output)?;
                    }
                }
            }
        }
    }

    tracing::debug!("Session ended");
    Ok(())
}

fn render<W: Write>(notification: &Notification, output: &mut W) -> Result<()> {
    match notification {
        Notification::TipRendered { display, .. } => writeln!(output, "{}", display)?,
        Notification::ValidationFailed { display, .. } => writeln!(output, "{}", display)?,
        Notification::KeyboardDismissed => tracing::debug!("Keyboard dismissed"),
    }
    Ok(())
}

fn write_form<F: CurrencyFormatter, W: Write>(screen: &TipScreen<F>, output: &mut W) -> Result<()> {
    writeln!(
        output,
        "[cost: {:?}] [tip: {}] [round up: {}]",
        screen.cost_text(),
        screen.selection(),
        if screen.round_up() { "on" } else { "off" }
    )?;
    Ok(())
}
