//! Console surface of the host binary
//!
//! One command per line:
//!
//! ```text
//! on <name> [color <r>,<g>,<b> | brightness <0-255>]
//! off <name>
//! status [<name>]
//! quit
//! ```
//!
//! Names may contain spaces; a trailing `color`/`brightness` pair is split
//! off before the rest of the line is taken as the name.

use crate::application::platform::Light;
use crate::domain::models::{Rgb, TurnOnOptions};
use crate::presentation::host::HostCommand;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing device name")]
    MissingName,
    #[error("invalid color '{0}', expected r,g,b with values 0-255")]
    InvalidColor(String),
    #[error("invalid brightness '{0}', expected 0-255")]
    InvalidBrightness(String),
}

pub fn parse_command(line: &str) -> Result<HostCommand, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (verb, args) = tokens.split_first().ok_or(ParseError::Empty)?;

    match verb.to_lowercase().as_str() {
        "on" => {
            let (name_tokens, options) = split_options(args)?;
            Ok(HostCommand::TurnOn {
                name: join_name(name_tokens)?,
                options,
            })
        }
        "off" => Ok(HostCommand::TurnOff {
            name: join_name(args)?,
        }),
        "status" => Ok(HostCommand::Status {
            name: (!args.is_empty()).then(|| args.join(" ")),
        }),
        "quit" | "exit" => Ok(HostCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn split_options<'a, 'b>(
    args: &'a [&'b str],
) -> Result<(&'a [&'b str], TurnOnOptions), ParseError> {
    if args.len() >= 3 {
        let (name, tail) = args.split_at(args.len() - 2);
        match tail[0].to_lowercase().as_str() {
            "color" => return Ok((name, TurnOnOptions::color(parse_rgb(tail[1])?))),
            "brightness" => {
                let level = tail[1]
                    .parse::<u8>()
                    .map_err(|_| ParseError::InvalidBrightness(tail[1].to_string()))?;
                return Ok((name, TurnOnOptions::brightness(level)));
            }
            _ => {}
        }
    }
    Ok((args, TurnOnOptions::default()))
}

fn parse_rgb(value: &str) -> Result<Rgb, ParseError> {
    let invalid = || ParseError::InvalidColor(value.to_string());
    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<u8>, ParseError>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(invalid()),
    }
}

fn join_name(tokens: &[&str]) -> Result<String, ParseError> {
    if tokens.is_empty() {
        Err(ParseError::MissingName)
    } else {
        Ok(tokens.join(" "))
    }
}

/// One status line for a device
pub fn render_status(light: &dyn Light) -> String {
    let power = if light.is_on() { "on" } else { "off" };
    let availability = if light.is_available() {
        ""
    } else {
        " (unavailable)"
    };
    match light.brightness() {
        Some(level) => format!(
            "{}: {}, color {}, brightness {}{}",
            light.name(),
            power,
            light.rgb_color(),
            level,
            availability
        ),
        None => format!(
            "{}: {}, color {}{}",
            light.name(),
            power,
            light.rgb_color(),
            availability
        ),
    }
}

/// Read commands from stdin until EOF, forwarding them to the host.
/// End of input is forwarded as [`HostCommand::Quit`].
pub async fn read_commands(commands: mpsc::UnboundedSender<HostCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                debug!(?command, "console command");
                let quit = command == HostCommand::Quit;
                if commands.send(command).is_err() || quit {
                    return;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    let _ = commands.send(HostCommand::Quit);
}
