//! Line-oriented front end: each input line is either a command or a key.

use log::info;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::presentation::{render_keys, render_results, trigger_label};
use crate::session::{Session, SessionError};
use crate::traits::KeyProbe;

pub const HELP: &str = "\
Enter a key to add it. Commands:
  :check   validate every key
  :list    show the keys
  :clear   remove all keys
  :help    show this message
  :quit    exit
A line that is exactly one of these commands is never added as a key.";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check,
    List,
    Clear,
    Help,
    Quit,
    Submit(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":check" => Command::Check,
            ":list" => Command::List,
            ":clear" => Command::Clear,
            ":help" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Submit(line.to_string()),
        }
    }
}

/// Read commands until `:quit` or end of input.
///
/// `:check` runs the batch inline, so every started batch has printed its
/// results before this returns.
pub async fn run_console<P, R, W>(session: &Session<P>, input: R, out: &mut W) -> io::Result<()>
where
    P: KeyProbe,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::List => write!(out, "{}", render_keys(&session.keys().await))?,
            Command::Clear => {
                session.clear_keys().await;
                writeln!(out, "Cleared all keys")?;
            }
            Command::Check => {
                if !session.can_check().await {
                    writeln!(
                        out,
                        "{} is unavailable: {}",
                        trigger_label(false),
                        refusal(session)
                    )?;
                    continue;
                }
                writeln!(out, "{}", trigger_label(true))?;
                out.flush()?;
                match session.check_keys().await {
                    Ok(results) => write!(out, "{}", render_results(&results))?,
                    Err(e) => writeln!(out, "{} is unavailable: {}", trigger_label(false), e)?,
                }
            }
            Command::Submit(text) => {
                session.set_input(text).await;
                if session.submit_input().await {
                    writeln!(out, "Added key ({} total)", session.keys().await.len())?;
                } else {
                    writeln!(out, "Ignored empty or duplicate key")?;
                }
            }
        }
        out.flush()?;
    }

    info!("Console closed");
    Ok(())
}

/// Run a single batch and print its results
pub async fn check_once<P, W>(session: &Session<P>, out: &mut W) -> Result<(), Box<dyn std::error::Error>>
where
    P: KeyProbe,
    W: Write,
{
    let results = session.check_keys().await?;
    write!(out, "{}", render_results(&results))?;
    out.flush()?;
    Ok(())
}

fn refusal<P: KeyProbe>(session: &Session<P>) -> SessionError {
    if session.is_busy() {
        SessionError::Busy
    } else {
        SessionError::NoKeys
    }
}
