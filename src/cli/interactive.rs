//! Prompt loop for `ephemgen interactive`.

use std::io::{BufRead, Write};

use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::render;
use crate::session::{Command, Outcome, Session};

const BANNER: &str = r"
  ___      _
 | __|_ __| |_  ___ _ __  __ _ ___ _ _
 | _|| '_ \ ' \/ -_) '  \/ _` / -_) ' \
 |___| .__/_||_\___|_|_|_\__, \___|_||_|
     |_|                 |___/            ";

const RULE: &str = "==================================================";

/// Runs `session` against line-oriented input until it finishes or input
/// runs out.
pub fn drive<E, R, W>(session: &mut Session<E>, mut input: R, out: &mut W) -> Result<()>
where
    E: Ephemeris,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Ephemeris tables for the Sun, Moon, and planets")?;
    writeln!(out, "{RULE}")?;

    while !session.is_finished() {
        let prompt = session.prompt().unwrap_or_default();
        let was_idle = session.is_idle();
        if was_idle {
            writeln!(out)?;
        }

        let Some(line) = ask(&mut input, out, prompt)? else {
            session.handle(Command::Quit)?;
            break;
        };

        let command = match session.command_for(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match session.handle(command) {
            Ok(Outcome::Reported(report)) => render::write_table(report, out)?,
            Ok(Outcome::Exported { format, path }) => {
                writeln!(out, "{format} export complete: {}", path.display())?;
            }
            Ok(Outcome::AwaitingInput | Outcome::Skipped | Outcome::Finished) => {}
            Err(e) if e.is_recoverable() => writeln!(out, "{e}")?,
            Err(e) => return Err(e),
        }

        if !was_idle && session.is_idle() && !another(&mut input, out)? {
            session.handle(Command::Quit)?;
        }
    }

    writeln!(out, "Goodbye! Clear skies!")?;
    Ok(())
}

/// Prints `prompt` and reads one line. `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn another<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    writeln!(out)?;
    let answer = ask(input, out, "Do you want to perform another consultation? (y/n): ")?;
    Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}
