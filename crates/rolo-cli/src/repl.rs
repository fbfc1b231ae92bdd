//! Read-eval-print loop over a [`PersonStore`].

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rolo_core::{clock::ReferenceZone, store::PersonStore};
use rolo_logic::{Command, command::usage, parse_command};

const PROMPT: &str = "> ";
const INVALID_UTF8: &str = "Input is not valid UTF-8; line ignored.";

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
  write!(out, "{PROMPT}")?;
  out.flush()
}

pub struct Repl<S> {
  store: S,
  zone:  ReferenceZone,
}

impl<S: PersonStore> Repl<S> {
  pub fn new(store: S, zone: ReferenceZone) -> Self { Self { store, zone } }

  #[cfg(test)]
  pub fn store(&self) -> &S { &self.store }

  /// Process lines from `input` until `exit` or end of input. A line that is
  /// not valid UTF-8 is reported and skipped.
  pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
    prompt(&mut out)?;
    for bytes in input.split(b'\n') {
      let bytes = bytes.context("reading command")?;
      let line = match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
          tracing::warn!(error = %e, "undecodable input line");
          writeln!(out, "{INVALID_UTF8}")?;
          prompt(&mut out)?;
          continue;
        }
      };
      if !line.trim().is_empty() && !self.handle_line(&line, &mut out)? {
        return Ok(());
      }
      prompt(&mut out)?;
    }
    writeln!(out)?;
    Ok(())
  }

  /// Run one command and print its outcome. Returns `false` once the user
  /// asks to exit.
  pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
    // Read the clock once; everything in this command compares against it.
    let now = self.zone.now();

    let command = match parse_command(line, now) {
      Ok(command) => command,
      Err(e) => {
        tracing::warn!(error = %e, "rejected command");
        writeln!(out, "{e}")?;
        return Ok(true);
      }
    };
    let lists_persons = matches!(command, Command::List | Command::FindMeetings);

    match command.execute(&mut self.store) {
      Ok(result) => {
        writeln!(out, "{}", result.feedback)?;
        if result.show_help {
          writeln!(out, "{}", usage())?;
        }
        if lists_persons {
          self.print_visible(out)?;
        }
        Ok(!result.exit)
      }
      Err(e) => {
        tracing::warn!(error = %e, "command failed");
        writeln!(out, "{e}")?;
        Ok(true)
      }
    }
  }

  fn print_visible<W: Write>(&self, out: &mut W) -> Result<()> {
    for (i, person) in self.store.filtered_persons().into_iter().enumerate() {
      writeln!(out, "{:>3}. {person}", i + 1)?;
    }
    Ok(())
  }
}
