//! The interactive read-eval-print loop.
//!
//! Reads one line at a time, prints the result, and keeps going until
//! `.exit` or end of input. Generic over its streams so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::executor::{self, ExecuteOutcome};
use crate::meta::MetaCommand;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

const PROMPT: &str = "db > ";

enum Response {
    Exit,
    Executed(Vec<Row>),
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    table: Table,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            table: Table::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run until `.exit` or end of input. Only I/O failures are returned;
    /// every other error is reported on the output and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_prompt()?;
            let Some(line) = self.read_input()? else {
                debug!("end of input");
                return Ok(());
            };

            match self.dispatch(&line) {
                Ok(Response::Exit) => return Ok(()),
                Ok(Response::Executed(rows)) => {
                    for row in &rows {
                        writeln!(self.output, "{row}")?;
                    }
                    writeln!(self.output, "Executed.")?;
                }
                Err(err) if err.is_recoverable() => {
                    let input = String::from_utf8_lossy(&line);
                    debug!(%input, error = %err, "statement rejected");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn print_prompt(&mut self) -> Result<()> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next line as raw bytes with surrounding whitespace removed, or `None`
    /// at end of input.
    fn read_input(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        // Also strips the `\r` of `\r\n` line endings.
        Ok(Some(line.trim_ascii().to_vec()))
    }

    fn dispatch(&mut self, line: &[u8]) -> Result<Response> {
        if MetaCommand::is_meta(line) {
            return match MetaCommand::parse(line)? {
                MetaCommand::Exit => Ok(Response::Exit),
            };
        }

        let statement = Statement::prepare(line)?;
        match executor::execute(&statement, &mut self.table)? {
            ExecuteOutcome::Inserted => Ok(Response::Executed(Vec::new())),
            ExecuteOutcome::Selected(rows) => Ok(Response::Executed(rows)),
        }
    }
}
