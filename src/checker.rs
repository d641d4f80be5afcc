//! Replay engine: apply an externally supplied instruction stream to the
//! original input and judge the result.

use std::fmt;
use std::io::BufRead;

use log::{debug, warn};

use crate::push_swap_error::PushSwapError;
use crate::stacks::op::Instruction;
use crate::stacks::pair::StackPair;

/// Outcome of a complete replay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A holds every value in ascending order and B is empty.
    Ok,
    /// Anything else.
    Ko,
}

impl Verdict {
    pub fn is_ok(self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Ok => "OK",
            Verdict::Ko => "KO",
        })
    }
}

/// Reads one instruction per line from a buffered source.
///
/// The reader owns its line buffer for the length of one session. Every line
/// must end in `\n`; a `\r` before it or an unterminated last line is
/// malformed.
pub struct InstructionReader<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> InstructionReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, buf: String::new(), line: 0 }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next instruction; `Ok(None)` at end of input.
    pub fn next_instruction(&mut self) -> Result<Option<Instruction>, PushSwapError> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let terminated = self.buf.strip_suffix('\n');
        if let Some(Ok(instruction)) = terminated.map(str::parse::<Instruction>) {
            return Ok(Some(instruction));
        }
        let token = terminated.unwrap_or(&self.buf);
        warn!("malformed instruction on line {}: {token:?}", self.line);
        Err(PushSwapError::MalformedInstruction { line: self.line, token: token.to_string() })
    }
}

impl<R: BufRead> Iterator for InstructionReader<R> {
    type Item = Result<Instruction, PushSwapError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_instruction().transpose()
    }
}

/// Apply `instructions` to `values` and report whether they sort it.
///
/// Stops at the first error; no verdict is produced in that case.
pub fn replay<I>(values: &[i32], instructions: I) -> Result<Verdict, PushSwapError>
where
    I: IntoIterator<Item = Result<Instruction, PushSwapError>>,
{
    let mut stacks = StackPair::from_values(values);
    let mut applied = 0usize;
    for instruction in instructions {
        stacks.execute(instruction?);
        applied += 1;
    }
    let verdict = if stacks.is_sorted() { Verdict::Ok } else { Verdict::Ko };
    debug!("replayed {applied} instructions on {} values: {verdict}", values.len());
    Ok(verdict)
}

/// Replay instructions read line by line from `source`.
pub fn check<R: BufRead>(values: &[i32], source: R) -> Result<Verdict, PushSwapError> {
    replay(values, InstructionReader::new(source))
}
