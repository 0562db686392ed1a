use crate::config::OverflowPolicy;
use crate::error::EvalError;
use std::fmt;
use std::io::{self, Write};

/// From 34 on, `n!` carries a factor of 2^32 and wraps to exactly 0.
const WRAPS_TO_ZERO: i32 = 34;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Factorial {
    Exact(i32),
    /// Did not fit in an `i32`. `wrapped` is the two's complement result
    /// native `int` arithmetic would have produced.
    Overflowed { wrapped: i32 },
}

impl Factorial {
    pub const fn value(&self) -> i32 {
        match self {
            Factorial::Exact(value) => *value,
            Factorial::Overflowed { wrapped } => *wrapped,
        }
    }

    pub const fn is_exact(&self) -> bool {
        matches!(self, Factorial::Exact(_))
    }
}

pub fn factorial(n: i32) -> Result<Factorial, EvalError> {
    if n < 0 {
        return Err(EvalError::NegativeInput(n));
    }
    let (value, overflowed) = wrapping_factorial(n);
    if overflowed {
        Ok(Factorial::Overflowed { wrapped: value })
    } else {
        Ok(Factorial::Exact(value))
    }
}

fn wrapping_factorial(n: i32) -> (i32, bool) {
    match n {
        0 | 1 => (1, false),
        n if n >= WRAPS_TO_ZERO => (0, true),
        n => {
            let (rest, rest_overflowed) = wrapping_factorial(n - 1);
            let (value, overflowed) = n.overflowing_mul(rest);
            (value, overflowed || rest_overflowed)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entry {
    pub input: i32,
    pub outcome: Result<Factorial, EvalError>,
}

impl Entry {
    pub fn new(input: i32) -> Self {
        Self {
            input,
            outcome: factorial(input),
        }
    }

    pub const fn display(&self, policy: OverflowPolicy) -> DisplayEntry<'_> {
        DisplayEntry {
            entry: self,
            policy,
        }
    }
}

/// A result line, without the trailing newline.
pub struct DisplayEntry<'a> {
    entry: &'a Entry,
    policy: OverflowPolicy,
}

impl fmt::Display for DisplayEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let input = self.entry.input;
        match (self.entry.outcome, self.policy) {
            (Ok(Factorial::Exact(value)), _) => write!(f, "{input}! = {value}"),
            (Ok(Factorial::Overflowed { wrapped }), OverflowPolicy::Wrap) => {
                write!(f, "{input}! = {wrapped}")
            }
            (Ok(Factorial::Overflowed { wrapped }), OverflowPolicy::Report) => {
                write!(f, "{input}! = {wrapped} (overflow)")
            }
            (Err(EvalError::NegativeInput(_)), _) => {
                write!(f, "{input}! = undefined (negative input)")
            }
        }
    }
}

pub struct Evaluator {
    policy: OverflowPolicy,
}

impl Evaluator {
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Writes the header, then one line per number in order.
    pub fn evaluate<W: Write>(
        &self,
        numbers: &[i32],
        output: &mut W,
    ) -> io::Result<Vec<Entry>> {
        writeln!(output)?;
        writeln!(output, "Factorials of the entered numbers:")?;
        let mut entries = Vec::with_capacity(numbers.len());
        for &number in numbers {
            let entry = Entry::new(number);
            match entry.outcome {
                Ok(Factorial::Overflowed { wrapped }) => {
                    log::warn!("{number}! overflows i32, wrapped to {wrapped}")
                }
                Err(err) => log::warn!("{err}"),
                Ok(Factorial::Exact(_)) => {}
            }
            writeln!(output, "{}", entry.display(self.policy))?;
            entries.push(entry);
        }
        output.flush()?;
        Ok(entries)
    }
}
