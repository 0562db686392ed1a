use crate::coerce::coerce;
use crate::reader::TokenReader;
use std::io::{self, BufRead, Write};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StopReason {
    Sentinel,
    CapacityReached,
    EndOfInput,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StopReason::Sentinel => write!(f, "quit sentinel"),
            StopReason::CapacityReached => write!(f, "capacity reached"),
            StopReason::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Ordered numbers in entry order. Never holds more than `capacity`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Numbers {
    items: Vec<i32>,
    capacity: usize,
}

impl Numbers {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Returns false and leaves the buffer untouched when it is full.
    pub fn push(&mut self, number: i32) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(number);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }
}

pub struct Collector<'r, R> {
    reader: &'r mut TokenReader<R>,
    numbers: Numbers,
}

impl<'r, R: BufRead> Collector<'r, R> {
    pub fn new(reader: &'r mut TokenReader<R>, capacity: usize) -> Self {
        Self {
            reader,
            numbers: Numbers::new(capacity),
        }
    }

    /// Prompts for and reads numbers until the sentinel, the capacity or
    /// the end of input, whichever comes first.
    pub fn collect<W: Write>(
        mut self,
        output: &mut W,
    ) -> io::Result<(Numbers, StopReason)> {
        writeln!(
            output,
            "Enter up to {} numbers (enter 'q' to quit):",
            self.numbers.capacity()
        )?;

        let stop = loop {
            if self.numbers.is_full() {
                break StopReason::CapacityReached;
            }
            write!(output, "Number {}: ", self.numbers.len() + 1)?;
            output.flush()?;

            let Some(token) = self.reader.next_token()? else {
                break StopReason::EndOfInput;
            };
            if token.is_quit() {
                log::debug!("Sentinel {token}");
                break StopReason::Sentinel;
            }
            let number = coerce(&token.lexeme);
            log::debug!("Accepted {token} as {number}");
            let pushed = self.numbers.push(number);
            debug_assert!(pushed, "pushed past capacity");
        };

        log::info!(
            "Collected {} numbers, stopped on {stop}",
            self.numbers.len()
        );
        Ok((self.numbers, stop))
    }
}

#[cfg(test)]
mod test_collector {
    use super::*;
    use std::io::Cursor;

    fn test_runner(src: &str, capacity: usize) -> (Vec<i32>, StopReason, String) {
        let mut reader = TokenReader::new(Cursor::new(src), 9);
        let mut output = Vec::new();
        let (numbers, stop) = Collector::new(&mut reader, capacity)
            .collect(&mut output)
            .unwrap();
        (
            numbers.as_slice().to_vec(),
            stop,
            String::from_utf8(output).unwrap(),
        )
    }

    #[test]
    fn numbers_buffer_is_capped() {
        let mut numbers = Numbers::new(2);
        assert!(numbers.push(1));
        assert!(numbers.push(2));
        assert!(!numbers.push(3));
        assert_eq!(numbers.as_slice(), &[1, 2]);
        assert!(numbers.is_full());
    }

    #[test]
    fn stops_on_sentinel() {
        let (numbers, stop, output) = test_runner("3\n5\nq\n7\n", 100);
        assert_eq!(numbers, vec![3, 5]);
        assert_eq!(stop, StopReason::Sentinel);
        assert_eq!(
            output,
            "Enter up to 100 numbers (enter 'q' to quit):\nNumber 1: Number 2: Number 3: "
        );
    }

    #[test]
    fn coerces_malformed_tokens() {
        let (numbers, _, _) = test_runner("abc 12x -3 Q", 100);
        assert_eq!(numbers, vec![0, 12, -3]);
    }

    #[test]
    fn stops_at_capacity_without_extra_prompt() {
        let (numbers, stop, output) = test_runner("1 2 3 4", 3);
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(stop, StopReason::CapacityReached);
        assert!(output.contains("Number 3: "));
        assert!(!output.contains("Number 4: "));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (numbers, stop, _) = test_runner("8 9", 100);
        assert_eq!(numbers, vec![8, 9]);
        assert_eq!(stop, StopReason::EndOfInput);
    }
}
