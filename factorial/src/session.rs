use crate::collector::{Collector, StopReason};
use crate::config::Config;
use crate::error::SessionError;
use crate::evaluator::{Entry, Evaluator};
use crate::reader::TokenReader;
use std::io::{BufRead, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Start,
    Collecting,
    Evaluating,
    End,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub entries: Vec<Entry>,
    pub stop: StopReason,
}

/// One pass of collect then evaluate. Consumed by `run`, so a session
/// never returns to collecting once evaluation has begun.
pub struct Session<R, W> {
    config: Config,
    reader: TokenReader<R>,
    output: W,
    phase: Phase,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            config,
            reader: TokenReader::new(input, config.max_token_len),
            output,
            phase: Phase::Start,
        })
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("Session {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    pub fn run(mut self) -> Result<Report, SessionError> {
        self.enter(Phase::Collecting);
        let collector = Collector::new(&mut self.reader, self.config.capacity);
        let (numbers, stop) = collector.collect(&mut self.output)?;

        self.enter(Phase::Evaluating);
        let evaluator = Evaluator::new(self.config.overflow);
        let entries = evaluator.evaluate(numbers.as_slice(), &mut self.output)?;

        self.enter(Phase::End);
        log::info!("Reported {} factorials", entries.len());
        Ok(Report { entries, stop })
    }
}

#[cfg(test)]
mod test_session {
    use super::*;
    use crate::config::OverflowPolicy;
    use crate::error::ConfigError;
    use std::io::Cursor;

    #[test]
    fn starts_in_start_phase() {
        let session =
            Session::new(Config::default(), Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(session.phase(), Phase::Start);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = Config::new().with_capacity(0);
        let result = Session::new(config, Cursor::new(""), Vec::new());
        assert!(matches!(
            result,
            Err(SessionError::Config(ConfigError::ZeroCapacity))
        ));
    }

    #[test]
    fn overflow_policy_reaches_output() {
        let mut output = Vec::new();
        let config = Config::new().with_overflow(OverflowPolicy::Wrap);
        let report = Session::new(config, Cursor::new("13 q"), &mut output)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.stop, StopReason::Sentinel);
        assert!(!report.entries[0].outcome.unwrap().is_exact());
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("13! = 1932053504\n"));
    }
}
