//! Portfolio walker — prints the constituents of a fixed portfolio, one ticker per line.
//!
//! The portfolio is traversed with its own begin/end cursors through a plain `for` loop.
//! Command-line arguments are accepted and ignored.
//!
//! Usage example (CLI):
//! ```bash
//! portfolio
//! RUST_LOG=trace portfolio
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::debug;
use portfolio_common::Portfolio;
use portfolio_common::PortfolioError;
use portfolio_common::Result;
use std::io::{self, ErrorKind, Write};

/// Writes every constituent of `portfolio` to `out`, each followed by a line break.
///
/// A reader that goes away early (`BrokenPipe`) ends the output normally.
fn print_constituents<W: Write>(portfolio: &Portfolio, out: &mut W) -> Result<()> {
    match write_constituents(portfolio, out) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed early: {}", e);
            Ok(())
        }
        result => result.map_err(PortfolioError::from),
    }
}

fn write_constituents<W: Write>(portfolio: &Portfolio, out: &mut W) -> io::Result<()> {
    for symbol in portfolio {
        writeln!(out, "{}", symbol)?;
    }
    out.flush()
}

fn main() -> Result<(), PortfolioError> {
    init_logger();
    match Args::try_parse() {
        Ok(args) if !args.ignored.is_empty() => {
            debug!("Ignoring arguments: {:?}", args.ignored);
        }
        Ok(_) => {}
        Err(e) => debug!("Ignoring unparsable arguments: {}", e),
    }

    let portfolio = Portfolio::new();
    debug!("Portfolio holds {} constituents", portfolio.len());

    let stdout = io::stdout();
    print_constituents(&portfolio, &mut stdout.lock())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that fails every write with the given error kind.
    struct FailingWriter(ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_one_symbol_per_line() {
        let mut out = Vec::new();
        print_constituents(&Portfolio::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "FDS\nGOOG\nAAPL\nNFLX\n");
    }

    #[test]
    fn closed_pipe_ends_output_quietly() {
        let mut out = FailingWriter(ErrorKind::BrokenPipe);
        assert!(print_constituents(&Portfolio::new(), &mut out).is_ok());
    }

    #[test]
    fn other_write_failure_surfaces_as_io_error() {
        let mut out = FailingWriter(ErrorKind::PermissionDenied);
        let err = print_constituents(&Portfolio::new(), &mut out).unwrap_err();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
