//!
//! Core types for the portfolio walker.
//!
//! This crate aggregates:
//! - `error` — unified error type `PortfolioError` used across the workspace.
//! - `result` — handy `Result<T, PortfolioError>` alias.
//! - `tickers` — the ticker symbols held by a portfolio.
//! - `portfolio` — the fixed `Portfolio` container and its position `Cursor`.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tickers;
pub mod portfolio;

pub use error::PortfolioError;
pub use result::Result;
pub use portfolio::{Cursor, Iter, Portfolio};
pub use tickers::Ticker;
