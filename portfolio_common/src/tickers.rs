//! Ticker symbols held by a portfolio.

use strum_macros::{Display, IntoStaticStr};

/// Set of supported ticker symbols.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
pub enum Ticker {
    FDS,
    GOOG,
    AAPL,
    NFLX,
}

impl Ticker {
    /// Upper-case symbol text, e.g. `"GOOG"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
