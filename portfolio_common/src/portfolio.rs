//! The fixed portfolio container and its position cursor.
//!
//! A `Portfolio` owns an ordered, read-only list of `Ticker` constituents. Traversal follows
//! the begin/end protocol:
//!
//! - `Portfolio::begin()` — cursor at the first constituent.
//! - `Portfolio::end()` — cursor one past the last constituent (the terminal position).
//! - `Cursor::advance()` — step forward by one.
//! - `Cursor::differs_from()` — compare positions against another cursor.
//! - `Cursor::value()` — copy out the constituent under the cursor.
//!
//! `Iter` wraps a begin/end pair so the container works with `for` loops and iterator
//! adapters.
//!
//! Design notes:
//! - A cursor borrows its portfolio, so the borrow checker guarantees it never outlives it.
//! - Cursors compare by position only. Comparing cursors of two different portfolios
//!   is meaningless.
//! - `value()` and `advance()` at the terminal position are out of contract. `value()`
//!   panics there on the slice bounds check; `advance()` moves the cursor past the end.

use std::iter::FusedIterator;

use log::trace;

use crate::tickers::Ticker;

/// Constituents every portfolio is built with, in traversal order.
pub const CONSTITUENTS: [Ticker; 4] = [Ticker::FDS, Ticker::GOOG, Ticker::AAPL, Ticker::NFLX];

/// Ordered, immutable set of holdings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    constituents: Vec<Ticker>,
}

impl Portfolio {
    /// Create a portfolio holding `FDS`, `GOOG`, `AAPL`, `NFLX`.
    pub fn new() -> Self {
        Self {
            constituents: CONSTITUENTS.to_vec(),
        }
    }

    /// Number of constituents.
    pub fn len(&self) -> usize {
        self.constituents.len()
    }

    /// Always `false`: the holdings are fixed at construction.
    pub fn is_empty(&self) -> bool {
        self.constituents.is_empty()
    }

    /// Cursor at the first constituent.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self, 0)
    }

    /// Cursor at the terminal position, one past the last constituent.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self, self.len())
    }

    /// Iterate the constituents in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.begin(),
            end: self.end(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = Ticker;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Position within a `Portfolio`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// Portfolio this cursor walks over.
    portfolio: &'a Portfolio,
    /// Zero-based index; equals `portfolio.len()` at the terminal position.
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(portfolio: &'a Portfolio, position: usize) -> Self {
        Self {
            portfolio,
            position,
        }
    }

    /// Prefix increment. Must not be called at the terminal position.
    pub fn advance(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// `true` iff the two cursors sit at different positions.
    pub fn differs_from(&self, other: &Cursor<'_>) -> bool {
        self.position != other.position
    }

    /// Copy of the constituent under the cursor.
    ///
    /// # Panics
    ///
    /// Panics when called at the terminal position.
    pub fn value(&self) -> Ticker {
        self.portfolio.constituents[self.position]
    }

    /// Current zero-based position.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        !self.differs_from(other)
    }
}

impl Eq for Cursor<'_> {}

/// Iterator over a portfolio, driven by a begin/end cursor pair.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    current: Cursor<'a>,
    end: Cursor<'a>,
}

impl Iterator for Iter<'_> {
    type Item = Ticker;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.current.differs_from(&self.end) {
            return None;
        }
        let ticker = self.current.value();
        trace!("cursor {} -> {}", self.current.position(), ticker);
        self.current.advance();
        Some(ticker)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.position() - self.current.position();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
