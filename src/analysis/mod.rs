// SPDX-License-Identifier: GPL-3.0-or-later
mod luminosity;
mod runs;

pub(crate) use luminosity::LuminosityMap;

use std::error::Error as StdError;
use std::fmt;

/// The caller handed over a buffer whose length doesn't match its claimed
/// dimensions. Scanning such a buffer would read the wrong row (or past the
/// end), so it's rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SizeMismatch {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) actual: usize,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a {}x{} luminosity map requires {} bytes, but {} were provided",
            self.width,
            self.height,
            self.width as usize * self.height as usize,
            self.actual
        )
    }
}

impl StdError for SizeMismatch {}
