// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for the math kernel.

use thiserror::Error;

/// Errors raised by checked kernel operations.
///
/// Singular matrix inversion and parallel-line intersection are deliberately
/// absent: they report through the [`crate::Mat4::ZERO`] sentinel and `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component index fell outside the type's axis count.
    #[error("index {index} out of range for {kind}: valid indices are 0..{len}")]
    IndexOutOfRange {
        /// Name of the value type being indexed.
        kind: &'static str,
        /// The rejected index.
        index: usize,
        /// Number of addressable components.
        len: usize,
    },
    /// A matrix cell was addressed outside `0..=3` on either axis.
    #[error("matrix cell ({row}, {column}) out of range: rows and columns run from 0 to 3")]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// The input was NaN, which has no sign.
    #[error("value is NaN")]
    NotANumber,
    /// A reduction was asked for the extremum of an empty slice.
    #[error("empty input")]
    EmptyInput,
}

impl MathError {
    pub(crate) const fn index(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }
}
