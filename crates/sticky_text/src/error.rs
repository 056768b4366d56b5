// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::ops::Range;

/// A mutation received a range that does not fit the current text.
///
/// Ranges are never clamped: the caller owns selection tracking, and a bad
/// range here means that tracking is wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range {start}..{end} is inverted")]
    Inverted { start: usize, end: usize },
    #[error("range {start}..{end} is outside text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

impl RangeError {
    /// Check `range` against a text of `len` characters.
    pub(crate) fn check(range: &Range<usize>, len: usize) -> Result<(), Self> {
        if range.start > range.end {
            return Err(RangeError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(RangeError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }
}
