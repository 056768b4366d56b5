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

use crate::ffi_segment::to_u32;

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RangeError {
    #[error("range {start}..{end} is inverted")]
    Inverted { start: u32, end: u32 },
    #[error("range {start}..{end} is outside text of length {len}")]
    OutOfBounds { start: u32, end: u32, len: u32 },
}

impl From<sticky_text::RangeError> for RangeError {
    fn from(inner: sticky_text::RangeError) -> Self {
        match inner {
            sticky_text::RangeError::Inverted { start, end } => Self::Inverted {
                start: to_u32(start),
                end: to_u32(end),
            },
            sticky_text::RangeError::OutOfBounds { start, end, len } => {
                Self::OutOfBounds {
                    start: to_u32(start),
                    end: to_u32(end),
                    len: to_u32(len),
                }
            }
        }
    }
}
