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

/// Offsets past `u32::MAX` saturate; no note gets that long.
pub(crate) fn to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct TextRange {
    pub start: u32,
    pub end: u32,
}

impl From<Range<usize>> for TextRange {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: to_u32(range.start),
            end: to_u32(range.end),
        }
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tags: Vec<String>,
}

impl From<sticky_text::Segment> for Segment {
    fn from(inner: sticky_text::Segment) -> Self {
        Self {
            text: inner.text,
            tags: inner.tags,
        }
    }
}

impl From<Segment> for sticky_text::Segment {
    fn from(segment: Segment) -> Self {
        Self::new(segment.text, segment.tags)
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub style: crate::Style,
    pub start: u32,
    pub end: u32,
}

impl From<&sticky_text::StyleRun> for StyleRun {
    fn from(inner: &sticky_text::StyleRun) -> Self {
        Self {
            style: inner.style().into(),
            start: to_u32(inner.start()),
            end: to_u32(inner.end()),
        }
    }
}
