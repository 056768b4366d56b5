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

//! Style values, style kinds and the runs that attach them to text.

use std::ops::Range;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Paragraph alignment. The string forms are the GTK justification names
/// used in tag names, so `Justify` is spelled `fill`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[strum(to_string = "fill", serialize = "justify")]
    Justify,
}

/// A style with its value.
///
/// | Style             | Kind              | Value                |
/// |-------------------|-------------------|----------------------|
/// | `Bold`            | toggle            | -                    |
/// | `Italic`          | toggle            | -                    |
/// | `Underline`       | toggle            | -                    |
/// | `Strikethrough`   | toggle            | -                    |
/// | `ForegroundColor` | value             | color string         |
/// | `FontSize`        | value             | points, `> 0`        |
/// | `Alignment`       | value             | [`Alignment`]        |
/// | `Opaque`          | value (per name)  | unknown tag name     |
///
/// The derived ordering is the order tags appear in a segment and the
/// order preview tags are opened.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ForegroundColor(String),
    FontSize(u32),
    Alignment(Alignment),
    /// A tag name this version does not understand, kept verbatim so it
    /// survives a load/save cycle.
    Opaque(String),
}

impl Style {
    pub fn kind(&self) -> StyleKind {
        match self {
            Style::Bold => StyleKind::Bold,
            Style::Italic => StyleKind::Italic,
            Style::Underline => StyleKind::Underline,
            Style::Strikethrough => StyleKind::Strikethrough,
            Style::ForegroundColor(_) => StyleKind::ForegroundColor,
            Style::FontSize(_) => StyleKind::FontSize,
            Style::Alignment(_) => StyleKind::Alignment,
            Style::Opaque(name) => StyleKind::Opaque(name.clone()),
        }
    }

    /// Toggle styles carry no value: presence means active.
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            Style::Bold | Style::Italic | Style::Underline | Style::Strikethrough
        )
    }
}

/// The kind of a [`Style`], ignoring its value. At most one style of each
/// kind is active at any character offset.
///
/// Every distinct opaque tag name is a kind of its own.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ForegroundColor,
    FontSize,
    Alignment,
    Opaque(String),
}

impl StyleKind {
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            StyleKind::Bold
                | StyleKind::Italic
                | StyleKind::Underline
                | StyleKind::Strikethrough
        )
    }
}

/// A style applied to the half-open character range `start..end`.
///
/// Runs are only created by [`crate::StyledTextModel`]; a run is never
/// empty and never overlaps another run of the same kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleRun {
    pub(crate) style: Style,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl StyleRun {
    pub(crate) fn new(style: Style, range: Range<usize>) -> Self {
        Self {
            style,
            start: range.start,
            end: range.end,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the character at `offset` carries this run's style.
    pub fn covers(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub(crate) fn intersects(&self, range: &Range<usize>) -> bool {
        self.start < range.end && range.start < self.end
    }
}

/// How much of a range a style covers, for toolbar button state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleState {
    Inactive,
    Mixed,
    Active,
}

/// Literal line prefixes recognised as list markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ListMarker {
    Bullet,
    Dash,
    Arabic,
    Roman,
    Alpha,
    Unchecked,
    Checked,
}

impl ListMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMarker::Bullet => "• ",
            ListMarker::Dash => "- ",
            ListMarker::Arabic => "1. ",
            ListMarker::Roman => "I. ",
            ListMarker::Alpha => "a. ",
            ListMarker::Unchecked => "☐ ",
            ListMarker::Checked => "✔ ",
        }
    }

    /// The marker to start the next line with after pressing enter on a
    /// line beginning with this marker. Numbered markers do not continue.
    pub fn continuation(&self) -> Option<ListMarker> {
        match self {
            ListMarker::Bullet => Some(ListMarker::Bullet),
            ListMarker::Dash => Some(ListMarker::Dash),
            ListMarker::Unchecked | ListMarker::Checked => {
                Some(ListMarker::Unchecked)
            }
            ListMarker::Arabic | ListMarker::Roman | ListMarker::Alpha => None,
        }
    }

    /// The marker a line starts with, ignoring leading whitespace.
    pub fn detect(line: &str) -> Option<ListMarker> {
        let trimmed = line.trim_start();
        ListMarker::iter().find(|marker| trimmed.starts_with(marker.as_str()))
    }
}
