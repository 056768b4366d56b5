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

//! Range formatting and pending styles.
//!
//! Toggle styles (bold, italic, underline, strikethrough) flip: a range
//! already fully covered loses the style, anything else gains it. Value
//! styles (color, size, alignment, opaque tags) replace whatever value of
//! their kind covered the range.

use std::collections::BTreeMap;
use std::ops::Range;

use super::StyledTextModel;
use crate::error::RangeError;
use crate::style::{Alignment, Style, StyleKind};
use crate::tag_codec::canonical_style;

impl StyledTextModel {
    /// Apply `style` to `range`.
    ///
    /// A collapsed range changes nothing; use
    /// [`toggle_pending_style`](Self::toggle_pending_style) for the cursor.
    /// Clears pending styles.
    ///
    /// The style is stored the way it reads back from storage: palette color
    /// names become hex, a zero size or empty color becomes an opaque tag,
    /// and an opaque name spelling a known tag becomes that style.
    pub fn apply_style(
        &mut self,
        style: Style,
        range: Range<usize>,
    ) -> Result<(), RangeError> {
        self.check_range(&range)?;
        self.pending_styles.clear();
        if range.is_empty() {
            return Ok(());
        }
        let style = canonical_style(style);

        if style.is_toggle() && self.coverage(&style, &range) == range.len() {
            self.clip_kind(&style.kind(), &range);
        } else {
            self.put_style(style, range);
        }

        self.assert_invariants();
        Ok(())
    }

    /// Remove every style of `kind` from `range`, trimming runs that cross
    /// its edges.
    pub fn remove_style(
        &mut self,
        kind: &StyleKind,
        range: Range<usize>,
    ) -> Result<(), RangeError> {
        self.check_range(&range)?;
        self.pending_styles.clear();
        self.clip_kind(kind, &range);
        self.assert_invariants();
        Ok(())
    }

    /// Toggle bold.
    pub fn bold(&mut self, range: Range<usize>) -> Result<(), RangeError> {
        self.apply_style(Style::Bold, range)
    }

    /// Toggle italic.
    pub fn italic(&mut self, range: Range<usize>) -> Result<(), RangeError> {
        self.apply_style(Style::Italic, range)
    }

    /// Toggle underline.
    pub fn underline(&mut self, range: Range<usize>) -> Result<(), RangeError> {
        self.apply_style(Style::Underline, range)
    }

    /// Toggle strikethrough.
    pub fn strikethrough(
        &mut self,
        range: Range<usize>,
    ) -> Result<(), RangeError> {
        self.apply_style(Style::Strikethrough, range)
    }

    /// Align every line touched by `range`. A collapsed range aligns the
    /// line holding the cursor. Returns the aligned line range.
    pub fn align_lines(
        &mut self,
        alignment: Alignment,
        range: Range<usize>,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&range)?;
        let lines = self.line_range(&range);
        self.apply_style(Style::Alignment(alignment), lines.clone())?;
        Ok(lines)
    }

    // -----------------------------------------------------------------------
    // Pending styles
    // -----------------------------------------------------------------------

    /// Toggle a style for the next text typed at `cursor`.
    ///
    /// For toggle styles the pending state flips relative to what typed
    /// text would otherwise inherit, and toggling twice before typing
    /// cancels the override. Value styles are simply recorded.
    pub fn toggle_pending_style(
        &mut self,
        style: Style,
        cursor: usize,
    ) -> Result<(), RangeError> {
        self.check_range(&(cursor..cursor))?;
        let style = canonical_style(style);
        let kind = style.kind();
        if !style.is_toggle() {
            self.pending_styles.insert(kind, Some(style));
            return Ok(());
        }
        if self.pending_styles.remove(&kind).is_none() {
            let inherited = self.inherited_at(cursor).any(|s| *s == style);
            let pending = if inherited { None } else { Some(style) };
            self.pending_styles.insert(kind, pending);
        }
        Ok(())
    }

    /// Force `style` on for the next inserted text.
    pub fn set_pending_style(&mut self, style: Style) {
        let style = canonical_style(style);
        self.pending_styles.insert(style.kind(), Some(style));
    }

    pub fn clear_pending_styles(&mut self) {
        self.pending_styles.clear();
    }

    /// Pending overrides by kind: `Some` forces a style on, `None` forces
    /// the kind off.
    pub fn pending_styles(&self) -> &BTreeMap<StyleKind, Option<Style>> {
        &self.pending_styles
    }

    /// Apply and clear pending overrides over freshly inserted text.
    pub(crate) fn apply_pending_styles(&mut self, range: &Range<usize>) {
        let pending = std::mem::take(&mut self.pending_styles);
        for (kind, style) in pending {
            match style {
                Some(style) => self.put_style(style, range.clone()),
                None => self.clip_kind(&kind, range),
            }
        }
    }
}
