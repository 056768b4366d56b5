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

//! Line helpers and bullet list editing. Markers are plain text at the
//! start of a line, so list edits are text edits.

use std::ops::Range;

use super::StyledTextModel;
use crate::error::RangeError;

/// The literal prefix used for bullet list items.
pub const BULLET_MARKER: &str = "• ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListEdit {
    Add,
    Remove,
    Toggle,
}

impl StyledTextModel {
    /// Offset of the first char of the line containing `offset`.
    pub(crate) fn line_start(&self, offset: usize) -> usize {
        let before = self.slice(0..offset);
        before
            .rfind('\n')
            .map_or(0, |byte| before[..byte].chars().count() + 1)
    }

    /// Offset of the line break ending the line containing `offset`, or the
    /// text length on the last line.
    pub(crate) fn line_end(&self, offset: usize) -> usize {
        self.text
            .chars()
            .skip(offset)
            .position(|c| c == '\n')
            .map_or(self.char_len, |found| offset + found)
    }

    /// `range` grown to whole lines. An empty range gives its own line.
    pub(crate) fn line_range(&self, range: &Range<usize>) -> Range<usize> {
        self.line_start(range.start)..self.line_end(range.end)
    }

    /// Start offsets of every line touched by `lines`, which must already
    /// be expanded to whole lines.
    fn line_starts(&self, lines: &Range<usize>) -> Vec<usize> {
        let mut starts = vec![lines.start];
        for (index, c) in self.slice(lines.clone()).chars().enumerate() {
            if c == '\n' {
                starts.push(lines.start + index + 1);
            }
        }
        starts
    }

    fn has_bullet_at(&self, line_start: usize) -> bool {
        let marker_len = BULLET_MARKER.chars().count();
        line_start + marker_len <= self.char_len
            && self.slice(line_start..line_start + marker_len) == BULLET_MARKER
    }

    /// Prefix every line touched by `range` with the bullet marker, skipping
    /// lines that already have one. Returns the affected lines.
    pub fn to_bullet_list(
        &mut self,
        range: Range<usize>,
    ) -> Result<Range<usize>, RangeError> {
        self.edit_bullets(range, ListEdit::Add)
    }

    /// Strip the bullet marker from every line touched by `range`.
    pub fn remove_bullet_list(
        &mut self,
        range: Range<usize>,
    ) -> Result<Range<usize>, RangeError> {
        self.edit_bullets(range, ListEdit::Remove)
    }

    /// Flip each touched line on its own: a bulleted line loses its bullet,
    /// any other line gains one.
    pub fn toggle_bullet_list(
        &mut self,
        range: Range<usize>,
    ) -> Result<Range<usize>, RangeError> {
        self.edit_bullets(range, ListEdit::Toggle)
    }

    fn edit_bullets(
        &mut self,
        range: Range<usize>,
        edit: ListEdit,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&range)?;
        self.pending_styles.clear();

        let lines = self.line_range(&range);
        let starts = self.line_starts(&lines);

        let marker_len = BULLET_MARKER.chars().count();
        let mut end = lines.end;
        // Back to front so earlier line starts stay valid.
        for start in starts.into_iter().rev() {
            let present = self.has_bullet_at(start);
            let add = match edit {
                ListEdit::Add => true,
                ListEdit::Remove => false,
                ListEdit::Toggle => !present,
            };
            if add && !present {
                self.insert_literal(start, BULLET_MARKER);
                end += marker_len;
            } else if !add && present {
                self.delete_literal(&(start..start + marker_len));
                end -= marker_len;
            }
        }

        self.assert_invariants();
        Ok(lines.start..end)
    }
}
