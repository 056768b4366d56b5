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

//! Text edits. Every edit that changes the text length rebases the runs
//! behind it.

use std::ops::Range;

use super::StyledTextModel;
use crate::error::RangeError;
use crate::style::ListMarker;

impl StyledTextModel {
    /// Replace the whole text, dropping all styling and pending styles.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.char_len = text.chars().count();
        self.runs.clear();
        self.pending_styles.clear();
    }

    /// Insert `text` at `offset` and return the range it now occupies.
    ///
    /// Text typed strictly inside a run takes that run's style; text at a
    /// run's edge does not. Pending styles are applied to the inserted
    /// range and then cleared.
    pub fn insert_text(
        &mut self,
        offset: usize,
        text: &str,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&(offset..offset))?;
        let inserted = self.insert_literal(offset, text);
        if !inserted.is_empty() {
            self.apply_pending_styles(&inserted);
        }
        self.assert_invariants();
        Ok(inserted)
    }

    /// Delete the chars in `range`. Clears pending styles.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<(), RangeError> {
        self.check_range(&range)?;
        self.pending_styles.clear();
        self.delete_literal(&range);
        self.assert_invariants();
        Ok(())
    }

    /// Replace the chars in `range` with `text`, as typing over a selection
    /// does. Returns the range of the new text.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        text: &str,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&range)?;
        self.delete_literal(&range);
        self.insert_text(range.start, text)
    }

    /// Insert a line break at `offset`. When the line being left starts
    /// with a list marker, the new line starts with its continuation.
    pub fn insert_newline(
        &mut self,
        offset: usize,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&(offset..offset))?;
        let line_start = self.line_start(offset);
        let continuation = ListMarker::detect(self.slice(line_start..offset))
            .and_then(|marker| marker.continuation());

        let mut text = String::from("\n");
        if let Some(marker) = continuation {
            text.push_str(marker.as_str());
        }
        self.insert_text(offset, &text)
    }

    /// Insert a list marker literal at `offset`. Pending styles are kept
    /// for the text typed after it.
    pub fn insert_list_marker(
        &mut self,
        offset: usize,
        marker: ListMarker,
    ) -> Result<Range<usize>, RangeError> {
        self.check_range(&(offset..offset))?;
        let inserted = self.insert_literal(offset, marker.as_str());
        self.assert_invariants();
        Ok(inserted)
    }

    /// Insert without touching pending styles. `offset` must be valid.
    pub(crate) fn insert_literal(
        &mut self,
        offset: usize,
        text: &str,
    ) -> Range<usize> {
        let count = text.chars().count();
        if count == 0 {
            return offset..offset;
        }
        let byte = self.byte_offset(offset);
        self.text.insert_str(byte, text);
        self.char_len += count;
        self.rebase_insert(offset, count);
        offset..offset + count
    }

    /// Delete without touching pending styles. `range` must be valid.
    pub(crate) fn delete_literal(&mut self, range: &Range<usize>) {
        if range.is_empty() {
            return;
        }
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, "");
        self.char_len -= range.len();
        self.rebase_delete(range);
    }
}

#[cfg(test)]
mod tests {
    use crate::style::{ListMarker, Style, StyleRun};
    use crate::{RangeError, StyledTextModel};

    fn model_with_text(text: &str) -> StyledTextModel {
        StyledTextModel::from_plain_text(text)
    }

    // ===================================================================
    // Insertion
    // ===================================================================

    #[test]
    fn inserting_returns_the_new_range() {
        let mut model = model_with_text("ac");
        assert_eq!(model.insert_text(1, "bbb").unwrap(), 1..4);
        assert_eq!(model.text(), "abbbc");
        assert_eq!(model.len(), 5);
    }

    #[test]
    fn inserting_multibyte_text_counts_chars() {
        let mut model = model_with_text("☐x");
        model.bold(1..2).unwrap();
        model.insert_text(1, "éé").unwrap();
        assert_eq!(model.text(), "☐ééx");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 3..4)]);
    }

    #[test]
    fn typing_into_a_bold_range_stays_bold() {
        let mut model = model_with_text("aabbcc");
        model.bold(2..4).unwrap();
        model.insert_text(3, "X").unwrap();
        assert_eq!(model.text(), "aabXbcc");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 2..5)]);
    }

    #[test]
    fn typing_at_the_end_of_a_bold_range_is_plain() {
        let mut model = model_with_text("aabbcc");
        model.bold(2..4).unwrap();
        model.insert_text(4, "X").unwrap();
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 2..4)]);
    }

    #[test]
    fn typing_at_the_start_of_a_run_shifts_it() {
        let mut model = model_with_text("abc");
        model.bold(0..3).unwrap();
        model.insert_text(0, "zz").unwrap();
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 2..5)]);
    }

    #[test]
    fn inserting_nothing_keeps_pending_styles() {
        let mut model = model_with_text("abc");
        model.set_pending_style(Style::Bold);
        model.insert_text(1, "").unwrap();
        assert_eq!(model.pending_styles().len(), 1);
    }

    #[test]
    fn inserting_past_the_end_fails() {
        let mut model = model_with_text("abc");
        assert_eq!(
            model.insert_text(4, "x"),
            Err(RangeError::OutOfBounds {
                start: 4,
                end: 4,
                len: 3
            })
        );
        assert_eq!(model.text(), "abc");
    }

    // ===================================================================
    // Deletion
    // ===================================================================

    #[test]
    fn deleting_bold_text_preserves_remaining_bold() {
        let mut model = model_with_text("aabbcc");
        model.bold(0..6).unwrap();
        model.delete_range(2..4).unwrap();
        assert_eq!(model.text(), "aacc");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..4)]);
    }

    #[test]
    fn deleting_a_whole_run_drops_it() {
        let mut model = model_with_text("aabbcc");
        model.italic(2..4).unwrap();
        model.delete_range(1..5).unwrap();
        assert_eq!(model.text(), "ac");
        assert!(model.runs().is_empty());
    }

    #[test]
    fn deleting_between_equal_runs_joins_them() {
        let mut model = model_with_text("ab--cd");
        model.underline(0..2).unwrap();
        model.underline(4..6).unwrap();
        model.delete_range(2..4).unwrap();
        assert_eq!(model.runs(), &[StyleRun::new(Style::Underline, 0..4)]);
        model.explicitly_assert_invariants();
    }

    #[test]
    fn deleting_clips_runs_crossing_the_range() {
        let mut model = model_with_text("abcdefgh");
        model.bold(0..4).unwrap();
        model.italic(4..8).unwrap();
        model.delete_range(2..6).unwrap();
        assert_eq!(model.text(), "abgh");
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Bold, 0..2),
                StyleRun::new(Style::Italic, 2..4),
            ]
        );
    }

    // ===================================================================
    // Replacement
    // ===================================================================

    #[test]
    fn replacing_a_selection_inside_a_run_keeps_style() {
        let mut model = model_with_text("abcdef");
        model.bold(0..6).unwrap();
        let range = model.replace_range(2..4, "XYZ").unwrap();
        assert_eq!(range, 2..5);
        assert_eq!(model.text(), "abXYZef");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..7)]);
    }

    #[test]
    fn replacing_a_whole_run_loses_its_style() {
        let mut model = model_with_text("abcdef");
        model.bold(2..4).unwrap();
        model.replace_range(2..4, "XY").unwrap();
        assert!(model.runs().is_empty());
    }

    #[test]
    fn set_text_drops_styling() {
        let mut model = model_with_text("abc");
        model.bold(0..3).unwrap();
        model.set_text("new");
        assert_eq!(model.text(), "new");
        assert!(model.runs().is_empty());
    }

    // ===================================================================
    // Newlines and list markers
    // ===================================================================

    #[test]
    fn newline_continues_a_bullet_list() {
        let mut model = model_with_text("• milk");
        let range = model.insert_newline(6).unwrap();
        assert_eq!(model.text(), "• milk\n• ");
        assert_eq!(range, 6..9);
    }

    #[test]
    fn newline_after_a_checked_item_starts_an_unchecked_one() {
        let mut model = model_with_text("✔ done");
        model.insert_newline(6).unwrap();
        assert_eq!(model.text(), "✔ done\n☐ ");
    }

    #[test]
    fn newline_does_not_continue_numbered_items() {
        let mut model = model_with_text("1. first");
        model.insert_newline(8).unwrap();
        assert_eq!(model.text(), "1. first\n");
    }

    #[test]
    fn newline_looks_only_at_the_current_line() {
        let mut model = model_with_text("- a\nplain");
        model.insert_newline(9).unwrap();
        assert_eq!(model.text(), "- a\nplain\n");
    }

    #[test]
    fn list_markers_are_inserted_literally() {
        let mut model = model_with_text("task");
        model.bold(0..4).unwrap();
        let range = model.insert_list_marker(0, ListMarker::Unchecked).unwrap();
        assert_eq!(range, 0..2);
        assert_eq!(model.text(), "☐ task");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 2..6)]);
    }
}
