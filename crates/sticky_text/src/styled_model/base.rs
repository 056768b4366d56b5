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

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use crate::config::ModelConfig;
use crate::error::RangeError;
use crate::style::{Style, StyleKind, StyleRun};

/// Plain text plus style runs for one note.
///
/// ## Run invariants
///
/// - every run is non-empty and lies within `0..len()`;
/// - runs of the same [`StyleKind`] never overlap;
/// - touching runs with the same [`Style`] are merged into one;
/// - runs are ordered by `(start, style)`.
///
/// Every mutation re-establishes these before returning. With the
/// `assert-invariants` feature they are checked after each mutation.
#[derive(Clone, Debug)]
pub struct StyledTextModel {
    pub(crate) text: String,

    /// Length of `text` in chars.
    pub(crate) char_len: usize,

    pub(crate) runs: Vec<StyleRun>,

    /// Overrides for the next insertion at a collapsed cursor:
    /// `Some(style)` forces the style on, `None` forces its kind off.
    pub(crate) pending_styles: BTreeMap<StyleKind, Option<Style>>,

    pub(crate) config: ModelConfig,
}

impl Default for StyledTextModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for StyledTextModel {
    /// Documents are equal when their text and runs are; pending styles
    /// and configuration are session state.
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.runs == other.runs
    }
}

impl Eq for StyledTextModel {}

impl StyledTextModel {
    /// Create an empty model with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            text: String::new(),
            char_len: 0,
            runs: Vec::new(),
            pending_styles: BTreeMap::new(),
            config,
        }
    }

    /// Create an unstyled model holding `text`.
    pub fn from_plain_text(text: &str) -> Self {
        let mut model = Self::new();
        model.set_text(text);
        model
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document length in chars.
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Runs of one kind, in document order.
    pub fn runs_of<'a>(
        &'a self,
        kind: &'a StyleKind,
    ) -> impl Iterator<Item = &'a StyleRun> + 'a {
        self.runs.iter().filter(move |run| run.style.kind() == *kind)
    }

    pub(crate) fn check_range(
        &self,
        range: &Range<usize>,
    ) -> Result<(), RangeError> {
        RangeError::check(range, self.char_len)
    }

    /// Byte index of the char at `offset`, or the text length past the end.
    pub(crate) fn byte_offset(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(byte, _)| byte)
    }

    /// Byte indices for a sorted set of char offsets, in one pass.
    pub(crate) fn byte_offsets(
        &self,
        offsets: &BTreeSet<usize>,
    ) -> Vec<(usize, usize)> {
        let mut found = Vec::with_capacity(offsets.len());
        let mut wanted = offsets.iter().copied().peekable();
        for (offset, (byte, _)) in self.text.char_indices().enumerate() {
            while wanted.peek() == Some(&offset) {
                found.push((offset, byte));
                wanted.next();
            }
        }
        found.extend(wanted.map(|offset| (offset, self.text.len())));
        found
    }

    /// The text in a char range. The range must already be validated.
    pub(crate) fn slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        &self.text[start..end]
    }

    // -----------------------------------------------------------------------
    // Run bookkeeping
    // -----------------------------------------------------------------------

    /// Remove `kind` from `range`. Runs straddling an edge of the range are
    /// trimmed, and a run spanning the whole range is split in two.
    pub(crate) fn clip_kind(&mut self, kind: &StyleKind, range: &Range<usize>) {
        if range.is_empty() {
            return;
        }
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            if !run.intersects(range) || run.style.kind() != *kind {
                self.runs.push(run);
                continue;
            }
            if run.start < range.start {
                self.runs
                    .push(StyleRun::new(run.style.clone(), run.start..range.start));
            }
            if range.end < run.end {
                self.runs.push(StyleRun::new(run.style, range.end..run.end));
            }
        }
        self.normalize();
    }

    /// Set `style` over `range`, replacing any other value of its kind there.
    pub(crate) fn put_style(&mut self, style: Style, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.clip_kind(&style.kind(), &range);
        self.runs.push(StyleRun::new(style, range));
        self.normalize();
    }

    /// Chars of `range` covered by exactly `style`.
    pub(crate) fn coverage(&self, style: &Style, range: &Range<usize>) -> usize {
        self.runs
            .iter()
            .filter(|run| run.style == *style && run.intersects(range))
            .map(|run| run.end.min(range.end) - run.start.max(range.start))
            .sum()
    }

    /// Shift runs for `count` chars inserted at `offset`.
    ///
    /// Runs ending at or before the insertion point keep their extent, runs
    /// starting at or after it move right, and runs containing it grow.
    pub(crate) fn rebase_insert(&mut self, offset: usize, count: usize) {
        for run in &mut self.runs {
            if run.start >= offset {
                run.start += count;
                run.end += count;
            } else if run.end > offset {
                run.end += count;
            }
        }
    }

    /// Shift runs for the chars of `range` having been deleted. Endpoints
    /// inside the range collapse onto its start.
    pub(crate) fn rebase_delete(&mut self, range: &Range<usize>) {
        let removed = range.end - range.start;
        let map = |offset: usize| {
            if offset <= range.start {
                offset
            } else if offset >= range.end {
                offset - removed
            } else {
                range.start
            }
        };
        for run in &mut self.runs {
            run.start = map(run.start);
            run.end = map(run.end);
        }
        self.normalize();
    }

    /// Drop empty runs, merge touching runs of equal style and restore
    /// document order.
    pub(crate) fn normalize(&mut self) {
        let mut runs = std::mem::take(&mut self.runs);
        runs.retain(|run| !run.is_empty());
        runs.sort_by(|a, b| a.style.cmp(&b.style).then(a.start.cmp(&b.start)));

        let mut merged: Vec<StyleRun> = Vec::with_capacity(runs.len());
        for run in runs {
            if let Some(last) = merged.last_mut() {
                if last.style == run.style && run.start <= last.end {
                    last.end = last.end.max(run.end);
                    continue;
                }
            }
            merged.push(run);
        }

        merged.sort_by(|a, b| {
            a.start.cmp(&b.start).then_with(|| a.style.cmp(&b.style))
        });
        self.runs = merged;
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    /// Panic if any run invariant is broken.
    pub fn explicitly_assert_invariants(&self) {
        if let Err(problem) = self.check_invariants() {
            panic!("styled text invariant broken: {problem}\n{self:#?}");
        }
    }

    pub(crate) fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.explicitly_assert_invariants();
    }

    fn check_invariants(&self) -> Result<(), String> {
        let counted = self.text.chars().count();
        if counted != self.char_len {
            return Err(format!(
                "cached length {} but text has {counted} chars",
                self.char_len
            ));
        }
        for run in &self.runs {
            if run.is_empty() {
                return Err(format!("empty run {run:?}"));
            }
            if run.end > self.char_len {
                return Err(format!("run {run:?} ends past {}", self.char_len));
            }
        }
        for pair in self.runs.windows(2) {
            let key = |run: &StyleRun| (run.start, run.style.clone());
            if key(&pair[0]) >= key(&pair[1]) {
                return Err(format!("runs out of order: {pair:?}"));
            }
        }

        let mut by_kind: Vec<&StyleRun> = self.runs.iter().collect();
        by_kind.sort_by(|a, b| {
            a.style
                .kind()
                .cmp(&b.style.kind())
                .then(a.start.cmp(&b.start))
        });
        for pair in by_kind.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.style.kind() != b.style.kind() {
                continue;
            }
            if b.start < a.end {
                return Err(format!("same-kind runs overlap: {a:?} {b:?}"));
            }
            if b.start == a.end && a.style == b.style {
                return Err(format!("touching runs not merged: {a:?} {b:?}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::style::{Style, StyleKind, StyleRun};
    use crate::StyledTextModel;

    fn model_with_runs(text: &str, runs: &[(Style, usize, usize)]) -> StyledTextModel {
        let mut model = StyledTextModel::from_plain_text(text);
        for (style, start, end) in runs {
            model.runs.push(StyleRun::new(style.clone(), *start..*end));
        }
        model.normalize();
        model
    }

    // ===================================================================
    // Offsets
    // ===================================================================

    #[test]
    fn byte_offsets_follow_multibyte_chars() {
        let model = StyledTextModel::from_plain_text("aé☐b");
        assert_eq!(model.byte_offset(0), 0);
        assert_eq!(model.byte_offset(2), 3);
        assert_eq!(model.byte_offset(3), 6);
        assert_eq!(model.byte_offset(4), 7);
        assert_eq!(model.byte_offset(99), 7);
        assert_eq!(model.slice(1..3), "é☐");
    }

    #[test]
    fn byte_offsets_batch_includes_end() {
        let model = StyledTextModel::from_plain_text("é☐");
        let offsets = [0, 1, 2].into_iter().collect();
        assert_eq!(model.byte_offsets(&offsets), vec![(0, 0), (1, 2), (2, 5)]);
    }

    // ===================================================================
    // Normalization
    // ===================================================================

    #[test]
    fn normalize_merges_touching_equal_runs() {
        let model =
            model_with_runs("abcdef", &[(Style::Bold, 0, 2), (Style::Bold, 2, 4)]);
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..4)]);
        model.explicitly_assert_invariants();
    }

    #[test]
    fn normalize_keeps_touching_runs_of_different_value() {
        let red = Style::ForegroundColor("#ff0000".into());
        let blue = Style::ForegroundColor("#0000ff".into());
        let model =
            model_with_runs("abcdef", &[(red.clone(), 0, 3), (blue.clone(), 3, 6)]);
        assert_eq!(
            model.runs(),
            &[StyleRun::new(red, 0..3), StyleRun::new(blue, 3..6)]
        );
    }

    #[test]
    fn normalize_drops_empty_runs_and_orders_by_start() {
        let model = model_with_runs(
            "abcdef",
            &[
                (Style::Italic, 3, 5),
                (Style::Bold, 2, 2),
                (Style::Underline, 0, 1),
            ],
        );
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Underline, 0..1),
                StyleRun::new(Style::Italic, 3..5),
            ]
        );
    }

    // ===================================================================
    // Clipping
    // ===================================================================

    #[test]
    fn clipping_the_middle_splits_a_run() {
        let mut model = model_with_runs("abcdef", &[(Style::Bold, 0, 6)]);
        model.clip_kind(&StyleKind::Bold, &(2..4));
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Bold, 0..2),
                StyleRun::new(Style::Bold, 4..6),
            ]
        );
    }

    #[test]
    fn clipping_leaves_other_kinds_alone() {
        let mut model = model_with_runs(
            "abcdef",
            &[(Style::Bold, 0, 6), (Style::Italic, 1, 5)],
        );
        model.clip_kind(&StyleKind::Italic, &(0..6));
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..6)]);
    }

    #[test]
    fn put_style_replaces_other_values_of_kind() {
        let mut model =
            model_with_runs("abcdef", &[(Style::FontSize(10), 0, 6)]);
        model.put_style(Style::FontSize(20), 1..3);
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::FontSize(10), 0..1),
                StyleRun::new(Style::FontSize(20), 1..3),
                StyleRun::new(Style::FontSize(10), 3..6),
            ]
        );
        model.explicitly_assert_invariants();
    }

    // ===================================================================
    // Rebasing
    // ===================================================================

    #[test]
    fn insertion_shifts_grows_or_keeps_runs() {
        let mut model = model_with_runs(
            "abcdef",
            &[
                (Style::Bold, 0, 2),
                (Style::Italic, 1, 4),
                (Style::Underline, 2, 3),
            ],
        );
        model.rebase_insert(2, 3);
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Bold, 0..2),
                StyleRun::new(Style::Italic, 1..7),
                StyleRun::new(Style::Underline, 5..6),
            ]
        );
    }

    #[test]
    fn deletion_collapses_and_merges() {
        let mut model = model_with_runs(
            "abcdef",
            &[(Style::Bold, 0, 2), (Style::Bold, 4, 6), (Style::Italic, 2, 4)],
        );
        model.rebase_delete(&(2..4));
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..4)]);
    }

    // ===================================================================
    // Invariant checking
    // ===================================================================

    #[test]
    #[should_panic(expected = "same-kind runs overlap")]
    fn overlapping_values_are_detected() {
        let mut model = StyledTextModel::from_plain_text("abcdef");
        model.runs = vec![
            StyleRun::new(Style::FontSize(10), 0..4),
            StyleRun::new(Style::FontSize(12), 2..6),
        ];
        model.explicitly_assert_invariants();
    }

    #[test]
    #[should_panic(expected = "ends past")]
    fn runs_past_the_end_are_detected() {
        let mut model = StyledTextModel::from_plain_text("ab");
        model.runs = vec![StyleRun::new(Style::Bold, 0..3)];
        model.explicitly_assert_invariants();
    }

    #[test]
    fn runs_of_filters_by_kind() {
        let red = Style::ForegroundColor("#ff0000".into());
        let model = model_with_runs(
            "abcdef",
            &[(red.clone(), 0, 2), (Style::Bold, 1, 3), (red.clone(), 4, 6)],
        );
        let colors: Vec<_> =
            model.runs_of(&StyleKind::ForegroundColor).cloned().collect();
        assert_eq!(
            colors,
            vec![StyleRun::new(red.clone(), 0..2), StyleRun::new(red, 4..6)]
        );
    }

    #[test]
    fn equality_ignores_pending_styles() {
        let a = StyledTextModel::from_plain_text("hi");
        let mut b = StyledTextModel::from_plain_text("hi");
        b.set_pending_style(Style::Bold);
        assert_eq!(a, b);
    }
}
