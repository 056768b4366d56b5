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

//! Conversion between the run representation and flat segments.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Range;

use super::StyledTextModel;
use crate::config::ModelConfig;
use crate::segment::Segment;
use crate::style::{Style, StyleKind, StyleRun};
use crate::tag_codec::TagCodec;

/// A stretch of text with a constant set of styles.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Span<'a> {
    pub(crate) text: &'a str,
    /// In style order.
    pub(crate) styles: Vec<&'a Style>,
}

impl StyledTextModel {
    /// Split the text at every run boundary. Neighbouring pieces with equal
    /// style sets are joined, so no two adjacent spans share a style set.
    ///
    /// One sweep over the boundaries: runs enter the active set in start
    /// order and leave it in end order.
    pub(crate) fn spans(&self) -> Vec<Span<'_>> {
        let mut boundaries = BTreeSet::from([0, self.char_len]);
        for run in &self.runs {
            boundaries.insert(run.start);
            boundaries.insert(run.end);
        }
        let bytes = self.byte_offsets(&boundaries);

        let mut by_end: Vec<&StyleRun> = self.runs.iter().collect();
        by_end.sort_by_key(|run| run.end);
        let mut starting = self.runs.iter().peekable();
        let mut ending = by_end.into_iter().peekable();
        let mut active: BTreeSet<&Style> = BTreeSet::new();

        let mut pieces: Vec<(Range<usize>, Vec<&Style>)> = Vec::new();
        for pair in bytes.windows(2) {
            let (start, start_byte) = pair[0];
            let (_, end_byte) = pair[1];
            while let Some(run) = ending.next_if(|run| run.end <= start) {
                active.remove(&run.style);
            }
            while let Some(run) = starting.next_if(|run| run.start <= start) {
                active.insert(&run.style);
            }

            if let Some((range, last)) = pieces.last_mut() {
                if last.iter().eq(active.iter()) {
                    range.end = end_byte;
                    continue;
                }
            }
            pieces.push((start_byte..end_byte, active.iter().copied().collect()));
        }

        pieces
            .into_iter()
            .map(|(range, styles)| Span {
                text: &self.text[range],
                styles,
            })
            .collect()
    }

    /// Flatten into segments, naming tags with the configured scheme.
    pub fn to_segments(&self) -> Vec<Segment> {
        self.to_segments_with(&self.config.tag_scheme)
    }

    /// Flatten into segments, naming tags with `codec`. An empty text gives
    /// a single empty segment.
    pub fn to_segments_with(&self, codec: &dyn TagCodec) -> Vec<Segment> {
        if self.is_empty() {
            return vec![Segment::default()];
        }
        self.spans()
            .into_iter()
            .map(|span| {
                let tags = span
                    .styles
                    .iter()
                    .map(|style| codec.tag_name(style))
                    .collect();
                Segment::new(span.text, tags)
            })
            .collect()
    }

    /// Rebuild a model from segments with the default configuration.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let config = ModelConfig::default();
        let codec = config.tag_scheme;
        Self::from_segments_with(segments, &codec, config)
    }

    /// Rebuild a model from segments, parsing tags with `codec`.
    ///
    /// Runs of the same style in consecutive segments are joined. When a
    /// segment names two values of one kind the last one wins.
    pub fn from_segments_with(
        segments: &[Segment],
        codec: &dyn TagCodec,
        config: ModelConfig,
    ) -> Self {
        let mut model = Self::with_config(config);
        let mut open: HashMap<Style, usize> = HashMap::new();
        let mut offset = 0;

        for segment in segments {
            let count = segment.text.chars().count();
            if count == 0 {
                continue;
            }
            let end = offset + count;
            model.text.push_str(&segment.text);

            let mut styles: BTreeMap<StyleKind, Style> = BTreeMap::new();
            for tag in &segment.tags {
                let style = codec.parse_tag(tag);
                styles.insert(style.kind(), style);
            }

            let mut still_open = HashMap::with_capacity(styles.len());
            for style in styles.into_values() {
                let index = match open.get(&style) {
                    Some(&index) if model.runs[index].end == offset => {
                        model.runs[index].end = end;
                        index
                    }
                    _ => {
                        model.runs.push(StyleRun::new(style.clone(), offset..end));
                        model.runs.len() - 1
                    }
                };
                still_open.insert(style, index);
            }
            open = still_open;
            offset = end;
        }

        model.char_len = offset;
        model.normalize();
        model.assert_invariants();
        model
    }

    /// Rebuild a model from plain text plus named ranges. Ranges are
    /// clamped to the text, empty or inverted ones are skipped and later
    /// ranges of a kind override earlier ones.
    pub(crate) fn from_tag_ranges<'t>(
        text: &str,
        ranges: impl IntoIterator<Item = (&'t str, usize, usize)>,
        codec: &dyn TagCodec,
        config: ModelConfig,
    ) -> Self {
        let mut model = Self::with_config(config);
        model.set_text(text);
        for (name, start, end) in ranges {
            let end = end.min(model.char_len);
            if start >= end {
                continue;
            }
            model.put_style(codec.parse_tag(name), start..end);
        }
        model.assert_invariants();
        model
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use crate::config::ModelConfig;
    use crate::segment::Segment;
    use crate::style::{Alignment, Style, StyleRun};
    use crate::tag_codec::TagScheme;
    use crate::StyledTextModel;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    fn red() -> Style {
        Style::ForegroundColor("#ff0000".into())
    }

    // ===================================================================
    // to_segments
    // ===================================================================

    #[test]
    fn empty_model_gives_one_empty_segment() {
        let model = StyledTextModel::new();
        assert_eq!(model.to_segments(), vec![Segment::default()]);
    }

    #[test]
    fn unstyled_text_is_one_segment() {
        let model = StyledTextModel::from_plain_text("just text");
        assert_eq!(model.to_segments(), vec![Segment::plain("just text")]);
    }

    #[test]
    fn bold_prefix_splits_into_two_segments() {
        let mut model = StyledTextModel::from_plain_text("Hi there");
        model.bold(0..2).unwrap();
        assert_eq!(
            model.to_segments(),
            vec![
                Segment::new("Hi", tags(&["bold"])),
                Segment::plain(" there"),
            ]
        );
    }

    #[test]
    fn overlapping_kinds_split_at_every_boundary() {
        let mut model = StyledTextModel::from_plain_text("abcdef");
        model.bold(0..4).unwrap();
        model.apply_style(red(), 2..6).unwrap();
        assert_eq!(
            model.to_segments(),
            vec![
                Segment::new("ab", tags(&["bold"])),
                Segment::new("cd", tags(&["bold", "text_color_#ff0000"])),
                Segment::new("ef", tags(&["text_color_#ff0000"])),
            ]
        );
    }

    #[test]
    fn tags_follow_style_order() {
        let mut model = StyledTextModel::from_plain_text("x");
        model.apply_style(Style::FontSize(14), 0..1).unwrap();
        model.apply_style(Style::Alignment(Alignment::Center), 0..1).unwrap();
        model.underline(0..1).unwrap();
        model.bold(0..1).unwrap();
        assert_eq!(
            model.to_segments()[0].tags,
            tags(&["bold", "underline", "font_size_14", "align_center"])
        );
    }

    #[test]
    fn compact_scheme_names_value_tags_briefly() {
        let config = ModelConfig {
            tag_scheme: TagScheme::Compact,
            ..ModelConfig::default()
        };
        let mut model = StyledTextModel::with_config(config);
        model.set_text("ab");
        model.apply_style(Style::FontSize(9), 0..2).unwrap();
        assert_eq!(
            model.to_segments(),
            vec![Segment::new("ab", tags(&["size_9"]))]
        );
    }

    #[test]
    fn spans_cut_multibyte_text_on_char_boundaries() {
        let mut model = StyledTextModel::from_plain_text("ééxx");
        model.bold(1..3).unwrap();
        let spans = model.spans();
        assert_that(&spans).has_length(3);
        assert_eq!(spans[0].text, "é");
        assert_eq!(spans[1].text, "éx");
        assert_eq!(spans[1].styles, vec![&Style::Bold]);
        assert_eq!(spans[2].text, "x");
        assert!(spans[2].styles.is_empty());
    }

    #[test]
    fn spans_track_runs_entering_and_leaving() {
        let mut model = StyledTextModel::from_plain_text("abcdefghij");
        model.bold(0..6).unwrap();
        model.italic(2..4).unwrap();
        model.apply_style(red(), 3..9).unwrap();
        model
            .apply_style(Style::ForegroundColor("#0000ff".into()), 9..10)
            .unwrap();
        model.underline(6..8).unwrap();

        let spans = model.spans();
        let mut offset = 0;
        for span in &spans {
            assert_eq!(span.styles, model.styles_at(offset), "at {offset}");
            offset += span.text.chars().count();
        }
        assert_eq!(offset, 10);
        assert_that(&spans).has_length(7);
    }

    // ===================================================================
    // from_segments
    // ===================================================================

    #[test]
    fn segments_rebuild_runs() {
        let model = StyledTextModel::from_segments(&[
            Segment::new("Hi", tags(&["bold"])),
            Segment::plain(" there"),
        ]);
        assert_eq!(model.text(), "Hi there");
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..2)]);
    }

    #[test]
    fn contiguous_segments_extend_one_run() {
        let model = StyledTextModel::from_segments(&[
            Segment::new("ab", tags(&["bold"])),
            Segment::new("cd", tags(&["bold", "italic"])),
            Segment::new("ef", tags(&["bold"])),
        ]);
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Bold, 0..6),
                StyleRun::new(Style::Italic, 2..4),
            ]
        );
    }

    #[test]
    fn a_gap_starts_a_new_run() {
        let model = StyledTextModel::from_segments(&[
            Segment::new("ab", tags(&["bold"])),
            Segment::plain("cd"),
            Segment::new("ef", tags(&["bold"])),
        ]);
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::Bold, 0..2),
                StyleRun::new(Style::Bold, 4..6),
            ]
        );
    }

    #[test]
    fn both_tag_families_are_read() {
        let model = StyledTextModel::from_segments(&[
            Segment::new("ab", tags(&["color_#00ff00", "size_12"])),
            Segment::new("cd", tags(&["text_color_#00ff00", "font_size_12"])),
        ]);
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::ForegroundColor("#00ff00".into()), 0..4),
                StyleRun::new(Style::FontSize(12), 0..4),
            ]
        );
    }

    #[test]
    fn unknown_tags_survive_a_round_trip() {
        let segments = vec![
            Segment::new("mark", tags(&["highlight_yellow"])),
            Segment::plain(" me"),
        ];
        let model = StyledTextModel::from_segments(&segments);
        assert_eq!(
            model.runs(),
            &[StyleRun::new(Style::Opaque("highlight_yellow".into()), 0..4)]
        );
        assert_eq!(model.to_segments(), segments);
    }

    #[test]
    fn last_value_of_a_kind_wins_within_a_segment() {
        let model = StyledTextModel::from_segments(&[Segment::new(
            "x",
            tags(&["font_size_10", "font_size_20"]),
        )]);
        assert_eq!(model.runs(), &[StyleRun::new(Style::FontSize(20), 0..1)]);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let model = StyledTextModel::from_segments(&[
            Segment::new("", tags(&["bold"])),
            Segment::plain("x"),
        ]);
        assert_eq!(model.text(), "x");
        assert!(model.runs().is_empty());
        model.explicitly_assert_invariants();
    }

    #[test]
    fn no_segments_give_an_empty_model() {
        let model = StyledTextModel::from_segments(&[]);
        assert!(model.is_empty());
    }

    // ===================================================================
    // Tag ranges
    // ===================================================================

    #[test]
    fn tag_ranges_are_clamped_and_filtered() {
        let codec = TagScheme::Canonical;
        let model = StyledTextModel::from_tag_ranges(
            "hello",
            [("bold", 0, 99), ("italic", 3, 1), ("underline", 9, 12)],
            &codec,
            ModelConfig::default(),
        );
        assert_eq!(model.runs(), &[StyleRun::new(Style::Bold, 0..5)]);
    }

    #[test]
    fn later_tag_ranges_of_a_kind_win() {
        let codec = TagScheme::Canonical;
        let model = StyledTextModel::from_tag_ranges(
            "hello",
            [("font_size_10", 0, 5), ("font_size_20", 2, 4)],
            &codec,
            ModelConfig::default(),
        );
        assert_eq!(
            model.runs(),
            &[
                StyleRun::new(Style::FontSize(10), 0..2),
                StyleRun::new(Style::FontSize(20), 2..4),
                StyleRun::new(Style::FontSize(10), 4..5),
            ]
        );
    }
}
