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

//! Read-only Pango markup for note cards.

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::warn;

use super::StyledTextModel;
use crate::config::PreviewConfig;
use crate::style::Style;

/// Pango font sizes are in 1024ths of a point.
const PANGO_SCALE: u64 = 1024;

/// Hands out text until the line limit is reached.
struct LineBudget {
    max_lines: usize,
    breaks: usize,
    spent: bool,
}

impl LineBudget {
    fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            breaks: 0,
            spent: max_lines == 0,
        }
    }

    /// The part of `text` that still fits, cut just before the line break
    /// that would start one line too many. `None` once nothing fits.
    fn take<'t>(&mut self, text: &'t str) -> Option<&'t str> {
        if self.spent {
            return None;
        }
        for (byte, _) in text.match_indices('\n') {
            self.breaks += 1;
            if self.breaks >= self.max_lines {
                self.spent = true;
                return Some(&text[..byte]);
            }
        }
        Some(text)
    }
}

fn open_tag(style: &Style) -> Option<String> {
    match style {
        Style::Bold => Some("<b>".to_owned()),
        Style::Italic => Some("<i>".to_owned()),
        Style::Underline => Some("<u>".to_owned()),
        Style::Strikethrough => Some("<s>".to_owned()),
        Style::ForegroundColor(color) => Some(format!(
            "<span foreground=\"{}\">",
            encode_double_quoted_attribute(color)
        )),
        Style::FontSize(points) => Some(format!(
            "<span size=\"{}\">",
            u64::from(*points) * PANGO_SCALE
        )),
        Style::Alignment(_) | Style::Opaque(_) => None,
    }
}

fn close_tag(style: &Style) -> Option<&'static str> {
    match style {
        Style::Bold => Some("</b>"),
        Style::Italic => Some("</i>"),
        Style::Underline => Some("</u>"),
        Style::Strikethrough => Some("</s>"),
        Style::ForegroundColor(_) | Style::FontSize(_) => Some("</span>"),
        Style::Alignment(_) | Style::Opaque(_) => None,
    }
}

impl StyledTextModel {
    /// Preview markup bounded by the configured preview settings.
    pub fn to_preview_markup(&self) -> String {
        self.to_preview_markup_with(&self.config.preview)
    }

    /// Markup showing at most `config.max_lines` lines. Every span closes
    /// the tags it opens, so the result is balanced whatever the runs.
    pub fn to_preview_markup_with(&self, config: &PreviewConfig) -> String {
        let mut budget = LineBudget::new(config.max_lines);

        if self.char_len > config.max_chars {
            warn!(
                len = self.char_len,
                max_chars = config.max_chars,
                "note too long for a styled preview, rendering plain text"
            );
            return budget
                .take(&self.text)
                .map(|text| encode_text(text).trim_end().to_owned())
                .unwrap_or_default();
        }

        let mut markup = String::new();
        for span in self.spans() {
            let Some(text) = budget.take(span.text) else {
                break;
            };
            if text.is_empty() {
                continue;
            }
            for style in &span.styles {
                if let Some(tag) = open_tag(style) {
                    markup.push_str(&tag);
                }
            }
            markup.push_str(&encode_text(text));
            for style in span.styles.iter().rev() {
                if let Some(tag) = close_tag(style) {
                    markup.push_str(tag);
                }
            }
        }
        markup.truncate(markup.trim_end().len());
        markup
    }
}
