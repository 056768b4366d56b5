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

//! Mapping between [`Style`]s and serialized tag names.
//!
//! Two naming families exist in stored notes:
//!
//! | Style             | Canonical           | Compact        |
//! |-------------------|---------------------|----------------|
//! | Foreground color  | `text_color_<c>`    | `color_<c>`    |
//! | Font size         | `font_size_<n>`     | `size_<n>`     |
//!
//! Toggle and alignment names are shared: `bold`, `italic`, `underline`,
//! `strikethrough`, `align_<left|center|right|fill>`. Parsing accepts both
//! families whichever scheme writes.

use std::str::FromStr;

use serde::Deserialize;

use crate::style::{Alignment, Style};

const TEXT_COLOR_PREFIX: &str = "text_color_";
const COLOR_PREFIX: &str = "color_";
const FONT_SIZE_PREFIX: &str = "font_size_";
const SIZE_PREFIX: &str = "size_";
const ALIGN_PREFIX: &str = "align_";

/// Converts styles to tag names and back.
pub trait TagCodec {
    fn tag_name(&self, style: &Style) -> String;

    /// Never fails: names that do not parse become [`Style::Opaque`].
    fn parse_tag(&self, name: &str) -> Style {
        parse_tag(name)
    }
}

/// Which naming family to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagScheme {
    /// `text_color_<c>` / `font_size_<n>`.
    #[default]
    Canonical,
    /// `color_<c>` / `size_<n>`.
    Compact,
}

impl TagCodec for TagScheme {
    fn tag_name(&self, style: &Style) -> String {
        match style {
            Style::Bold => "bold".to_owned(),
            Style::Italic => "italic".to_owned(),
            Style::Underline => "underline".to_owned(),
            Style::Strikethrough => "strikethrough".to_owned(),
            Style::ForegroundColor(color) => match self {
                TagScheme::Canonical => format!("{TEXT_COLOR_PREFIX}{color}"),
                TagScheme::Compact => format!("{COLOR_PREFIX}{color}"),
            },
            Style::FontSize(size) => match self {
                TagScheme::Canonical => format!("{FONT_SIZE_PREFIX}{size}"),
                TagScheme::Compact => format!("{SIZE_PREFIX}{size}"),
            },
            Style::Alignment(alignment) => format!("{ALIGN_PREFIX}{alignment}"),
            Style::Opaque(name) => name.clone(),
        }
    }
}

/// Parse a tag name from either naming family.
pub(crate) fn parse_tag(name: &str) -> Style {
    match name {
        "bold" => return Style::Bold,
        "italic" => return Style::Italic,
        "underline" => return Style::Underline,
        "strikethrough" => return Style::Strikethrough,
        _ => {}
    }

    // `text_color_` must be tried before `color_`, which it ends with.
    if let Some(color) = name.strip_prefix(TEXT_COLOR_PREFIX) {
        return parse_color(color, name);
    }
    if let Some(color) = name.strip_prefix(COLOR_PREFIX) {
        return parse_color(color, name);
    }
    if let Some(size) = name
        .strip_prefix(FONT_SIZE_PREFIX)
        .or_else(|| name.strip_prefix(SIZE_PREFIX))
    {
        return match size.parse::<u32>() {
            Ok(points) if points > 0 => Style::FontSize(points),
            _ => Style::Opaque(name.to_owned()),
        };
    }
    if let Some(alignment) = name.strip_prefix(ALIGN_PREFIX) {
        if let Ok(alignment) = Alignment::from_str(alignment) {
            return Style::Alignment(alignment);
        }
    }
    Style::Opaque(name.to_owned())
}

/// The style `style` reads back as once stored: palette names become hex,
/// unstorable values become opaque tags and opaque names that spell a
/// known tag become that style.
pub(crate) fn canonical_style(style: Style) -> Style {
    if style.is_toggle() || matches!(style, Style::Alignment(_)) {
        return style;
    }
    parse_tag(&TagScheme::Canonical.tag_name(&style))
}

fn parse_color(color: &str, tag: &str) -> Style {
    if color.is_empty() {
        return Style::Opaque(tag.to_owned());
    }
    let color = named_color(color).unwrap_or(color);
    Style::ForegroundColor(color.to_owned())
}

/// The fixed palette the older editor registered by name.
fn named_color(name: &str) -> Option<&'static str> {
    let hex = match name {
        "white" => "#ffffff",
        "black" => "#000000",
        "red" => "#ff0000",
        "green" => "#00ff00",
        "blue" => "#0000ff",
        "yellow" => "#ffff00",
        "orange" => "#ff8800",
        "purple" => "#800080",
        "pink" => "#ff00ff",
        "gray" => "#808080",
        _ => return None,
    };
    Some(hex)
}
