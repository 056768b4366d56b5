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

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(uniffi::Enum, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ForegroundColor { color: String },
    FontSize { points: u32 },
    Align { alignment: Alignment },
    Opaque { name: String },
}

#[derive(uniffi::Enum, Clone, Debug, PartialEq, Eq)]
pub enum StyleKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    ForegroundColor,
    FontSize,
    Alignment,
    Opaque { name: String },
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleState {
    Inactive,
    Mixed,
    Active,
}

#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Dash,
    Arabic,
    Roman,
    Alpha,
    Unchecked,
    Checked,
}

impl From<sticky_text::Alignment> for Alignment {
    fn from(inner: sticky_text::Alignment) -> Self {
        match inner {
            sticky_text::Alignment::Left => Self::Left,
            sticky_text::Alignment::Center => Self::Center,
            sticky_text::Alignment::Right => Self::Right,
            sticky_text::Alignment::Justify => Self::Justify,
        }
    }
}

impl From<Alignment> for sticky_text::Alignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::Right => Self::Right,
            Alignment::Justify => Self::Justify,
        }
    }
}

impl From<&sticky_text::Style> for Style {
    fn from(inner: &sticky_text::Style) -> Self {
        match inner {
            sticky_text::Style::Bold => Self::Bold,
            sticky_text::Style::Italic => Self::Italic,
            sticky_text::Style::Underline => Self::Underline,
            sticky_text::Style::Strikethrough => Self::Strikethrough,
            sticky_text::Style::ForegroundColor(color) => Self::ForegroundColor {
                color: color.clone(),
            },
            sticky_text::Style::FontSize(points) => {
                Self::FontSize { points: *points }
            }
            sticky_text::Style::Alignment(alignment) => Self::Align {
                alignment: (*alignment).into(),
            },
            sticky_text::Style::Opaque(name) => Self::Opaque { name: name.clone() },
        }
    }
}

impl From<Style> for sticky_text::Style {
    fn from(style: Style) -> Self {
        match style {
            Style::Bold => Self::Bold,
            Style::Italic => Self::Italic,
            Style::Underline => Self::Underline,
            Style::Strikethrough => Self::Strikethrough,
            Style::ForegroundColor { color } => Self::ForegroundColor(color),
            Style::FontSize { points } => Self::FontSize(points),
            Style::Align { alignment } => Self::Alignment(alignment.into()),
            Style::Opaque { name } => Self::Opaque(name),
        }
    }
}

impl From<StyleKind> for sticky_text::StyleKind {
    fn from(kind: StyleKind) -> Self {
        match kind {
            StyleKind::Bold => Self::Bold,
            StyleKind::Italic => Self::Italic,
            StyleKind::Underline => Self::Underline,
            StyleKind::Strikethrough => Self::Strikethrough,
            StyleKind::ForegroundColor => Self::ForegroundColor,
            StyleKind::FontSize => Self::FontSize,
            StyleKind::Alignment => Self::Alignment,
            StyleKind::Opaque { name } => Self::Opaque(name),
        }
    }
}

impl From<sticky_text::StyleState> for StyleState {
    fn from(inner: sticky_text::StyleState) -> Self {
        match inner {
            sticky_text::StyleState::Inactive => Self::Inactive,
            sticky_text::StyleState::Mixed => Self::Mixed,
            sticky_text::StyleState::Active => Self::Active,
        }
    }
}

impl From<ListMarker> for sticky_text::ListMarker {
    fn from(marker: ListMarker) -> Self {
        match marker {
            ListMarker::Bullet => Self::Bullet,
            ListMarker::Dash => Self::Dash,
            ListMarker::Arabic => Self::Arabic,
            ListMarker::Roman => Self::Roman,
            ListMarker::Alpha => Self::Alpha,
            ListMarker::Unchecked => Self::Unchecked,
            ListMarker::Checked => Self::Checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_convert_both_ways() {
        let styles = vec![
            sticky_text::Style::Bold,
            sticky_text::Style::ForegroundColor("#ff0000".into()),
            sticky_text::Style::FontSize(12),
            sticky_text::Style::Alignment(sticky_text::Alignment::Justify),
            sticky_text::Style::Opaque("mark".into()),
        ];
        for style in styles {
            let ffi = Style::from(&style);
            assert_eq!(sticky_text::Style::from(ffi), style);
        }
    }

    #[test]
    fn opaque_kinds_keep_their_name() {
        let kind = sticky_text::StyleKind::from(StyleKind::Opaque {
            name: "mark".into(),
        });
        assert_eq!(kind, sticky_text::StyleKind::Opaque("mark".into()));
    }
}
