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
use std::sync::{Arc, Mutex};

use crate::ffi_segment::to_u32;
use crate::{
    Alignment, ListMarker, RangeError, Segment, Style, StyleKind, StyleRun,
    StyleState, TextRange,
};

fn range(start: u32, end: u32) -> Range<usize> {
    start as usize..end as usize
}

#[derive(uniffi::Object)]
pub struct StyledTextModel {
    inner: Mutex<sticky_text::StyledTextModel>,
}

impl StyledTextModel {
    fn wrap(inner: sticky_text::StyledTextModel) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(inner),
        })
    }
}

#[uniffi::export]
impl StyledTextModel {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Self::wrap(sticky_text::StyledTextModel::new())
    }

    /// Load stored content. Never fails: unreadable content opens as
    /// plain text.
    #[uniffi::constructor]
    pub fn from_encoded(content: String) -> Arc<Self> {
        Self::wrap(sticky_text::decode(&content))
    }

    #[uniffi::constructor]
    pub fn from_plain_text(text: String) -> Arc<Self> {
        Self::wrap(sticky_text::StyledTextModel::from_plain_text(&text))
    }

    #[uniffi::constructor]
    pub fn from_segments(segments: Vec<Segment>) -> Arc<Self> {
        let segments: Vec<sticky_text::Segment> =
            segments.into_iter().map(Into::into).collect();
        Self::wrap(sticky_text::StyledTextModel::from_segments(&segments))
    }

    pub fn text(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().text().to_owned()
    }

    pub fn len(self: &Arc<Self>) -> u32 {
        to_u32(self.inner.lock().unwrap().len())
    }

    pub fn runs(self: &Arc<Self>) -> Vec<StyleRun> {
        self.inner
            .lock()
            .unwrap()
            .runs()
            .iter()
            .map(StyleRun::from)
            .collect()
    }

    pub fn set_text(self: &Arc<Self>, text: String) {
        self.inner.lock().unwrap().set_text(&text);
    }

    pub fn insert_text(
        self: &Arc<Self>,
        offset: u32,
        text: String,
    ) -> Result<TextRange, RangeError> {
        let inserted = self
            .inner
            .lock()
            .unwrap()
            .insert_text(offset as usize, &text)?;
        Ok(inserted.into())
    }

    pub fn delete_range(
        self: &Arc<Self>,
        start: u32,
        end: u32,
    ) -> Result<(), RangeError> {
        self.inner
            .lock()
            .unwrap()
            .delete_range(range(start, end))?;
        Ok(())
    }

    pub fn replace_range(
        self: &Arc<Self>,
        start: u32,
        end: u32,
        text: String,
    ) -> Result<TextRange, RangeError> {
        let inserted = self
            .inner
            .lock()
            .unwrap()
            .replace_range(range(start, end), &text)?;
        Ok(inserted.into())
    }

    pub fn insert_newline(
        self: &Arc<Self>,
        offset: u32,
    ) -> Result<TextRange, RangeError> {
        let inserted = self
            .inner
            .lock()
            .unwrap()
            .insert_newline(offset as usize)?;
        Ok(inserted.into())
    }

    pub fn insert_list_marker(
        self: &Arc<Self>,
        offset: u32,
        marker: ListMarker,
    ) -> Result<TextRange, RangeError> {
        let inserted = self
            .inner
            .lock()
            .unwrap()
            .insert_list_marker(offset as usize, marker.into())?;
        Ok(inserted.into())
    }

    pub fn apply_style(
        self: &Arc<Self>,
        style: Style,
        start: u32,
        end: u32,
    ) -> Result<(), RangeError> {
        self.inner
            .lock()
            .unwrap()
            .apply_style(style.into(), range(start, end))?;
        Ok(())
    }

    pub fn remove_style(
        self: &Arc<Self>,
        kind: StyleKind,
        start: u32,
        end: u32,
    ) -> Result<(), RangeError> {
        self.inner
            .lock()
            .unwrap()
            .remove_style(&kind.into(), range(start, end))?;
        Ok(())
    }

    pub fn align_lines(
        self: &Arc<Self>,
        alignment: Alignment,
        start: u32,
        end: u32,
    ) -> Result<TextRange, RangeError> {
        let lines = self
            .inner
            .lock()
            .unwrap()
            .align_lines(alignment.into(), range(start, end))?;
        Ok(lines.into())
    }

    pub fn to_bullet_list(
        self: &Arc<Self>,
        start: u32,
        end: u32,
    ) -> Result<TextRange, RangeError> {
        let lines = self
            .inner
            .lock()
            .unwrap()
            .to_bullet_list(range(start, end))?;
        Ok(lines.into())
    }

    pub fn remove_bullet_list(
        self: &Arc<Self>,
        start: u32,
        end: u32,
    ) -> Result<TextRange, RangeError> {
        let lines = self
            .inner
            .lock()
            .unwrap()
            .remove_bullet_list(range(start, end))?;
        Ok(lines.into())
    }

    pub fn toggle_bullet_list(
        self: &Arc<Self>,
        start: u32,
        end: u32,
    ) -> Result<TextRange, RangeError> {
        let lines = self
            .inner
            .lock()
            .unwrap()
            .toggle_bullet_list(range(start, end))?;
        Ok(lines.into())
    }

    pub fn styles_at(self: &Arc<Self>, offset: u32) -> Vec<Style> {
        self.inner
            .lock()
            .unwrap()
            .styles_at(offset as usize)
            .into_iter()
            .map(Style::from)
            .collect()
    }

    pub fn style_state(
        self: &Arc<Self>,
        style: Style,
        start: u32,
        end: u32,
    ) -> Result<StyleState, RangeError> {
        let state = self
            .inner
            .lock()
            .unwrap()
            .style_state(&style.into(), range(start, end))?;
        Ok(state.into())
    }

    pub fn toggle_pending_style(
        self: &Arc<Self>,
        style: Style,
        cursor: u32,
    ) -> Result<(), RangeError> {
        self.inner
            .lock()
            .unwrap()
            .toggle_pending_style(style.into(), cursor as usize)?;
        Ok(())
    }

    pub fn clear_pending_styles(self: &Arc<Self>) {
        self.inner.lock().unwrap().clear_pending_styles();
    }

    pub fn to_segments(self: &Arc<Self>) -> Vec<Segment> {
        self.inner
            .lock()
            .unwrap()
            .to_segments()
            .into_iter()
            .map(Segment::from)
            .collect()
    }

    /// Content to hand to the note store.
    pub fn encode(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().encode()
    }

    pub fn preview_markup(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().to_preview_markup()
    }
}
