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

use super::StyledTextModel;
use crate::error::RangeError;
use crate::style::{Style, StyleState};
use crate::tag_codec::canonical_style;

impl StyledTextModel {
    /// Styles covering the char at `offset`, in style order. Empty at or
    /// past the end of the text.
    pub fn styles_at(&self, offset: usize) -> Vec<&Style> {
        let mut styles: Vec<&Style> = self
            .runs
            .iter()
            .filter(|run| run.covers(offset))
            .map(|run| &run.style)
            .collect();
        styles.sort();
        styles
    }

    /// How much of `range` carries `style`.
    ///
    /// For a collapsed range this reports what typed text would get: the
    /// pending override for the style's kind if there is one, otherwise the
    /// style of a run the cursor sits strictly inside.
    pub fn style_state(
        &self,
        style: &Style,
        range: Range<usize>,
    ) -> Result<StyleState, RangeError> {
        self.check_range(&range)?;
        let style = &canonical_style(style.clone());
        if range.is_empty() {
            let active = match self.pending_styles.get(&style.kind()) {
                Some(pending) => pending.as_ref() == Some(style),
                None => self.inherited_at(range.start).any(|s| s == style),
            };
            return Ok(if active {
                StyleState::Active
            } else {
                StyleState::Inactive
            });
        }

        let covered = self.coverage(style, &range);
        Ok(if covered == 0 {
            StyleState::Inactive
        } else if covered == range.len() {
            StyleState::Active
        } else {
            StyleState::Mixed
        })
    }

    /// Styles text inserted at `cursor` picks up from the runs around it.
    pub(crate) fn inherited_at(
        &self,
        cursor: usize,
    ) -> impl Iterator<Item = &Style> + '_ {
        self.runs
            .iter()
            .filter(move |run| run.start < cursor && cursor < run.end)
            .map(|run| &run.style)
    }
}
