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

//! Model configuration, loadable from the host application's JSON settings.

use serde::Deserialize;

use crate::tag_codec::TagScheme;

/// Settings for a [`crate::StyledTextModel`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Naming family used when writing tags. Reading accepts both.
    pub tag_scheme: TagScheme,
    pub preview: PreviewConfig,
}

/// Bounds for card previews.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Lines of content kept in a preview.
    pub max_lines: usize,
    /// Documents longer than this many characters are previewed as plain
    /// text without style reconciliation.
    pub max_chars: usize,
}

impl PreviewConfig {
    pub const DEFAULT_MAX_LINES: usize = 5;
    pub const DEFAULT_MAX_CHARS: usize = 10_000;
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: Self::DEFAULT_MAX_LINES,
            max_chars: Self::DEFAULT_MAX_CHARS,
        }
    }
}

impl ModelConfig {
    /// Parse a JSON settings object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
