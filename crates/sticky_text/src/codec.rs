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

//! The stored form of a note: segments as JSON, hex encoded.
//!
//! Decoding never fails. Content is tried as hex JSON, then as bare JSON,
//! and finally taken as legacy plain text where `<br>` marks a line break.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::ModelConfig;
use crate::segment::Segment;
use crate::styled_model::StyledTextModel;

const LEGACY_LINE_BREAK: &str = "<br>";

/// Shapes of JSON found in stored notes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredContent {
    Segments(Vec<Segment>),
    Ranged(RangedContent),
}

/// Plain text plus named ranges, as written by an older editor.
#[derive(Deserialize)]
struct RangedContent {
    text: String,
    #[serde(default)]
    tags: Vec<TagRange>,
}

#[derive(Deserialize)]
struct TagRange {
    name: String,
    #[serde(default)]
    start: usize,
    end: usize,
}

#[derive(Debug, Error)]
enum HexJsonError {
    #[error("not hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("not note JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_hex_json(content: &str) -> Result<StoredContent, HexJsonError> {
    let bytes = hex::decode(content.trim())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

fn into_model(stored: StoredContent, config: ModelConfig) -> StyledTextModel {
    let codec = config.tag_scheme;
    match stored {
        StoredContent::Segments(segments) => {
            StyledTextModel::from_segments_with(&segments, &codec, config)
        }
        StoredContent::Ranged(ranged) => StyledTextModel::from_tag_ranges(
            &ranged.text,
            ranged
                .tags
                .iter()
                .map(|tag| (tag.name.as_str(), tag.start, tag.end)),
            &codec,
            config,
        ),
    }
}

/// Encode a model for storage.
pub fn encode(model: &StyledTextModel) -> String {
    let json = serde_json::to_string(&model.to_segments())
        .expect("segments always serialize");
    hex::encode(json)
}

/// Decode stored content with the default configuration.
pub fn decode(content: &str) -> StyledTextModel {
    decode_with(content, ModelConfig::default())
}

/// Decode stored content, falling back through the legacy formats. The
/// worst case is the raw content as unstyled text.
pub fn decode_with(content: &str, config: ModelConfig) -> StyledTextModel {
    if content.is_empty() {
        return StyledTextModel::with_config(config);
    }

    let error = match parse_hex_json(content) {
        Ok(stored) => return into_model(stored, config),
        Err(error) => error,
    };
    debug!(%error, "content is not hex JSON, trying bare JSON");

    let error = match serde_json::from_str::<StoredContent>(content) {
        Ok(stored) => return into_model(stored, config),
        Err(error) => error,
    };
    debug!(%error, "content is not JSON, reading it as plain text");

    let mut model = StyledTextModel::with_config(config);
    model.set_text(&content.replace(LEGACY_LINE_BREAK, "\n"));
    model
}

/// Preview markup for stored content, for views that never open an editor.
pub fn preview_from_content(content: &str, config: &ModelConfig) -> String {
    decode_with(content, config.clone()).to_preview_markup()
}

impl StyledTextModel {
    /// See [`encode`].
    pub fn encode(&self) -> String {
        encode(self)
    }

    /// See [`decode_with`]. Uses this model's configuration.
    pub fn decode(&self, content: &str) -> StyledTextModel {
        decode_with(content, self.config().clone())
    }
}
