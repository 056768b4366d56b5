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

use serde::{Deserialize, Serialize};

/// The serialization unit of a document: a stretch of text and the exact
/// set of tags active across all of it.
///
/// Serializes as `{"text": "...", "tags": ["...", ...]}`. Both fields
/// default when absent and unknown fields are ignored, so older notes with
/// extra keys still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::Segment;

    #[test]
    fn serializes_compactly_in_field_order() {
        let segment = Segment::new("Hi", vec!["bold".to_owned()]);
        assert_eq!(
            serde_json::to_string(&segment).unwrap(),
            r#"{"text":"Hi","tags":["bold"]}"#
        );
    }

    #[test]
    fn missing_fields_default() {
        let segment: Segment = serde_json::from_str(r#"{"tags":["x"]}"#).unwrap();
        assert_eq!(segment, Segment::new("", vec!["x".to_owned()]));
        let segment: Segment =
            serde_json::from_str(r#"{"text":"a","extra":1}"#).unwrap();
        assert_eq!(segment, Segment::plain("a"));
    }
}
