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

use sticky_text::{ModelConfig, PreviewConfig};

/// Card preview markup for stored note content.
#[uniffi::export]
pub fn preview_from_content(content: String, max_lines: u32) -> String {
    let config = ModelConfig {
        preview: PreviewConfig {
            max_lines: max_lines as usize,
            ..PreviewConfig::default()
        },
        ..ModelConfig::default()
    };
    sticky_text::preview_from_content(&content, &config)
}
