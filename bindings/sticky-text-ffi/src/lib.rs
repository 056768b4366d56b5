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

//! UniFFI bindings for `sticky_text`. Offsets crossing the boundary are
//! `u32` character indices.

uniffi::setup_scaffolding!();

mod ffi_logging;
mod ffi_preview;
mod ffi_range_error;
mod ffi_segment;
mod ffi_style;
mod ffi_styled_text_model;

pub use crate::ffi_logging::init_logging;
pub use crate::ffi_preview::preview_from_content;
pub use crate::ffi_range_error::RangeError;
pub use crate::ffi_segment::{Segment, StyleRun, TextRange};
pub use crate::ffi_style::{Alignment, ListMarker, Style, StyleKind, StyleState};
pub use crate::ffi_styled_text_model::StyledTextModel;
