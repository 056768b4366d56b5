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

//! Styled-text model for sticky notes.
//!
//! A note's content is plain text plus a set of [`StyleRun`]s, half-open
//! character ranges carrying one [`Style`] each. The [`StyledTextModel`]
//! owns both and keeps them consistent across formatting and text edits.
//!
//! Content is persisted as a list of [`Segment`]s, serialized to JSON and
//! hex-encoded (see [`encode`] / [`decode`]). Read-only card views render
//! a bounded Pango markup preview with
//! [`StyledTextModel::to_preview_markup`].
//!
//! All offsets are Unicode scalar value (`char`) indices.

mod codec;
mod config;
mod error;
mod segment;
mod store;
mod style;
mod styled_model;
mod tag_codec;

pub use codec::{decode, decode_with, encode, preview_from_content};
pub use config::{ModelConfig, PreviewConfig};
pub use error::RangeError;
pub use segment::Segment;
pub use store::{
    MemoryNoteStore, MemoryStoreError, NoteRecord, NoteSession, NoteStore,
    SessionError,
};
pub use style::{Alignment, ListMarker, Style, StyleKind, StyleRun, StyleState};
pub use styled_model::{StyledTextModel, BULLET_MARKER};
pub use tag_codec::{TagCodec, TagScheme};
