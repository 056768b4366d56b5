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

//! The styled-text model.
//!
//! [`StyledTextModel`] holds a note's plain text and its style runs. The
//! implementation is split by concern: run bookkeeping lives in `base`,
//! range formatting in `formatting`, text edits in `text_ops` and `lists`,
//! and the read-side views in `segments`, `preview` and `state_query`.

mod base;
mod formatting;
mod lists;
mod preview;
mod segments;
mod state_query;
mod text_ops;

pub use base::StyledTextModel;
pub use lists::BULLET_MARKER;
