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

//! Persistence seam. The model never touches storage itself: a
//! [`NoteSession`] reads a note's content through a [`NoteStore`], decodes
//! it, and writes the re-encoded content back on save.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::debug;

use crate::codec::decode_with;
use crate::config::ModelConfig;
use crate::styled_model::StyledTextModel;

/// A stored note as the model sees it. Other columns stay with the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: i64,
    /// Encoded content, see [`crate::encode`].
    pub content: String,
}

/// Where notes live.
pub trait NoteStore {
    type Error: std::error::Error + 'static;

    fn get(&self, id: i64) -> Result<Option<NoteRecord>, Self::Error>;

    /// Overwrite the content of note `id`.
    fn update(&mut self, id: i64, content: &str) -> Result<(), Self::Error>;
}

impl<T: NoteStore + ?Sized> NoteStore for &mut T {
    type Error = T::Error;

    fn get(&self, id: i64) -> Result<Option<NoteRecord>, Self::Error> {
        (**self).get(id)
    }

    fn update(&mut self, id: i64, content: &str) -> Result<(), Self::Error> {
        (**self).update(id, content)
    }
}

#[derive(Debug, Error)]
pub enum SessionError<E: std::error::Error + 'static> {
    #[error("note {0} does not exist")]
    NotFound(i64),
    #[error("note store failed")]
    Store(#[source] E),
}

/// One open note: the live model plus the store it came from.
///
/// Saving writes the whole note. Two sessions on the same note do not see
/// each other, and the last one to save wins.
#[derive(Debug)]
pub struct NoteSession<S: NoteStore> {
    store: S,
    note_id: i64,
    model: StyledTextModel,
}

impl<S: NoteStore> NoteSession<S> {
    pub fn open(
        store: S,
        note_id: i64,
        config: ModelConfig,
    ) -> Result<Self, SessionError<S::Error>> {
        let record = store
            .get(note_id)
            .map_err(SessionError::Store)?
            .ok_or(SessionError::NotFound(note_id))?;
        let model = decode_with(&record.content, config);
        debug!(note_id, len = model.len(), "opened note");
        Ok(Self {
            store,
            note_id,
            model,
        })
    }

    pub fn note_id(&self) -> i64 {
        self.note_id
    }

    pub fn model(&self) -> &StyledTextModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut StyledTextModel {
        &mut self.model
    }

    /// Card preview of the current, possibly unsaved, content.
    pub fn preview(&self) -> String {
        self.model.to_preview_markup()
    }

    pub fn save(&mut self) -> Result<(), SessionError<S::Error>> {
        let content = self.model.encode();
        self.store
            .update(self.note_id, &content)
            .map_err(SessionError::Store)?;
        debug!(note_id = self.note_id, bytes = content.len(), "saved note");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("no note with id {0}")]
    UnknownNote(i64),
}

#[derive(Debug, Default)]
struct MemoryNotes {
    notes: HashMap<i64, String>,
    next_id: i64,
}

/// An in-memory [`NoteStore`]. Clones share the same notes, so several
/// sessions can be opened against one store.
#[derive(Clone, Debug, Default)]
pub struct MemoryNoteStore {
    inner: Arc<Mutex<MemoryNotes>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn notes(&self) -> MutexGuard<'_, MemoryNotes> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a new note and return its id.
    pub fn insert(&self, content: &str) -> i64 {
        let mut notes = self.notes();
        notes.next_id += 1;
        let id = notes.next_id;
        notes.notes.insert(id, content.to_owned());
        id
    }

    pub fn content(&self, id: i64) -> Option<String> {
        self.notes().notes.get(&id).cloned()
    }
}

impl NoteStore for MemoryNoteStore {
    type Error = MemoryStoreError;

    fn get(&self, id: i64) -> Result<Option<NoteRecord>, Self::Error> {
        Ok(self.content(id).map(|content| NoteRecord { id, content }))
    }

    fn update(&mut self, id: i64, content: &str) -> Result<(), Self::Error> {
        match self.notes().notes.get_mut(&id) {
            Some(stored) => {
                content.clone_into(stored);
                Ok(())
            }
            None => Err(MemoryStoreError::UnknownNote(id)),
        }
    }
}
