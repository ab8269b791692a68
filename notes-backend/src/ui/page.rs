//! Page controller — client-side state for the note list view.
//!
//! Every mutation goes through the API and is followed by a full list
//! re-fetch, so the displayed list always reflects a consistent store
//! snapshot. Last re-fetch wins across concurrent clients.

use crate::models::Note;
use crate::ui::client::{ApiError, NotesApi};
use crate::ui::modal::{NoteModal, NoteSubmission};

/// Display color for a note, keyed off its id so it stays stable across
/// re-fetches. Six digits drawn from the light hex alphabet `BCDEF`.
pub fn note_color(id: i64) -> String {
    const LETTERS: [char; 5] = ['B', 'C', 'D', 'E', 'F'];

    let mut state = (id as u64) ^ 0x9e37_79b9_7f4a_7c15;
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let idx = ((state >> 33) % LETTERS.len() as u64) as usize;
        color.push(LETTERS[idx]);
    }

    color
}

pub struct PageController<A: NotesApi> {
    api: A,
    notes: Vec<Note>,
    editing_note: Option<Note>,
    modal: NoteModal,
}

impl<A: NotesApi> PageController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notes: Vec::new(),
            editing_note: None,
            modal: NoteModal::new(),
        }
    }

    /// Start from a server-rendered first paint's note list.
    pub fn with_notes(api: A, notes: Vec<Note>) -> Self {
        Self {
            api,
            notes,
            editing_note: None,
            modal: NoteModal::new(),
        }
    }

    /// Displayed notes, in API response order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn editing_note(&self) -> Option<&Note> {
        self.editing_note.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn modal(&self) -> &NoteModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut NoteModal {
        &mut self.modal
    }

    /// Fetch the full list and replace local state.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.notes = self.api.list().await?;
        Ok(())
    }

    /// Open the modal with blank fields for a new note.
    pub fn open_add(&mut self) {
        self.editing_note = None;
        self.modal.open_for_add();
    }

    /// Open the modal pre-populated from an existing note.
    pub fn open_edit(&mut self, note: Note) {
        self.modal.open_for_edit(&note);
        self.editing_note = Some(note);
    }

    /// Close the modal without submitting.
    pub fn close_modal(&mut self) {
        self.modal.cancel();
        self.editing_note = None;
    }

    /// A pointer event outside the modal's bounds closes it.
    pub fn handle_outside_click(&mut self) {
        self.modal.handle_outside_click();
        self.editing_note = None;
    }

    /// Submit the modal form: create (no editing id) or update, then
    /// re-fetch the whole list. A no-op while the form is invalid.
    /// Failures are logged; local state stays unchanged.
    pub async fn submit_modal(&mut self) {
        let Some(submission) = self.modal.submit() else {
            return;
        };
        self.editing_note = None;

        if let Err(e) = self.save_note(submission).await {
            log::error!("Failed to save note: {}", e);
        }
    }

    async fn save_note(&mut self, submission: NoteSubmission) -> Result<(), ApiError> {
        match submission.editing_id {
            Some(id) => {
                self.api
                    .update(id, &submission.title, &submission.text)
                    .await?;
            }
            None => {
                self.api.create(&submission.title, &submission.text).await?;
            }
        }

        self.refresh().await
    }

    /// Delete a note, then re-fetch the whole list. Failures are logged;
    /// local state stays unchanged.
    pub async fn delete_note(&mut self, id: i64) {
        if let Err(e) = self.try_delete(id).await {
            log::error!("Failed to delete note {}: {}", id, e);
        }
    }

    async fn try_delete(&mut self, id: i64) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the HTTP API. Clones share state so tests
    /// can inspect it after handing one to the controller.
    #[derive(Clone)]
    struct FakeApi {
        notes: Arc<Mutex<Vec<Note>>>,
        next_id: Arc<Mutex<i64>>,
        fail: Arc<AtomicBool>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                notes: Arc::new(Mutex::new(Vec::new())),
                next_id: Arc::new(Mutex::new(1)),
                fail: Arc::new(AtomicBool::new(false)),
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(ApiError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: "fake".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NotesApi for FakeApi {
        async fn list(&self) -> Result<Vec<Note>, ApiError> {
            self.check()?;
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create(&self, title: &str, text: &str) -> Result<Note, ApiError> {
            self.check()?;
            let mut next_id = self.next_id.lock().unwrap();
            let note = Note {
                id: *next_id,
                title: title.to_string(),
                text: text.to_string(),
                updated_at: Utc::now(),
            };
            *next_id += 1;
            self.notes.lock().unwrap().push(note.clone());
            Ok(note)
        }

        async fn update(&self, id: i64, title: &str, text: &str) -> Result<Note, ApiError> {
            self.check()?;
            let mut notes = self.notes.lock().unwrap();
            let note = notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| ApiError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: "fake".to_string(),
                })?;
            note.title = title.to_string();
            note.text = text.to_string();
            note.updated_at = Utc::now();
            Ok(note.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.check()?;
            self.notes.lock().unwrap().retain(|n| n.id != id);
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_add_flow_refetches_list() {
        let api = FakeApi::new();
        let mut page = PageController::new(api.clone());

        page.open_add();
        assert!(page.is_modal_open());

        page.modal_mut().set_title("Groceries");
        page.modal_mut().set_text("Eggs and flour");
        page.submit_modal().await;

        assert!(!page.is_modal_open());
        assert_eq!(page.notes().len(), 1);
        assert_eq!(page.notes()[0].title, "Groceries");
    }

    #[actix_web::test]
    async fn test_edit_flow_updates_and_refetches() {
        let api = FakeApi::new();
        let mut page = PageController::new(api.clone());

        page.open_add();
        page.modal_mut().set_title("Draft");
        page.modal_mut().set_text("First version");
        page.submit_modal().await;

        let note = page.notes()[0].clone();
        page.open_edit(note.clone());
        assert_eq!(page.editing_note().map(|n| n.id), Some(note.id));
        assert_eq!(page.modal().title(), "Draft");

        page.modal_mut().set_text("Second version");
        page.submit_modal().await;

        assert!(page.editing_note().is_none());
        assert_eq!(page.notes().len(), 1);
        assert_eq!(page.notes()[0].text, "Second version");
    }

    #[actix_web::test]
    async fn test_delete_refetches_instead_of_local_removal() {
        let api = FakeApi::new();
        let mut page = PageController::new(api.clone());

        page.open_add();
        page.modal_mut().set_title("One");
        page.modal_mut().set_text("1");
        page.submit_modal().await;
        page.open_add();
        page.modal_mut().set_title("Two");
        page.modal_mut().set_text("2");
        page.submit_modal().await;

        let first_id = page.notes()[0].id;
        page.delete_note(first_id).await;

        assert_eq!(page.notes().len(), 1);
        assert_eq!(page.notes()[0].title, "Two");
        // The surviving entry matches what the store returns, not a local edit
        assert_eq!(page.notes(), &api.notes.lock().unwrap()[..]);
    }

    #[actix_web::test]
    async fn test_invalid_submit_touches_neither_api_nor_list() {
        let api = FakeApi::new();
        let mut page = PageController::new(api.clone());

        page.open_add();
        page.modal_mut().set_title("   ");
        page.modal_mut().set_text("Body");
        page.submit_modal().await;

        assert!(page.is_modal_open());
        assert!(page.notes().is_empty());
        assert!(api.notes.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_failed_save_leaves_local_state_unchanged() {
        let api = FakeApi::new();
        let mut page = PageController::new(api.clone());

        page.open_add();
        page.modal_mut().set_title("Doomed");
        page.modal_mut().set_text("Never lands");

        api.fail.store(true, Ordering::SeqCst);
        page.submit_modal().await;

        // The modal closed on submit, but the list never changed
        assert!(!page.is_modal_open());
        assert!(page.notes().is_empty());
    }

    #[actix_web::test]
    async fn test_with_notes_seeds_first_paint_state() {
        let api = FakeApi::new();
        let seeded = vec![Note {
            id: 10,
            title: "From the server".to_string(),
            text: "First paint".to_string(),
            updated_at: Utc::now(),
        }];

        let page = PageController::with_notes(api, seeded);
        assert_eq!(page.notes().len(), 1);
        assert!(!page.is_modal_open());
    }

    #[test]
    fn test_note_color_is_stable_and_well_formed() {
        let color = note_color(42);
        assert_eq!(color, note_color(42));
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color.chars().skip(1).all(|c| "BCDEF".contains(c)));
    }

    #[test]
    fn test_note_colors_vary_across_ids() {
        let distinct: std::collections::HashSet<String> =
            (1..=20).map(note_color).collect();
        assert!(distinct.len() > 1);
    }
}
