//! Note form modal — a small state machine over closed and open states,
//! with a derived valid/invalid sub-state of the open state.

use crate::models::Note;

/// Cosmetic animation phase derived from the open/closed transition.
/// Carries no semantic contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Initial,
    Visible,
    Leaving,
}

impl AnimationPhase {
    pub fn as_class(&self) -> &'static str {
        match self {
            AnimationPhase::Initial => "scale-0",
            AnimationPhase::Visible => "scale-100 opacity-100",
            AnimationPhase::Leaving => "scale-95 opacity-0",
        }
    }
}

/// Values handed to the caller's submit path on a valid submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSubmission {
    pub title: String,
    pub text: String,
    /// Present when the modal was opened for an existing note.
    pub editing_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NoteModal {
    open: bool,
    title: String,
    text: String,
    editing_id: Option<i64>,
    animation: AnimationPhase,
}

impl NoteModal {
    pub fn new() -> Self {
        Self {
            open: false,
            title: String::new(),
            text: String::new(),
            editing_id: None,
            animation: AnimationPhase::Initial,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn animation_class(&self) -> &'static str {
        self.animation.as_class()
    }

    /// Open with blank fields for a new note. Always resets field state,
    /// including leftovers from a prior edit.
    pub fn open_for_add(&mut self) {
        self.title.clear();
        self.text.clear();
        self.editing_id = None;
        self.open = true;
        self.animation = AnimationPhase::Visible;
    }

    /// Open pre-populated from an existing note.
    pub fn open_for_edit(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.text = note.text.clone();
        self.editing_id = Some(note.id);
        self.open = true;
        self.animation = AnimationPhase::Visible;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Both fields non-empty after trimming. The submit button is only
    /// enabled while this holds.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.text.trim().is_empty()
    }

    /// Submit the form. A no-op returning `None` while closed or invalid;
    /// when valid, returns the submission, clears field state, and closes.
    pub fn submit(&mut self) -> Option<NoteSubmission> {
        if !self.open || !self.is_valid() {
            return None;
        }

        let submission = NoteSubmission {
            title: std::mem::take(&mut self.title),
            text: std::mem::take(&mut self.text),
            editing_id: self.editing_id,
        };

        self.close();
        Some(submission)
    }

    /// Explicit cancel. Closes through the same path as submit.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// A pointer event outside the modal's bounds closes it.
    pub fn handle_outside_click(&mut self) {
        if self.open {
            self.close();
        }
    }

    fn close(&mut self) {
        self.open = false;
        self.editing_id = None;
        self.animation = AnimationPhase::Leaving;
    }
}

impl Default for NoteModal {
    fn default() -> Self {
        Self::new()
    }
}
