mod note;

pub use note::{Note, NotePayload};
