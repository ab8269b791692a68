//! Note table operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::super::{Database, DbResult};
use crate::models::Note;

impl Database {
    /// All notes in store default order. Callers must not assume sorting.
    pub fn list_notes(&self) -> DbResult<Vec<Note>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare("SELECT id, title, text, updated_at FROM notes")?;
        let notes = stmt
            .query_map([], |row| Self::row_to_note(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(notes)
    }

    /// Look up a single note by id
    pub fn get_note(&self, id: i64) -> DbResult<Option<Note>> {
        let conn = self.conn()?;

        let note = conn
            .query_row(
                "SELECT id, title, text, updated_at FROM notes WHERE id = ?1",
                [id],
                |row| Self::row_to_note(row),
            )
            .optional()?;

        Ok(note)
    }

    /// Insert a new note. The store assigns the id and the timestamp.
    pub fn create_note(&self, title: &str, text: &str) -> DbResult<Note> {
        let conn = self.conn()?;
        let now = Utc::now();

        conn.execute(
            "INSERT INTO notes (title, text, updated_at) VALUES (?1, ?2, ?3)",
            params![title, text, now.to_rfc3339()],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Note {
            id,
            title: title.to_string(),
            text: text.to_string(),
            updated_at: now,
        })
    }

    /// Replace both fields and refresh the timestamp; the id is preserved.
    /// Returns `Ok(None)` when the id does not exist.
    pub fn update_note(&self, id: i64, title: &str, text: &str) -> DbResult<Option<Note>> {
        let conn = self.conn()?;
        let now = Utc::now();

        let rows_affected = conn.execute(
            "UPDATE notes SET title = ?1, text = ?2, updated_at = ?3 WHERE id = ?4",
            params![title, text, now.to_rfc3339(), id],
        )?;

        if rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Note {
            id,
            title: title.to_string(),
            text: text.to_string(),
            updated_at: now,
        }))
    }

    /// Hard delete. Returns `Ok(false)` when no row matched.
    pub fn delete_note(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }

    /// Number of stored notes
    pub fn count_notes(&self) -> DbResult<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        let updated_at_str: String = row.get(3)?;

        Ok(Note {
            id: row.get(0)?,
            title: row.get(1)?,
            text: row.get(2)?,
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .unwrap()
                .with_timezone(&Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;
    use tempfile::tempdir;

    fn open_test_db(dir: &tempfile::TempDir) -> Database {
        let db_path = dir.path().join("notes.db");
        Database::new(db_path.to_str().unwrap()).expect("Failed to initialize database")
    }

    #[test]
    fn test_create_then_list() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        let created = db
            .create_note("Groceries", "Eggs, flour, butter")
            .expect("Failed to create note");
        assert!(created.id > 0);

        let notes = db.list_notes().expect("Failed to list notes");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, created.id);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].text, "Eggs, flour, butter");
    }

    #[test]
    fn test_get_note() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        let created = db
            .create_note("Ideas", "A better mousetrap")
            .expect("Failed to create note");

        let found = db.get_note(created.id).expect("Failed to get note");
        assert_eq!(found.map(|n| n.title), Some("Ideas".to_string()));

        let missing = db.get_note(9999).expect("Failed to get note");
        assert!(missing.is_none());
    }

    #[test]
    fn test_update_refreshes_timestamp_and_preserves_id() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        let created = db
            .create_note("Draft", "First version")
            .expect("Failed to create note");

        std::thread::sleep(std::time::Duration::from_millis(5));

        let updated = db
            .update_note(created.id, "Draft v2", "Second version")
            .expect("Failed to update note")
            .expect("Note should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Draft v2");
        assert!(updated.updated_at > created.updated_at);

        // The stored row should reflect the update
        let stored = db
            .get_note(created.id)
            .expect("Failed to get note")
            .expect("Note should exist");
        assert_eq!(stored.text, "Second version");
        assert!(stored.updated_at > created.updated_at);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        let result = db
            .update_note(42, "Nobody", "Home")
            .expect("Failed to update note");
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_note() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        let created = db
            .create_note("Temporary", "Delete me")
            .expect("Failed to create note");

        assert!(db.delete_note(created.id).expect("Failed to delete note"));
        assert!(db.list_notes().expect("Failed to list notes").is_empty());

        // Deleting again reports that nothing matched
        assert!(!db.delete_note(created.id).expect("Failed to delete note"));
    }

    #[test]
    fn test_count_notes() {
        let dir = tempdir().unwrap();
        let db = open_test_db(&dir);

        assert_eq!(db.count_notes().expect("Failed to count"), 0);
        db.create_note("One", "1").expect("Failed to create note");
        db.create_note("Two", "2").expect("Failed to create note");
        assert_eq!(db.count_notes().expect("Failed to count"), 2);
    }
}
