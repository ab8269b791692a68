//! Notes REST API — CRUD endpoints backing the note list view.

use actix_web::{web, HttpResponse, Responder};

use crate::AppState;
use crate::models::NotePayload;

/// List all notes. Order is the store's default; clients must not
/// assume sorting.
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error fetching notes"
            }))
        }
    }
}

/// Create a note. Both fields must be non-empty after trimming.
async fn create_note(data: web::Data<AppState>, body: web::Json<NotePayload>) -> impl Responder {
    if let Err(msg) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
    }

    match data.db.create_note(&body.title, &body.text) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => {
            log::error!("Failed to create note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error creating note"
            }))
        }
    }
}

/// Update a note's title and text; the timestamp is refreshed.
/// Validation matches create.
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    let note_id = path.into_inner();

    if let Err(msg) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
    }

    match data.db.update_note(note_id, &body.title, &body.text) {
        Ok(Some(note)) => HttpResponse::Ok().json(note),
        Ok(None) => {
            log::error!("Failed to update note {}: no such note", note_id);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update the note"
            }))
        }
        Err(e) => {
            log::error!("Failed to update note {}: {}", note_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update the note"
            }))
        }
    }
}

/// Delete a note by id
async fn delete_note(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match data.db.delete_note(note_id) {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Note deleted successfully"
        })),
        Ok(false) => {
            log::error!("Failed to delete note {}: no such note", note_id);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error deleting note"
            }))
        }
        Err(e) => {
            log::error!("Failed to delete note {}: {}", note_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error deleting note"
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("/create", web::post().to(create_note))
            .route("/update/{id}", web::put().to(update_note))
            .route("/delete/{id}", web::delete().to(delete_note)),
    );
}
