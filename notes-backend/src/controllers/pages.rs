//! Server-rendered note list — the first paint reads straight from the
//! store instead of going through the HTTP API.

use actix_web::{web, HttpResponse, Responder};

use crate::AppState;
use crate::models::Note;
use crate::ui::page::note_color;

async fn index(data: web::Data<AppState>) -> impl Responder {
    // A store failure renders the empty list; the cause stays in the log
    let notes = match data.db.list_notes() {
        Ok(notes) => notes,
        Err(e) => {
            log::error!("Failed to fetch notes for page render: {}", e);
            Vec::new()
        }
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&notes))
}

fn render_page(notes: &[Note]) -> String {
    let mut body = String::new();

    if notes.is_empty() {
        body.push_str("    <p>No notes available. Create one!</p>\n");
    } else {
        for note in notes {
            body.push_str(&format!(
                "    <article style=\"background-color: {}\">\n      <h2>{}</h2>\n      <p>{}</p>\n      <time>Last updated: {}</time>\n    </article>\n",
                note_color(note.id),
                escape_html(&note.title),
                escape_html(&note.text),
                note.updated_at.format("%B %e, %Y %H:%M"),
            ));
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Notes</title>\n</head>\n<body>\n  <header>\n    <h1>Notes</h1>\n  </header>\n  <main>\n{}  </main>\n</body>\n</html>\n",
        body
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
}
