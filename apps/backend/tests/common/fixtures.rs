//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Create a validate request body.
pub fn validate_request(submitted: &str, reference: &str) -> serde_json::Value {
    json!({ "submitted": submitted, "reference": reference })
}

/// Create a compare request body.
pub fn compare_request(a: &str, b: &str) -> serde_json::Value {
    json!({ "a": a, "b": b })
}

/// Create an answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

pub fn quiz_path(id: Uuid) -> String {
    format!("/api/quiz/{}", id)
}

pub fn answer_path(id: Uuid) -> String {
    format!("/api/quiz/{}/answer", id)
}

pub fn next_path(id: Uuid) -> String {
    format!("/api/quiz/{}/next", id)
}

pub fn restart_path(id: Uuid) -> String {
    format!("/api/quiz/{}/restart", id)
}

pub fn summary_path(id: Uuid) -> String {
    format!("/api/quiz/{}/summary", id)
}

/// Small question bank in the bank file format.
pub fn sample_bank() -> &'static str {
    "\
ID: 10
Q: Escribe 'cancion' con tilde.
A: canción
R: Aguda terminada en n.

ID: 11
Q: ¿'tu' o 'tú'? Pronombre personal.
O: tu
O: tú
A: tú
"
}
