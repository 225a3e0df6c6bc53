use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_marks, upsert_mark};

pub fn init_marks_router() -> Router<AppState> {
    Router::new().route("/", get(get_marks).post(upsert_mark))
}
