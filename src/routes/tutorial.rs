//! Tutorial routes. `/tutorials/published` is a static segment and wins over `/tutorials/:id`.

use crate::handlers::tutorial::{
    create, delete as delete_handler, delete_all, list, list_published, read, test, update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn tutorial_routes(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test))
        .route("/tutorials", get(list).post(create).delete(delete_all))
        .route("/tutorials/published", get(list_published))
        .route(
            "/tutorials/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
