//! OpenAPI document for the tutorial routes.

use crate::handlers::tutorial;
use crate::model::{Tutorial, TutorialInput};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Tutorial API", description = "CRUD over tutorials"),
    paths(
        tutorial::test,
        tutorial::list,
        tutorial::read,
        tutorial::create,
        tutorial::update,
        tutorial::delete,
        tutorial::delete_all,
        tutorial::list_published
    ),
    components(schemas(Tutorial, TutorialInput)),
    tags((name = "Tutorial", description = "The Tutorial API"))
)]
pub struct ApiDoc;

/// Document with the API prefix as its server, so paths resolve against the mounted routes.
pub fn openapi(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !api_prefix.is_empty() {
        doc.servers = Some(vec![Server::new(api_prefix)]);
    }
    doc
}
