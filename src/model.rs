//! Tutorial entity and request body.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `tutorials` table. `id` is `None` until the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Tutorial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl Tutorial {
    /// Unsaved tutorial; creation always starts unpublished.
    pub fn draft(title: Option<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            title,
            description,
            published: false,
        }
    }

    /// Overwrite every mutable field from the request body. The id is kept.
    pub fn apply(&mut self, input: TutorialInput) {
        self.title = input.title;
        self.description = input.description;
        self.published = input.published;
    }
}

/// Body of POST and PUT. A client-sent `id` is ignored; missing `published` reads as false.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TutorialInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Query string of GET /tutorials.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}
