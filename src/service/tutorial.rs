//! Tutorial operations: delegate to the store, turn absent rows into `NotFound`.

use crate::config::ApiSettings;
use crate::error::AppError;
use crate::model::{Tutorial, TutorialInput};
use crate::service::RequestValidator;
use crate::store::TutorialStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct TutorialService {
    store: Arc<dyn TutorialStore>,
    settings: ApiSettings,
}

impl TutorialService {
    pub fn new(store: Arc<dyn TutorialStore>, settings: ApiSettings) -> Self {
        Self { store, settings }
    }

    /// All tutorials, or those whose title contains `title` ignoring case.
    pub async fn list(&self, title: Option<&str>) -> Result<Vec<Tutorial>, AppError> {
        let rows = match title {
            None => self.store.find_all().await?,
            Some(t) => self.store.find_by_title_containing(t).await?,
        };
        Ok(rows)
    }

    pub async fn list_published(&self) -> Result<Vec<Tutorial>, AppError> {
        Ok(self.store.find_by_published(true).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Tutorial, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Insert a new tutorial. `published` from the body is ignored; new tutorials start unpublished.
    pub async fn create(&self, input: TutorialInput) -> Result<Tutorial, AppError> {
        RequestValidator::validate(&input, &self.settings)?;
        let row = self
            .store
            .save(Tutorial::draft(input.title, input.description))
            .await?;
        tracing::info!(id = ?row.id, "created tutorial");
        Ok(row)
    }

    /// Overwrite title, description and published on an existing tutorial.
    pub async fn update(&self, id: i64, input: TutorialInput) -> Result<Tutorial, AppError> {
        let mut current = self.get(id).await?;
        RequestValidator::validate(&input, &self.settings)?;
        current.apply(input);
        let row = self.store.save(current).await?;
        tracing::info!(id, published = row.published, "updated tutorial");
        Ok(row)
    }

    /// Delete by id without checking that it exists.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "deleted tutorial");
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), AppError> {
        self.store.delete_all().await?;
        tracing::info!("deleted all tutorials");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}
