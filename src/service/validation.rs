//! Request body checks. Off unless enabled in [`ApiSettings`].

use crate::config::ApiSettings;
use crate::error::AppError;
use crate::model::TutorialInput;

pub struct RequestValidator;

impl RequestValidator {
    /// With `require_title`, a missing or blank title is rejected. Nothing else is checked.
    pub fn validate(input: &TutorialInput, settings: &ApiSettings) -> Result<(), AppError> {
        if settings.require_title {
            let blank = input.title.as_deref().map(str::trim).map_or(true, str::is_empty);
            if blank {
                return Err(AppError::Validation("title is required".into()));
            }
        }
        Ok(())
    }
}
