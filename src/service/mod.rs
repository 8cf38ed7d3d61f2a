//! TutorialService: request-level operations over a `TutorialStore`.

mod tutorial;
mod validation;
pub use tutorial::TutorialService;
pub use validation::RequestValidator;
