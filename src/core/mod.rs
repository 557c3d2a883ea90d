pub mod etl;
pub mod pipeline;
pub mod prompt;
pub mod responder;

pub use crate::domain::model::{Record, TransformResult};
pub use crate::domain::ports::{CompletionClient, Pipeline, Storage};
pub use crate::utils::error::Result;
