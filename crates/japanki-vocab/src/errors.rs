use crate::category::Category;
use thiserror::Error;

pub type VocabResult<T> = Result<T, VocabError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("Invalid category: '{0}'")]
    InvalidCategory(String),

    #[error("No vocabulary entries in the selected categories: {requested:?}")]
    EmptySelection { requested: Vec<Category> },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
