use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntervueError {
    #[error("{0}")]
    Validation(String),

    #[error("Question generation failed: {0}")]
    Generation(String),

}

pub type Result<T> = std::result::Result<T, IntervueError>;
