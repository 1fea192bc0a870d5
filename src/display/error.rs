use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Chart could not be rendered: {0}")]
    Render(String),
}
