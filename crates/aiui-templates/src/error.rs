use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template override {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}
