pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Stylesheet parsing failed: {0}")]
    Parse(String),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("File enumeration failed: {0}")]
    Enumeration(String),

    #[error("Watch failed: {0}")]
    Watch(#[from] notify::Error),
}
