use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpellError {
    /// Lookup was attempted before any words were loaded.
    #[error("Dictionary not loaded")]
    DictionaryNotLoaded,

    #[error("Failed to read dictionary at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = SpellError> = std::result::Result<T, E>;
