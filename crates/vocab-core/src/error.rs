#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Malformed entry: {0}")]
    MalformedEntry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    #[error("Viewport store read before initialize")]
    NotInitialized,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("No route for path: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid format: expected an array of word records")]
    NotAnArray,

    #[error("Record {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: EntryError,
    },
}
