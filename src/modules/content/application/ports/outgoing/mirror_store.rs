#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("Mirror I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mirror unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed local cache holding one entry per collection.
///
/// Calls are synchronous relative to the mutation that triggers them.
pub trait MirrorStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError>;
    fn write(&self, key: &str, value: &str) -> Result<(), MirrorError>;
    fn remove(&self, key: &str) -> Result<(), MirrorError>;
}
