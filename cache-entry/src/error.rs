use thiserror::Error;

/// Represents the state-machine violations a [`FileEntry`](crate::FileEntry) can report.
///
/// Every variant is a contract violation by the calling container (an entry used
/// before its payload was fetched, or loaded/unloaded twice). None of them are
/// retryable; they carry the entry id so the offending record can be located.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// A metadata or payload accessor was used while the entry has no payload.
    #[error("Using nonloaded file (id {id})")]
    NotLoaded { id: i32 },
    /// `load` was called on an entry that already holds a payload.
    #[error("File {id} is already loaded")]
    AlreadyLoaded { id: i32 },
    /// `unload` was called on an entry that holds no payload.
    #[error("File {id} is already unloaded")]
    AlreadyUnloaded { id: i32 },
}

pub type Result<T> = std::result::Result<T, EntryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entry() {
        assert_eq!(
            EntryError::NotLoaded { id: 4 }.to_string(),
            "Using nonloaded file (id 4)"
        );
        assert_eq!(
            EntryError::AlreadyUnloaded { id: -1 }.to_string(),
            "File -1 is already unloaded"
        );
    }
}
