//! # cache-entry
//!
//! `cache-entry` models a single file inside a cache archive: an id, a name
//! fingerprint, an optional payload and the dirty tracking a container needs
//! to decide what to write back.
//!
//! ## Features
//! - Entries created from index metadata and loaded on demand
//! - Separate metadata and data dirty flags
//! - Pluggable name hashing, matching the container's name index
//! - Payloads with a cursor, usable with any `Read`/`Write`/`Seek` codec
//!
//! No I/O, compression or on-disk format lives here; those belong to the
//! container that owns the entries.
//!
//! ### Example: Loading, Editing and Flushing an Entry
//! ```rust
//! use cache_entry::{FileEntry, name_hash};
//!
//! // Index parsing knows only the id and name fingerprint
//! let mut entry = FileEntry::new_unloaded(5, name_hash("logo.png"));
//! assert!(entry.payload().is_err());
//!
//! // Payload bytes are fetched later
//! entry.load(vec![1, 2, 3]).unwrap();
//! assert!(!entry.is_data_dirty());
//!
//! entry.set_payload(vec![4, 5, 6]).unwrap();
//! if entry.is_data_dirty() {
//!     // ... rewrite the payload blob ...
//!     entry.clear_data_dirty();
//! }
//! if entry.is_metadata_dirty() {
//!     // ... rewrite the index record ...
//!     entry.clear_metadata_dirty();
//! }
//! ```
//!
//! ## Thread Safety
//! Entries carry no internal synchronization. The owning container must make
//! sure at most one operation mutates an entry at a time.

mod dirty_flags;
mod entry_payload;
mod error;
mod file_entry;
mod name_hash;

pub use dirty_flags::DirtyFlags;
pub use entry_payload::Payload;
pub use error::{EntryError, Result};
pub use file_entry::{FileEntry, LoadedEntry};
pub use name_hash::{name_hash, EntryName, JavaStringHasher, NameHasher, NO_ID, NO_NAME};
