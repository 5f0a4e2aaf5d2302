use crate::{
    dirty_flags::DirtyFlags,
    entry_payload::Payload,
    error::{EntryError, Result},
    name_hash::{EntryName, NameHasher, NO_ID, NO_NAME},
};
use std::hash::{Hash, Hasher};

/// One logical file inside a cache archive.
///
/// An entry always knows its id and name fingerprint. Its payload is only
/// resident while the entry is loaded; containers commonly keep thousands of
/// unloaded entries around with just the index metadata and fetch payloads on
/// demand.
///
/// Two entries are equal when their ids are equal, regardless of name or
/// payload. The dirty flags tell the container's flush routine whether the
/// index record, the payload blob, or both have to be written again.
///
/// Mutation goes through [`FileEntry::loaded`], which hands out a
/// [`LoadedEntry`] view only when a payload is present. The one-shot setters
/// on `FileEntry` itself are shorthands for the same checks.
#[derive(Debug)]
pub struct FileEntry {
    /// Id within the owning container, [`NO_ID`] until assigned.
    id: i32,
    /// Name fingerprint, [`NO_NAME`] when unnamed.
    name: i32,
    /// Pending changes since the last flush.
    dirty: DirtyFlags,
    /// Present iff the entry is loaded.
    payload: Option<Payload>,
}

impl FileEntry {
    /// Creates an entry from index metadata; the payload is fetched later with [`FileEntry::load`].
    pub fn new_unloaded<'a>(id: i32, name: impl Into<EntryName<'a>>) -> Self {
        FileEntry {
            id,
            name: name.into().fingerprint(),
            dirty: DirtyFlags::empty(),
            payload: None,
        }
    }

    /// Creates a loaded entry. `id` may be [`NO_ID`] for entries the container
    /// has yet to insert.
    pub fn new_with_payload<'a>(
        id: i32,
        name: impl Into<EntryName<'a>>,
        payload: impl Into<Payload>,
    ) -> Self {
        FileEntry {
            id,
            name: name.into().fingerprint(),
            dirty: DirtyFlags::empty(),
            payload: Some(payload.into()),
        }
    }

    /// Creates a named entry awaiting an id.
    pub fn named<'a>(name: impl Into<EntryName<'a>>, payload: impl Into<Payload>) -> Self {
        Self::new_with_payload(NO_ID, name, payload)
    }

    /// Creates an unnamed entry awaiting an id.
    pub fn anonymous(payload: impl Into<Payload>) -> Self {
        Self::new_with_payload(NO_ID, NO_NAME, payload)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> i32 {
        self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.payload.is_some()
    }

    /// Returns a view over the entry that is only obtainable while loaded.
    pub fn loaded(&mut self) -> Result<LoadedEntry<'_>> {
        let FileEntry {
            id,
            name,
            dirty,
            payload,
        } = self;
        match payload {
            Some(payload) => Ok(LoadedEntry {
                id,
                name,
                dirty,
                payload,
            }),
            None => {
                tracing::debug!(id = *id, "access to nonloaded file");
                Err(EntryError::NotLoaded { id: *id })
            }
        }
    }

    pub fn set_id(&mut self, id: i32) -> Result<()> {
        self.loaded()?.set_id(id);
        Ok(())
    }

    pub fn set_name<'a>(&mut self, name: impl Into<EntryName<'a>>) -> Result<()> {
        self.loaded()?.set_name(name);
        Ok(())
    }

    pub fn payload(&self) -> Result<&Payload> {
        self.payload.as_ref().ok_or_else(|| {
            tracing::debug!(id = self.id, "payload read on nonloaded file");
            EntryError::NotLoaded { id: self.id }
        })
    }

    pub fn set_payload(&mut self, payload: impl Into<Payload>) -> Result<()> {
        self.loaded()?.set_payload(payload);
        Ok(())
    }

    /// Populates an unloaded entry. Loading is not a modification, so the dirty
    /// flags are left as they are.
    pub fn load(&mut self, payload: impl Into<Payload>) -> Result<()> {
        if self.payload.is_some() {
            tracing::debug!(id = self.id, "load on already loaded file");
            return Err(EntryError::AlreadyLoaded { id: self.id });
        }
        let payload = payload.into();
        tracing::trace!(id = self.id, len = payload.len(), "file loaded");
        self.payload = Some(payload);
        Ok(())
    }

    /// Releases the payload and hands it back. Normally only called by the
    /// owning container's eviction routine. Dirty flags survive the unload.
    pub fn unload(&mut self) -> Result<Payload> {
        let payload = self.payload.take().ok_or_else(|| {
            tracing::debug!(id = self.id, "unload on already unloaded file");
            EntryError::AlreadyUnloaded { id: self.id }
        })?;
        tracing::trace!(id = self.id, len = payload.len(), "file unloaded");
        Ok(payload)
    }

    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    pub fn is_metadata_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::METADATA)
    }

    pub fn is_data_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::DATA)
    }

    pub fn clear_metadata_dirty(&mut self) {
        self.dirty.remove(DirtyFlags::METADATA);
    }

    pub fn clear_data_dirty(&mut self) {
        self.dirty.remove(DirtyFlags::DATA);
    }

    /// Deep copy: same id and name, a freshly allocated payload (bytes and
    /// cursor) if loaded, and clear dirty flags.
    pub fn copy(&self) -> Self {
        FileEntry {
            id: self.id,
            name: self.name,
            dirty: DirtyFlags::empty(),
            payload: self.payload.as_ref().map(Payload::deep_copy),
        }
    }
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FileEntry {}

impl Hash for FileEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Mutable access to an entry whose payload is known to be present.
#[derive(Debug)]
pub struct LoadedEntry<'a> {
    id: &'a mut i32,
    name: &'a mut i32,
    dirty: &'a mut DirtyFlags,
    payload: &'a mut Payload,
}

impl LoadedEntry<'_> {
    pub fn id(&self) -> i32 {
        *self.id
    }

    /// Sets the id, marking metadata dirty only if it changed.
    pub fn set_id(&mut self, id: i32) {
        if *self.id != id {
            *self.id = id;
            *self.dirty |= DirtyFlags::METADATA;
        }
    }

    pub fn name(&self) -> i32 {
        *self.name
    }

    /// Sets the name, hashing display strings with the default hasher.
    pub fn set_name<'n>(&mut self, name: impl Into<EntryName<'n>>) {
        self.set_name_fingerprint(name.into().fingerprint());
    }

    /// Sets the name, hashing display strings with `hasher`.
    pub fn set_name_with<'n, H: NameHasher + ?Sized>(
        &mut self,
        name: impl Into<EntryName<'n>>,
        hasher: &H,
    ) {
        self.set_name_fingerprint(name.into().fingerprint_with(hasher));
    }

    fn set_name_fingerprint(&mut self, name: i32) {
        if *self.name != name {
            *self.name = name;
            *self.dirty |= DirtyFlags::METADATA;
        }
    }

    pub fn payload(&self) -> &Payload {
        &*self.payload
    }

    /// Cursor and content access for decoding in place. Does not touch the
    /// dirty flags; replacements that must be persisted go through
    /// [`LoadedEntry::set_payload`].
    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut *self.payload
    }

    /// Replaces the payload. A different payload marks both data and
    /// metadata dirty, since the index record describes the payload too; an
    /// equal one is a no-op.
    pub fn set_payload(&mut self, payload: impl Into<Payload>) {
        let payload = payload.into();
        if *self.payload == payload {
            return;
        }
        tracing::trace!(
            id = *self.id,
            old_len = self.payload.len(),
            new_len = payload.len(),
            "file payload replaced"
        );
        *self.payload = payload;
        *self.dirty |= DirtyFlags::DATA | DirtyFlags::METADATA;
    }
}
