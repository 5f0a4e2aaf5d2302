use bitflags::bitflags;

bitflags! {
    /// Tracks which parts of an entry diverged from what was last persisted.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// The index record (id, name) must be rewritten.
        const METADATA = 0x01;
        /// The payload blob must be rewritten.
        const DATA = 0x02;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let mut flags = DirtyFlags::default();
        assert!(flags.is_empty());

        flags |= DirtyFlags::DATA;
        assert!(flags.contains(DirtyFlags::DATA));
        assert!(!flags.contains(DirtyFlags::METADATA));

        flags.insert(DirtyFlags::METADATA);
        flags.remove(DirtyFlags::DATA);
        assert_eq!(flags, DirtyFlags::METADATA);
    }
}
