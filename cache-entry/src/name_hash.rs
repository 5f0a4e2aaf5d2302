/// Id value meaning "not yet assigned"; the container assigns one on insert.
pub const NO_ID: i32 = -1;
/// Name fingerprint meaning "unnamed".
pub const NO_NAME: i32 = -1;

/// Maps a display name into the fingerprint space of a container's name index.
///
/// Implemented for any `Fn(&str) -> i32`, so a container with a different
/// index hash can pass its own function wherever a hasher is accepted.
pub trait NameHasher {
    fn hash_name(&self, name: &str) -> i32;
}

impl<F> NameHasher for F
where
    F: Fn(&str) -> i32,
{
    fn hash_name(&self, name: &str) -> i32 {
        self(name)
    }
}

/// The default name fingerprint: `h = 31 * h + unit` over the UTF-16 code
/// units of the name, wrapping on overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JavaStringHasher;

impl NameHasher for JavaStringHasher {
    fn hash_name(&self, name: &str) -> i32 {
        name.encode_utf16()
            .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
    }
}

/// Hashes `name` with the default [`JavaStringHasher`].
pub fn name_hash(name: &str) -> i32 {
    JavaStringHasher.hash_name(name)
}

/// A name as supplied by a caller: either an already computed fingerprint or
/// the display string it is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryName<'a> {
    Fingerprint(i32),
    Display(&'a str),
}

impl EntryName<'_> {
    /// Resolves the name with the default hasher.
    pub fn fingerprint(&self) -> i32 {
        self.fingerprint_with(&JavaStringHasher)
    }

    /// Resolves the name with an injected hasher.
    pub fn fingerprint_with<H: NameHasher + ?Sized>(&self, hasher: &H) -> i32 {
        match *self {
            EntryName::Fingerprint(value) => value,
            EntryName::Display(name) => hasher.hash_name(name),
        }
    }
}

impl From<i32> for EntryName<'_> {
    fn from(value: i32) -> Self {
        EntryName::Fingerprint(value)
    }
}

impl<'a> From<&'a str> for EntryName<'a> {
    fn from(name: &'a str) -> Self {
        EntryName::Display(name)
    }
}

impl<'a> From<&'a String> for EntryName<'a> {
    fn from(name: &'a String) -> Self {
        EntryName::Display(name.as_str())
    }
}
