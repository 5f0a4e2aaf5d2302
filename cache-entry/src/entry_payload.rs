use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Number of leading bytes shown by the `Debug` output.
const DEBUG_PREVIEW_LEN: usize = 16;

/// The binary content of a loaded entry, together with a cursor.
///
/// The cursor is part of the payload's state: containers decode records by
/// reading through it, and [`Payload::deep_copy`] keeps it where it was.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Payload {
    /// The payload bytes.
    data: Vec<u8>,
    /// The current read/write position.
    position: usize,
}

impl Payload {
    /// Creates a payload with the cursor at the start.
    pub fn new(data: Vec<u8>) -> Self {
        Payload { data, position: 0 }
    }

    /// Creates a payload with the cursor at `position`, clamped to the length.
    pub fn with_position(data: Vec<u8>, position: usize) -> Self {
        let position = position.min(data.len());
        Payload { data, position }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor. Positions past the end are allowed; reads there return nothing.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Bytes left between the cursor and the end.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Allocates an independent buffer with the same bytes and cursor position.
    pub fn deep_copy(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        data.extend_from_slice(&self.data);
        Payload {
            data,
            position: self.position,
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::new(data)
    }
}

impl From<&[u8]> for Payload {
    fn from(data: &[u8]) -> Self {
        Payload::new(data.to_vec())
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = &self.data[..self.data.len().min(DEBUG_PREVIEW_LEN)];
        let ellipsis = if self.data.len() > DEBUG_PREVIEW_LEN { "..." } else { "" };
        f.debug_struct("Payload")
            .field("len", &self.data.len())
            .field("position", &self.position)
            .field("bytes", &format_args!("{}{ellipsis}", hex::encode(preview)))
            .finish()
    }
}

impl Read for Payload {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.data.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}

impl Write for Payload {
    /// Overwrites bytes at the cursor, growing the buffer when writing past the end.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let end = self
            .position
            .checked_add(buf.len())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Payload overflow"))?;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(buf);
        self.position = end;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for Payload {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(offset) => {
                self.position = usize::try_from(offset)
                    .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
                return Ok(offset);
            }
            SeekFrom::Current(offset) => (self.position as i64, offset),
            SeekFrom::End(offset) => (self.data.len() as i64, offset),
        };
        match base.checked_add(offset) {
            Some(target) if target >= 0 => {
                self.position = target as usize;
                Ok(target as u64)
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Seek before start of payload",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_advances_cursor() {
        let mut payload = Payload::new(vec![1, 2, 3, 4, 5]);
        let mut buf = [0u8; 3];
        assert_eq!(payload.read(&mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(payload.position(), 3);
        assert_eq!(payload.remaining(), 2);

        let mut rest = Vec::new();
        payload.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![4, 5]);
        assert_eq!(payload.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn write_overwrites_then_extends() {
        let mut payload = Payload::with_position(vec![9, 9, 9], 2);
        payload.write_all(&[1, 2, 3]).unwrap();
        assert_eq!(payload.as_slice(), &[9, 9, 1, 2, 3]);
        assert_eq!(payload.position(), 5);
    }

    #[test]
    fn seek_rejects_negative_positions() {
        let mut payload = Payload::new(vec![0; 8]);
        assert_eq!(payload.seek(SeekFrom::End(-2)).unwrap(), 6);
        assert_eq!(payload.seek(SeekFrom::Current(-6)).unwrap(), 0);
        let err = payload.seek(SeekFrom::Current(-1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(payload.position(), 0);
        assert_eq!(payload.seek(SeekFrom::Start(20)).unwrap(), 20);
        assert_eq!(payload.remaining(), 0);
    }

    #[test]
    fn with_position_clamps() {
        assert_eq!(Payload::with_position(vec![1, 2], 10).position(), 2);
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = Payload::with_position(vec![1, 2, 3], 1);
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);
        assert_ne!(copy.as_slice().as_ptr(), original.as_slice().as_ptr());

        copy.write_all(&[7]).unwrap();
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[1, 7, 3]);
    }

    #[test]
    fn debug_shows_hex_preview() {
        let payload = Payload::new(vec![0xde, 0xad, 0xbe, 0xef]);
        let rendered = format!("{payload:?}");
        assert!(rendered.contains("deadbeef"), "{rendered}");
        assert!(rendered.contains("len: 4"), "{rendered}");

        let long = Payload::new(vec![0u8; 40]);
        assert!(format!("{long:?}").contains("..."));
    }
}
