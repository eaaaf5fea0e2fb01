//! Capability contract shared by every stream variant.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::error::{Result, StreamError};

/// Raw whence value: set position equal to offset.
pub const SEEK_SET: i32 = 0;
/// Raw whence value: set position to current location plus offset.
pub const SEEK_CUR: i32 = 1;
/// Raw whence value: set position to end-of-stream plus offset.
pub const SEEK_END: i32 = 2;

/// Stream metadata. No stream in this crate models any.
pub type Metadata = BTreeMap<String, String>;

/// Reference point a seek offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whence {
    #[default]
    Start,
    Current,
    End,
}

impl Whence {
    /// Decode a conventional `SEEK_*` value.
    pub fn from_raw(whence: i32) -> Option<Self> {
        match whence {
            SEEK_SET => Some(Whence::Start),
            SEEK_CUR => Some(Whence::Current),
            SEEK_END => Some(Whence::End),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Whence::Start => SEEK_SET,
            Whence::Current => SEEK_CUR,
            Whence::End => SEEK_END,
        }
    }
}

/// Read/write/seek access to a byte sequence.
///
/// Positional and transfer operations fail with
/// [`StreamError::Unusable`](crate::StreamError::Unusable) once the stream
/// has been closed or detached. `size`, `eof`, `to_bytes`, `metadata` and the
/// capability queries never fail and report zero/empty values instead.
pub trait Stream {
    /// Byte length of the stream, `0` once dead.
    fn size(&self) -> usize;

    /// Current position of the read/write pointer.
    fn tell(&self) -> Result<i64>;

    /// Whether the pointer is at or past the end. Always true once dead.
    fn eof(&self) -> bool;

    fn is_seekable(&self) -> bool;
    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;

    /// Move the pointer. The result is not bounds-checked.
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<()>;

    /// Seek with a raw `SEEK_*` value. Unknown values leave the pointer
    /// untouched, matching `fseek()`. A dead stream still fails.
    fn seek_raw(&mut self, offset: i64, whence: i32) -> Result<()> {
        if !self.is_seekable() {
            return Err(StreamError::unusable("seek"));
        }

        match Whence::from_raw(whence) {
            Some(whence) => self.seek(offset, whence),
            None => {
                log::debug!("ignoring seek with unknown whence {}", whence);
                Ok(())
            }
        }
    }

    /// Seek to the beginning of the stream.
    fn rewind(&mut self) -> Result<()>;

    /// Read up to `length` bytes. The pointer advances by `length` even when
    /// fewer bytes were available.
    fn read(&mut self, length: usize) -> Result<Vec<u8>>;

    /// Everything from the pointer to the end.
    fn get_contents(&mut self) -> Result<Vec<u8>>;

    /// Write `data` at the pointer, returning the number of bytes written.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    fn close(&mut self);

    /// Separate the underlying resource. In-memory streams hold none, so this
    /// never yields a handle.
    fn detach(&mut self) -> Option<Infallible>;

    fn metadata(&self, key: Option<&str>) -> Option<Metadata>;

    /// The whole buffer regardless of the pointer. Empty once dead.
    fn to_bytes(&self) -> Vec<u8>;
}
