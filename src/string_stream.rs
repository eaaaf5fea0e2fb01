//! In-memory, seekable, read-write byte stream.
//!
//! The stream owns a plain byte buffer and a signed read/write pointer. The
//! pointer is never bounds-checked by `seek`; `read` and `write` clamp it to
//! the buffer instead, so a pointer before the start or past the end degrades
//! to empty reads and appending writes.
//!
//! Closing or detaching discards the buffer for good. Afterwards every
//! positional or transfer operation fails with [`StreamError::Unusable`],
//! while `size`, `eof`, `to_bytes` and the capability queries keep answering
//! with zero/empty values.

use std::convert::Infallible;
use std::fmt;

use crate::error::{Result, StreamError};
use crate::stream::{Metadata, Stream, Whence};

mod core;
pub mod ffi;

/// Lifecycle of a stream. A dead stream has no buffer to point into.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Live { data: Vec<u8>, pointer: i64 },
    Dead,
}

/// String based stream, ideal for exercising stream consumers in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringStream {
    state: State,
}

impl StringStream {
    fn live(&self, operation: &'static str) -> Result<(&[u8], i64)> {
        match &self.state {
            State::Live { data, pointer } => Ok((data, *pointer)),
            State::Dead => Err(StreamError::unusable(operation)),
        }
    }

    fn live_mut(&mut self, operation: &'static str) -> Result<(&mut Vec<u8>, &mut i64)> {
        match &mut self.state {
            State::Live { data, pointer } => Ok((data, pointer)),
            State::Dead => Err(StreamError::unusable(operation)),
        }
    }
}

impl Default for StringStream {
    fn default() -> Self {
        StringStream::new(Vec::new())
    }
}

impl From<Vec<u8>> for StringStream {
    fn from(data: Vec<u8>) -> Self {
        StringStream::new(data)
    }
}

impl From<&[u8]> for StringStream {
    fn from(data: &[u8]) -> Self {
        StringStream::new(data)
    }
}

impl From<String> for StringStream {
    fn from(data: String) -> Self {
        StringStream::new(data)
    }
}

impl From<&str> for StringStream {
    fn from(data: &str) -> Self {
        StringStream::new(data)
    }
}

impl fmt::Display for StringStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Stream for StringStream {
    fn size(&self) -> usize {
        StringStream::size(self)
    }

    fn tell(&self) -> Result<i64> {
        StringStream::tell(self)
    }

    fn eof(&self) -> bool {
        StringStream::eof(self)
    }

    fn is_seekable(&self) -> bool {
        StringStream::is_seekable(self)
    }

    fn is_readable(&self) -> bool {
        StringStream::is_readable(self)
    }

    fn is_writable(&self) -> bool {
        StringStream::is_writable(self)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<()> {
        StringStream::seek(self, offset, whence)
    }

    fn rewind(&mut self) -> Result<()> {
        StringStream::rewind(self)
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        StringStream::read(self, length)
    }

    fn get_contents(&mut self) -> Result<Vec<u8>> {
        StringStream::get_contents(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        StringStream::write(self, data)
    }

    fn close(&mut self) {
        StringStream::close(self)
    }

    fn detach(&mut self) -> Option<Infallible> {
        StringStream::detach(self)
    }

    fn metadata(&self, key: Option<&str>) -> Option<Metadata> {
        StringStream::metadata(self, key)
    }

    fn to_bytes(&self) -> Vec<u8> {
        StringStream::to_bytes(self)
    }
}
