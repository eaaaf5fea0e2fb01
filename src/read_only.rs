//! String based stream that can be read and seeked but never written to.

use std::convert::Infallible;
use std::fmt;

use crate::error::{Result, StreamError, READ_ONLY};
use crate::stream::{Metadata, Stream, Whence};
use crate::string_stream::StringStream;

/// Read-only view over a [`StringStream`].
///
/// Reading, seeking and the close/detach lifecycle are the inner stream's.
/// Writes are refused whether the stream is live or not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadOnlyStringStream {
    inner: StringStream,
}

impl ReadOnlyStringStream {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        ReadOnlyStringStream {
            inner: StringStream::new(data),
        }
    }

    /// Always false, independent of liveness.
    #[inline(always)]
    pub fn is_writable(&self) -> bool {
        false
    }

    /// Always fails with an illegal operation error.
    pub fn write(&mut self, _value: &[u8]) -> Result<usize> {
        Err(StreamError::illegal("write", READ_ONLY))
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn tell(&self) -> Result<i64> {
        self.inner.tell()
    }

    pub fn eof(&self) -> bool {
        self.inner.eof()
    }

    pub fn is_seekable(&self) -> bool {
        self.inner.is_seekable()
    }

    pub fn is_readable(&self) -> bool {
        self.inner.is_readable()
    }

    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<()> {
        self.inner.seek(offset, whence)
    }

    pub fn rewind(&mut self) -> Result<()> {
        self.inner.rewind()
    }

    pub fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        self.inner.read(length)
    }

    pub fn get_contents(&mut self) -> Result<Vec<u8>> {
        self.inner.get_contents()
    }

    pub fn close(&mut self) {
        self.inner.close()
    }

    pub fn detach(&mut self) -> Option<Infallible> {
        self.inner.detach()
    }

    pub fn metadata(&self, key: Option<&str>) -> Option<Metadata> {
        self.inner.metadata(key)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    pub fn into_inner(self) -> StringStream {
        self.inner
    }
}

impl From<StringStream> for ReadOnlyStringStream {
    fn from(inner: StringStream) -> Self {
        ReadOnlyStringStream { inner }
    }
}

impl From<Vec<u8>> for ReadOnlyStringStream {
    fn from(data: Vec<u8>) -> Self {
        ReadOnlyStringStream::new(data)
    }
}

impl From<&[u8]> for ReadOnlyStringStream {
    fn from(data: &[u8]) -> Self {
        ReadOnlyStringStream::new(data)
    }
}

impl From<String> for ReadOnlyStringStream {
    fn from(data: String) -> Self {
        ReadOnlyStringStream::new(data)
    }
}

impl From<&str> for ReadOnlyStringStream {
    fn from(data: &str) -> Self {
        ReadOnlyStringStream::new(data)
    }
}

impl fmt::Display for ReadOnlyStringStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Stream for ReadOnlyStringStream {
    fn size(&self) -> usize {
        ReadOnlyStringStream::size(self)
    }

    fn tell(&self) -> Result<i64> {
        ReadOnlyStringStream::tell(self)
    }

    fn eof(&self) -> bool {
        ReadOnlyStringStream::eof(self)
    }

    fn is_seekable(&self) -> bool {
        ReadOnlyStringStream::is_seekable(self)
    }

    fn is_readable(&self) -> bool {
        ReadOnlyStringStream::is_readable(self)
    }

    fn is_writable(&self) -> bool {
        ReadOnlyStringStream::is_writable(self)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<()> {
        ReadOnlyStringStream::seek(self, offset, whence)
    }

    fn rewind(&mut self) -> Result<()> {
        ReadOnlyStringStream::rewind(self)
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        ReadOnlyStringStream::read(self, length)
    }

    fn get_contents(&mut self) -> Result<Vec<u8>> {
        ReadOnlyStringStream::get_contents(self)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        ReadOnlyStringStream::write(self, data)
    }

    fn close(&mut self) {
        ReadOnlyStringStream::close(self)
    }

    fn detach(&mut self) -> Option<Infallible> {
        ReadOnlyStringStream::detach(self)
    }

    fn metadata(&self, key: Option<&str>) -> Option<Metadata> {
        ReadOnlyStringStream::metadata(self, key)
    }

    fn to_bytes(&self) -> Vec<u8> {
        ReadOnlyStringStream::to_bytes(self)
    }
}
