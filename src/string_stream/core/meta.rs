use std::convert::Infallible;

use super::super::{State, StringStream};
use super::to_offset;
use crate::error::Result;
use crate::stream::Metadata;

impl StringStream {
    /// Create a live stream holding a copy of `data`, positioned at offset 0.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        log::debug!("string stream created with {} bytes", data.len());

        StringStream {
            state: State::Live { data, pointer: 0 },
        }
    }

    /// Get the byte length of the stream. A dead stream has size 0.
    #[inline(always)]
    pub fn size(&self) -> usize {
        match &self.state {
            State::Live { data, .. } => data.len(),
            State::Dead => 0,
        }
    }

    /// Get the current position of the read/write pointer.
    #[inline(always)]
    pub fn tell(&self) -> Result<i64> {
        let (_, pointer) = self.live("tell")?;
        Ok(pointer)
    }

    /// Check if the pointer is at or past the end.
    #[inline(always)]
    pub fn eof(&self) -> bool {
        match &self.state {
            State::Live { data, pointer } => *pointer >= to_offset(data.len()),
            State::Dead => true,
        }
    }

    #[inline(always)]
    pub fn is_live(&self) -> bool {
        matches!(self.state, State::Live { .. })
    }

    #[inline(always)]
    pub fn is_seekable(&self) -> bool {
        self.is_live()
    }

    #[inline(always)]
    pub fn is_readable(&self) -> bool {
        self.is_live()
    }

    #[inline(always)]
    pub fn is_writable(&self) -> bool {
        self.is_live()
    }

    /// No metadata is modeled for in-memory streams.
    pub fn metadata(&self, _key: Option<&str>) -> Option<Metadata> {
        None
    }

    /// Discard the buffer. The stream stays unusable afterwards.
    pub fn close(&mut self) {
        if self.is_live() {
            log::debug!("closing string stream of {} bytes", self.size());
        }
        self.state = State::Dead;
    }

    /// Same as [`close`](Self::close); there is never an underlying handle
    /// to hand back.
    pub fn detach(&mut self) -> Option<Infallible> {
        if self.is_live() {
            log::debug!("detaching string stream of {} bytes", self.size());
        }
        self.state = State::Dead;
        None
    }

    /// Borrow the whole buffer regardless of the pointer.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.state {
            State::Live { data, .. } => data,
            State::Dead => &[],
        }
    }

    /// Copy of the whole buffer. Empty once dead.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}
