use std::ops::Range;

use super::super::StringStream;
use super::{clamp, to_offset};
use crate::error::Result;

/// Bytes of a `len`-byte buffer covered by `[pointer, pointer + length)`.
fn span(pointer: i64, length: usize, len: usize) -> Range<usize> {
    let start = clamp(pointer, len);
    let end = clamp(pointer.saturating_add(to_offset(length)), len);
    start..end.max(start)
}

impl StringStream {
    /// Read up to `length` bytes at the current pointer.
    ///
    /// Fewer bytes come back when the buffer runs out, but the pointer always
    /// advances by the requested `length`.
    pub fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let (data, pointer) = self.live_mut("read")?;

        let range = span(*pointer, length, data.len());
        let result = data[range].to_vec();
        *pointer = pointer.saturating_add(to_offset(length));

        log::trace!("read {} of {} requested bytes", result.len(), length);
        Ok(result)
    }

    /// Read everything from the pointer to the end, leaving the pointer at
    /// the end.
    pub fn get_contents(&mut self) -> Result<Vec<u8>> {
        let (data, pointer) = self.live_mut("get_contents")?;

        let start = clamp(*pointer, data.len());
        let result = data[start..].to_vec();
        *pointer = to_offset(data.len());

        log::trace!("read {} remaining bytes", result.len());
        Ok(result)
    }

    /// Write bytes at the current pointer and return how many were written.
    ///
    /// At or past the end the bytes are appended. Otherwise they overwrite in
    /// place and extend the buffer with whatever does not fit. Either way the
    /// pointer ends up at the new end of the buffer.
    pub fn write(&mut self, value: &[u8]) -> Result<usize> {
        let (data, pointer) = self.live_mut("write")?;

        let len = data.len();
        if *pointer >= to_offset(len) {
            data.extend_from_slice(value);
        } else {
            let range = span(*pointer, value.len(), len);
            data.splice(range, value.iter().copied());
        }
        *pointer = to_offset(data.len());

        log::trace!("wrote {} bytes, size is now {}", value.len(), data.len());
        Ok(value.len())
    }
}
