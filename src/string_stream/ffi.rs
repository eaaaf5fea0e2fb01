#![allow(clippy::missing_safety_doc)]

use super::StringStream;
use crate::error::Result;
use crate::read_only::ReadOnlyStringStream;
use crate::stream::Stream;
use std::{cmp, ptr, slice};

/// Status: the call succeeded.
pub const STATUS_OK: i32 = 0;
/// Status: the stream refused the operation (e.g. writing a read-only stream).
pub const STATUS_ILLEGAL_OPERATION: i32 = 1;
/// Status: the stream has been closed or detached.
pub const STATUS_UNUSABLE: i32 = 2;

/// Opaque handle handed out to PHP.
pub struct StreamHandle(Box<dyn Stream>);

unsafe fn bytes<'a>(data: *const u8, len: usize) -> &'a [u8] {
    if data.is_null() || len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(data, len) }
    }
}

fn status<T>(result: Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(error) => {
            log::debug!("{}", error);
            error.code()
        }
    }
}

fn into_handle(stream: Box<dyn Stream>) -> *mut StreamHandle {
    Box::into_raw(Box::new(StreamHandle(stream)))
}

/// Create a new writable StringStream holding a copy of `data`.
#[no_mangle]
pub unsafe extern "C" fn string_stream_new(data: *const u8, len: usize) -> *mut StreamHandle {
    let stream = unsafe { StringStream::new(bytes(data, len)) };
    into_handle(Box::new(stream))
}

/// Create a new ReadOnlyStringStream holding a copy of `data`.
#[no_mangle]
pub unsafe extern "C" fn string_stream_new_read_only(data: *const u8, len: usize) -> *mut StreamHandle {
    let stream = unsafe { ReadOnlyStringStream::new(bytes(data, len)) };
    into_handle(Box::new(stream))
}

/// Free a stream handle.
#[no_mangle]
pub unsafe extern "C" fn string_stream_free(stream: *mut StreamHandle) {
    if !stream.is_null() {
        unsafe {
            let _ = Box::from_raw(stream);
        }
    }
}

/// Get the current size.
#[no_mangle]
pub unsafe extern "C" fn string_stream_size(stream: *const StreamHandle) -> usize {
    match unsafe { stream.as_ref() } {
        Some(handle) => handle.0.size(),
        None => 0,
    }
}

/// Check if at EOF.
#[no_mangle]
pub unsafe extern "C" fn string_stream_eof(stream: *const StreamHandle) -> bool {
    match unsafe { stream.as_ref() } {
        Some(handle) => handle.0.eof(),
        None => true,
    }
}

#[no_mangle]
pub unsafe extern "C" fn string_stream_is_seekable(stream: *const StreamHandle) -> bool {
    unsafe { stream.as_ref() }.map_or(false, |handle| handle.0.is_seekable())
}

#[no_mangle]
pub unsafe extern "C" fn string_stream_is_readable(stream: *const StreamHandle) -> bool {
    unsafe { stream.as_ref() }.map_or(false, |handle| handle.0.is_readable())
}

#[no_mangle]
pub unsafe extern "C" fn string_stream_is_writable(stream: *const StreamHandle) -> bool {
    unsafe { stream.as_ref() }.map_or(false, |handle| handle.0.is_writable())
}

/// Get the current offset into `out`.
#[no_mangle]
pub unsafe extern "C" fn string_stream_tell(stream: *const StreamHandle, out: *mut i64) -> i32 {
    let Some(handle) = (unsafe { stream.as_ref() }) else {
        return STATUS_UNUSABLE;
    };

    status(handle.0.tell().map(|pointer| {
        if !out.is_null() {
            unsafe { *out = pointer };
        }
    }))
}

/// Seek with a raw `SEEK_*` value. Unknown values are ignored.
#[no_mangle]
pub unsafe extern "C" fn string_stream_seek(stream: *mut StreamHandle, offset: i64, whence: i32) -> i32 {
    let Some(handle) = (unsafe { stream.as_mut() }) else {
        return STATUS_UNUSABLE;
    };

    status(handle.0.seek_raw(offset, whence))
}

/// Seek to the beginning of the stream.
#[no_mangle]
pub unsafe extern "C" fn string_stream_rewind(stream: *mut StreamHandle) -> i32 {
    match unsafe { stream.as_mut() } {
        Some(handle) => status(handle.0.rewind()),
        None => STATUS_UNUSABLE,
    }
}

/// Read up to `length` bytes into `buffer`.
///
/// The number of bytes actually copied is stored in `out_read`; the pointer
/// still advances by `length`.
#[no_mangle]
pub unsafe extern "C" fn string_stream_read(
    stream: *mut StreamHandle,
    buffer: *mut u8,
    length: usize,
    out_read: *mut usize,
) -> i32 {
    let Some(handle) = (unsafe { stream.as_mut() }) else {
        return STATUS_UNUSABLE;
    };

    status(handle.0.read(length).map(|data| {
        let copied = if buffer.is_null() { 0 } else { cmp::min(data.len(), length) };
        if copied > 0 {
            unsafe { ptr::copy_nonoverlapping(data.as_ptr(), buffer, copied) };
        }
        if !out_read.is_null() {
            unsafe { *out_read = copied };
        }
    }))
}

/// Write `len` bytes from `data`. The count written is stored in `out_written`.
#[no_mangle]
pub unsafe extern "C" fn string_stream_write(
    stream: *mut StreamHandle,
    data: *const u8,
    len: usize,
    out_written: *mut usize,
) -> i32 {
    let Some(handle) = (unsafe { stream.as_mut() }) else {
        return STATUS_UNUSABLE;
    };

    let data = unsafe { bytes(data, len) };
    status(handle.0.write(data).map(|written| {
        if !out_written.is_null() {
            unsafe { *out_written = written };
        }
    }))
}

/// Copy up to `capacity` bytes of the whole buffer into `buffer`.
/// Returns the full buffer size so the caller can retry with more room.
#[no_mangle]
pub unsafe extern "C" fn string_stream_copy_contents(
    stream: *const StreamHandle,
    buffer: *mut u8,
    capacity: usize,
) -> usize {
    let Some(handle) = (unsafe { stream.as_ref() }) else {
        return 0;
    };

    let data = handle.0.to_bytes();
    let copied = cmp::min(data.len(), capacity);
    if copied > 0 && !buffer.is_null() {
        unsafe { ptr::copy_nonoverlapping(data.as_ptr(), buffer, copied) };
    }
    data.len()
}

/// Close the stream. The handle must still be freed.
#[no_mangle]
pub unsafe extern "C" fn string_stream_close(stream: *mut StreamHandle) {
    if let Some(handle) = unsafe { stream.as_mut() } {
        handle.0.close();
    }
}

/// Detach the stream. In-memory streams have no resource to return.
#[no_mangle]
pub unsafe extern "C" fn string_stream_detach(stream: *mut StreamHandle) {
    if let Some(handle) = unsafe { stream.as_mut() } {
        let _ = handle.0.detach();
    }
}
