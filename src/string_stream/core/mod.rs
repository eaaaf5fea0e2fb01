mod meta;
mod position;
mod access;

/// Widen a buffer length to pointer arithmetic, saturating at `i64::MAX`.
#[inline(always)]
pub(super) fn to_offset(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Pin a pointer into `0..=len`.
#[inline(always)]
pub(super) fn clamp(pointer: i64, len: usize) -> usize {
    if pointer <= 0 {
        0
    } else {
        usize::try_from(pointer).map_or(len, |pointer| pointer.min(len))
    }
}
