use super::super::StringStream;
use super::to_offset;
use crate::error::Result;
use crate::stream::Whence;

impl StringStream {
    /// Seek to a position in the stream.
    ///
    /// The resulting pointer is not range-checked: it may land before the
    /// start or past the end.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<()> {
        let (data, pointer) = self.live_mut("seek")?;

        let target = match whence {
            Whence::Start => offset,
            Whence::Current => pointer.saturating_add(offset),
            Whence::End => to_offset(data.len()).saturating_add(offset),
        };
        log::trace!("seek {:?} {} -> pointer {} (was {})", whence, offset, target, pointer);
        *pointer = target;

        Ok(())
    }

    /// Seek to the beginning of the stream.
    pub fn rewind(&mut self) -> Result<()> {
        let (_, pointer) = self.live_mut("rewind")?;
        *pointer = 0;
        Ok(())
    }
}
