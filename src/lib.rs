mod error;
mod read_only;
mod stream;
mod string_stream;

pub use error::*;
pub use read_only::*;
pub use stream::*;
pub use string_stream::*;
pub use string_stream::ffi::*;

#[cfg(test)]
mod stream_tests;
