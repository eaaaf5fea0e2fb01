use rstest::rstest;

use crate::{ReadOnlyStringStream, Stream, StreamError, StringStream, Whence};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn check_stream_is_dead(stream: &dyn Stream) {
    assert_eq!(stream.size(), 0, "closed/detached streams have no data");
    assert!(!stream.is_readable(), "closed/detached streams cannot be read");
    assert!(!stream.is_writable(), "closed/detached streams cannot be written to");
    assert!(!stream.is_seekable(), "closed/detached streams cannot be seeked");
    assert!(stream.eof());
    assert!(stream.to_bytes().is_empty());
    assert!(stream.metadata(None).is_none());
}

#[rstest]
#[case(&b""[..])]
#[case(&b"x"[..])]
#[case(&b"hello world"[..])]
#[case(&b"\x00\xff\x7f binary"[..])]
fn fresh_stream_reflects_input(#[case] input: &[u8]) {
    let stream = StringStream::new(input);
    assert_eq!(stream.size(), input.len());
    assert_eq!(stream.tell(), Ok(0));
    assert_eq!(stream.eof(), input.is_empty());
    assert_eq!(stream.to_bytes(), input);
}

#[test]
fn read() {
    init_logger();
    let mut stream = StringStream::new("hello world");
    assert!(stream.is_readable());

    // get_contents reads until the end, so the next call comes back empty
    assert_eq!(stream.get_contents().unwrap(), b"hello world");
    assert!(stream.get_contents().unwrap().is_empty());

    assert_eq!(stream.size(), 11);

    // the whole buffer is always rendered, whatever the pointer
    assert_eq!(stream.to_string(), "hello world");
    assert_eq!(stream.to_string(), "hello world");
}

#[test]
fn seeking() {
    init_logger();
    let mut stream = StringStream::new("hello world");
    assert!(stream.is_seekable());

    assert_eq!(stream.tell(), Ok(0));
    assert!(!stream.eof());

    assert_eq!(stream.read(5).unwrap(), b"hello");
    assert_eq!(stream.tell(), Ok(5));
    assert!(!stream.eof());

    assert_eq!(stream.get_contents().unwrap(), b" world");
    assert!(stream.eof());
    assert_eq!(stream.tell(), Ok(stream.size() as i64));

    stream.rewind().unwrap();
    assert_eq!(stream.tell(), Ok(0));

    stream.seek(2, Whence::Start).unwrap();
    assert_eq!(stream.tell(), Ok(2));
    stream.seek(3, Whence::Current).unwrap();
    assert_eq!(stream.tell(), Ok(5));
    stream.seek(2, Whence::End).unwrap();
    assert_eq!(stream.tell(), Ok(13));

    // an unknown whence does nothing, like fseek()
    stream.rewind().unwrap();
    stream.seek(2, Whence::default()).unwrap();
    stream.seek_raw(5, -1).unwrap();
    assert_eq!(stream.tell(), Ok(2));
}

#[test]
fn rewind_is_idempotent() {
    let mut stream = StringStream::new("hello world");
    stream.seek(7, Whence::Start).unwrap();
    for _ in 0..3 {
        stream.rewind().unwrap();
        assert_eq!(stream.tell(), Ok(0));
    }
}

#[test]
fn writing() {
    init_logger();
    let mut stream = StringStream::new("hello world");
    assert!(stream.is_writable());

    // append at the end
    stream.seek(0, Whence::End).unwrap();
    let suffix = b", isn't it a lovely day";
    assert_eq!(stream.write(suffix).unwrap(), suffix.len());
    let full = b"hello world, isn't it a lovely day";
    assert_eq!(stream.size(), full.len());
    assert_eq!(stream.to_bytes(), full);

    // overwrite the first byte to fix the capitalization
    stream.seek(0, Whence::Start).unwrap();
    assert_eq!(stream.write(b"H").unwrap(), 1);
    let full = b"Hello world, isn't it a lovely day";
    assert_eq!(stream.size(), full.len());
    assert_eq!(stream.to_bytes(), full);

    // multi-byte replacement, padding with DEL bytes
    stream.seek(0, Whence::Start).unwrap();
    assert_eq!(stream.write(b"Hey\x7f\x7f").unwrap(), 5);
    let full = b"Hey\x7f\x7f world, isn't it a lovely day";
    assert_eq!(stream.size(), full.len());
    assert_eq!(stream.to_bytes(), full);

    // replace and append in one go
    stream.seek(31, Whence::Start).unwrap();
    assert_eq!(stream.write(b"evening?").unwrap(), 8);
    let full = b"Hey\x7f\x7f world, isn't it a lovely evening?";
    assert_eq!(stream.size(), full.len());
    assert_eq!(stream.to_bytes(), full);
    assert_eq!(stream.tell(), Ok(full.len() as i64));
}

#[test]
fn overwrite_works_correctly() {
    let mut stream = StringStream::new("");
    stream.write(b"abc").unwrap();
    stream.write(b"def").unwrap();
    assert_eq!(stream.to_string(), "abcdef");
    stream.rewind().unwrap();
    stream.write(b"XXX").unwrap();
    assert_eq!(stream.to_string(), "XXXdef");
}

#[test]
fn eof_after_over_reading() {
    let mut stream = StringStream::new("hello world");
    assert!(!stream.eof());
    assert_eq!(stream.read(1_048_576).unwrap(), b"hello world");
    assert!(stream.eof());
}

#[test]
fn misc_functions() {
    let mut stream = StringStream::new("hello world");
    assert!(stream.metadata(None).is_none());
    assert!(stream.detach().is_none());
}

#[rstest]
#[case::close(true)]
#[case::detach(false)]
fn dead_stream(#[case] close: bool) {
    init_logger();
    let mut stream = StringStream::new("hello world");
    if close {
        stream.close();
    } else {
        let _ = stream.detach();
    }
    check_stream_is_dead(&stream);
    assert_eq!(stream.to_string(), "");
}

#[rstest]
#[case::tell("tell")]
#[case::seek("seek")]
#[case::rewind("rewind")]
#[case::write("write")]
#[case::read("read")]
#[case::get_contents("get_contents")]
fn operation_fails_after_close(#[case] operation: &'static str) {
    let mut stream = StringStream::new("hello world");
    stream.close();

    let error = match operation {
        "tell" => stream.tell().unwrap_err(),
        "seek" => stream.seek(0, Whence::Start).unwrap_err(),
        "rewind" => stream.rewind().unwrap_err(),
        "write" => stream.write(b"!").unwrap_err(),
        "read" => stream.read(1).unwrap_err(),
        "get_contents" => stream.get_contents().unwrap_err(),
        _ => unreachable!(),
    };

    assert!(error.is_unusable());
    assert_eq!(error.operation(), operation);
    assert_eq!(
        error.to_string(),
        format!("You cannot call `{operation}' on this stream because it's closed.")
    );

    // a failed call leaves the terminal values in place
    check_stream_is_dead(&stream);
}

#[test]
fn dead_read_only_stream_matches_writable_one() {
    let mut stream = ReadOnlyStringStream::new("hello world");
    stream.close();
    check_stream_is_dead(&stream);
    assert_eq!(stream.tell(), Err(StreamError::unusable("tell")));
    assert_eq!(stream.seek(1, Whence::Current), Err(StreamError::unusable("seek")));
}

#[test]
fn streams_work_behind_trait_objects() {
    init_logger();
    let mut streams: Vec<Box<dyn Stream>> = vec![
        Box::new(StringStream::new("abcdef")),
        Box::new(ReadOnlyStringStream::new("abcdef")),
    ];

    for stream in streams.iter_mut() {
        stream.seek(-2, Whence::End).unwrap();
        assert_eq!(stream.read(10).unwrap(), b"ef");
        assert!(stream.eof());
        stream.rewind().unwrap();
        assert_eq!(stream.get_contents().unwrap(), b"abcdef");
    }

    assert!(streams[0].write(b"!").is_ok());
    assert_eq!(streams[0].to_bytes(), b"abcdef!");
    assert!(!streams[1].write(b"!").unwrap_err().is_unusable());
    assert_eq!(streams[1].to_bytes(), b"abcdef");
}

#[test]
fn display_is_lossy_for_binary_data() {
    let stream = StringStream::new(vec![b'a', 0xff, b'b']);
    assert_eq!(stream.to_string(), "a\u{fffd}b");
    assert_eq!(stream.size(), 3);
}
