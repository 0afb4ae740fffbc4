//! Tests for in-memory IO implementations.

use std::io::{Read, Write};

use crate::{InMemorySink, InMemorySource, InputProvider, OutputTarget};

#[test]
fn in_memory_source_reopens_from_start() {
    let src = InMemorySource::new("id", "1 2 3");
    assert_eq!(src.id(), "id");

    for _ in 0..2 {
        let mut buf = String::new();
        src.open().unwrap().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "1 2 3");
    }
}

#[test]
fn in_memory_sink_appends_across_opens() {
    let sink = InMemorySink::new("out");
    assert_eq!(sink.id(), "out");

    sink.open().unwrap().write_all(b"abc").unwrap();
    sink.open().unwrap().write_all(b"def").unwrap();
    assert_eq!(sink.contents(), b"abcdef".to_vec());
}

#[test]
fn in_memory_sink_clones_share_buffer() {
    let sink = InMemorySink::new("out");
    let other = sink.clone();

    other.open().unwrap().write_all(b"shared").unwrap();
    assert_eq!(sink.contents_string(), "shared");

    sink.clear();
    assert!(other.contents().is_empty());
}
