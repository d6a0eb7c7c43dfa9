use std::io::ErrorKind;

use rev_lines::{Error, RevLineReader, DEFAULT_CHUNK_SIZE};

use super::{numbered_lines, write_file};

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    match RevLineReader::open(dir.path().join("does-not-exist.log")) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), ErrorKind::NotFound),
        other => panic!("expected a not found error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "empty.log", b"");

    let mut reader = RevLineReader::open(&path).unwrap();
    assert_eq!(reader.position(), 0);
    assert_eq!(reader.read_line().ok(), Some(None));
    assert!(matches!(reader.read_line_or_eof(), Err(Error::EndOfFile)));
    assert_eq!(reader.read_line().ok(), Some(None));
}

#[test]
fn lines_come_last_to_first() {
    let dir = tempfile::tempdir().unwrap();
    let content = numbered_lines(500);
    let path = write_file(dir.path(), "numbered.log", &content);

    let mut reader = RevLineReader::open(&path).unwrap();
    let mut expected = 500;
    while let Some(line) = reader.read_line().unwrap() {
        expected -= 1;
        let prefix = format!("line {} ", expected);
        assert!(
            line.starts_with(prefix.as_bytes()),
            "expected {:?}, got {:?}",
            prefix,
            String::from_utf8_lossy(&line)
        );
        assert_eq!(line.last(), Some(&b'\n'));
    }
    assert_eq!(expected, 0);
}

#[test]
fn round_trip_with_various_chunk_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let mut content = numbered_lines(120);
    content.extend_from_slice(b"no separator at the end");
    let path = write_file(dir.path(), "round_trip.log", &content);

    for chunk_size in [1, 3, 16, 100, DEFAULT_CHUNK_SIZE, content.len(), content.len() + 1] {
        let file = std::fs::File::open(&path).unwrap();
        let mut reader = RevLineReader::with_chunk_size(chunk_size, file).unwrap();

        let mut lines = reader.read_lines().unwrap();
        assert_eq!(lines.len(), 121, "chunk size {}", chunk_size);
        assert_eq!(lines[0], b"no separator at the end");

        lines.reverse();
        assert_eq!(lines.concat(), content, "chunk size {}", chunk_size);
    }
}

#[test]
fn line_spanning_many_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let long_line = vec![b'z'; DEFAULT_CHUNK_SIZE * 3 + 17];

    let mut content = b"before\n".to_vec();
    content.extend_from_slice(&long_line);
    content.extend_from_slice(b"\nafter\n");
    let path = write_file(dir.path(), "long.log", &content);

    let mut reader = RevLineReader::open(&path).unwrap();
    assert_eq!(reader.read_line().unwrap(), Some(b"after\n".to_vec()));

    let line = reader.read_line().unwrap().unwrap();
    assert_eq!(line.len(), long_line.len() + 1);
    assert_eq!(&line[..long_line.len()], long_line.as_slice());

    assert_eq!(reader.read_line().unwrap(), Some(b"before\n".to_vec()));
    assert_eq!(reader.read_line().unwrap(), None);
}

#[test]
fn size_is_a_multiple_of_the_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let content = b"0123456\n".repeat(DEFAULT_CHUNK_SIZE / 8 * 2);
    assert_eq!(content.len() % DEFAULT_CHUNK_SIZE, 0);
    let path = write_file(dir.path(), "aligned.log", &content);

    let mut reader = RevLineReader::open(&path).unwrap();
    let lines = reader.read_lines().unwrap();

    assert_eq!(lines.len(), DEFAULT_CHUNK_SIZE / 8 * 2);
    assert!(lines.iter().all(|line| line == b"0123456\n"));
}

#[test]
fn crlf_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "windows.log", b"one\r\ntwo\r\nthree\r\n");

    let file = std::fs::File::open(&path).unwrap();
    let mut reader = RevLineReader::with_chunk_size(4, file).unwrap();
    reader.set_separator("\r\n").unwrap();

    let lines = reader.lines().collect::<rev_lines::Result<Vec<_>>>().unwrap();
    assert_eq!(lines, vec!["three\r\n", "two\r\n", "one\r\n"]);
}

#[test]
fn finds_the_most_recent_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "service.log",
        b"INFO start\nERROR disk full\nINFO retry\nERROR disk still full\nINFO done\n",
    );

    let mut reader = RevLineReader::open(&path).unwrap();
    let latest_error = reader
        .split(b"\n")
        .unwrap()
        .map(|line| line.unwrap())
        .find(|line| line.starts_with(b"ERROR"));

    assert_eq!(latest_error, Some(b"ERROR disk still full\n".to_vec()));
    // everything before the match is still there
    assert_eq!(reader.read_line().unwrap(), Some(b"INFO retry\n".to_vec()));
}
