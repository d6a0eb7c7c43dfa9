use std::io::ErrorKind;

use rev_lines::{for_each_line, read_lines, with_reader, Error};

use super::write_file;

#[test]
fn read_lines_of_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "list.txt", b"a||b||c");

    assert_eq!(
        read_lines(&path, b"||").unwrap(),
        vec![b"c".to_vec(), b"b||".to_vec(), b"a||".to_vec()]
    );
}

#[test]
fn read_lines_of_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_lines(dir.path().join("nope.txt"), b"\n").unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == ErrorKind::NotFound));
}

#[test]
fn for_each_line_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "each.txt", b"x\ny\nz\n");
    let mut seen = Vec::new();

    for_each_line(&path, b"\n", |line| {
        seen.push(line);
        Ok::<(), Error>(())
    })
    .unwrap();

    assert_eq!(seen, vec![b"z\n".to_vec(), b"y\n".to_vec(), b"x\n".to_vec()]);
}

#[derive(Debug)]
enum VisitError {
    Read(Error),
    Stop,
}

impl From<Error> for VisitError {
    fn from(err: Error) -> Self {
        VisitError::Read(err)
    }
}

#[test]
fn for_each_line_visitor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "stop.txt", b"x\ny\nz\n");
    let mut visited = 0;

    let result = for_each_line(&path, b"\n", |_line| {
        visited += 1;
        if visited == 2 {
            Err(VisitError::Stop)
        } else {
            Ok(())
        }
    });

    assert!(matches!(result, Err(VisitError::Stop)));
    assert_eq!(visited, 2);
}

#[test]
fn for_each_line_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = for_each_line(dir.path().join("nope.txt"), b"\n", |_line| {
        Ok::<(), VisitError>(())
    });
    assert!(matches!(result, Err(VisitError::Read(Error::Io(_)))));
}

#[test]
fn with_reader_returns_body_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "body.txt", b"first\nsecond\nthird\n");

    let last_two = with_reader(&path, |reader| {
        Ok::<_, Error>((reader.read_line()?, reader.read_line()?))
    })
    .unwrap();

    assert_eq!(
        last_two,
        (Some(b"third\n".to_vec()), Some(b"second\n".to_vec()))
    );
}

#[test]
fn with_reader_body_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "single.txt", b"only");

    let result = with_reader(&path, |reader| {
        reader.read_line_or_eof()?;
        reader.read_line_or_eof()
    });
    assert!(matches!(result, Err(Error::EndOfFile)));
}
