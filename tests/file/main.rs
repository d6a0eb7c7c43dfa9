use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

mod helpers;
mod reader;

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

/// `count` numbered lines, each one a bit longer than the one before.
fn numbered_lines(count: usize) -> Vec<u8> {
    let mut content = Vec::new();
    for i in 0..count {
        content.extend_from_slice(format!("line {} {}\n", i, "#".repeat(i % 50)).as_bytes());
    }
    content
}
