use std::fs;

use extractor_engine::{ensure_output_dir, write_atomic};

#[test]
fn write_atomic_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();

    let path = write_atomic(dir.path(), "out.pdf", b"%PDF-stub").unwrap();

    assert_eq!(path, dir.path().join("out.pdf"));
    assert_eq!(fs::read(&path).unwrap(), b"%PDF-stub");
}

#[test]
fn write_atomic_replaces_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();

    write_atomic(dir.path(), "out.pdf", b"first").unwrap();
    let path = write_atomic(dir.path(), "out.pdf", b"second").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"second");
}

#[test]
fn write_atomic_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports");

    let path = write_atomic(&nested, "out.pdf", b"content").unwrap();

    assert!(path.exists());
}

#[test]
fn ensure_output_dir_rejects_a_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("occupied");
    fs::write(&file, b"x").unwrap();

    assert!(ensure_output_dir(&file).is_err());
}
