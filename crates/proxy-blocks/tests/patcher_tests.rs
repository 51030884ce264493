//! Integration tests for file-level block patching.

use pretty_assertions::assert_eq;
use proxy_blocks::{Error, Extraction, Removal, Snapshot, extract, remove, upsert};
use proxy_fs::{backup::backup_path, io};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup(initial: Option<&str>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg");
    if let Some(content) = initial {
        fs::write(&path, content).unwrap();
    }
    (dir, path)
}

fn read(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_append_then_replace_scenario() {
    let (_dir, path) = setup(Some("A\nB\n\nC\n"));

    upsert(&path, "X", "X\nval=1\n").unwrap();
    assert_eq!(read(&path), "A\nB\n\nC\nX\nval=1\n");

    upsert(&path, "X", "X\nval=2\n").unwrap();
    assert_eq!(read(&path), "A\nB\n\nC\nX\nval=2\n");
}

#[test]
fn test_upsert_is_idempotent() {
    let (_dir, path) = setup(Some("# user settings\nfoo=bar\n"));

    upsert(&path, "# proxyctl", "# proxyctl\nproxy=http://h:1\n").unwrap();
    let first = read(&path);
    upsert(&path, "# proxyctl", "# proxyctl\nproxy=http://h:1\n").unwrap();

    assert_eq!(read(&path), first);
}

#[test]
fn test_upsert_preserves_surrounding_content() {
    let (_dir, path) = setup(Some(
        "before=1\n# proxyctl\nproxy=http://old:1\n\nafter=2\nlast=3\n",
    ));

    upsert(&path, "# proxyctl", "# proxyctl\nproxy=http://new:2\n").unwrap();

    assert_eq!(
        read(&path),
        "before=1\n# proxyctl\nproxy=http://new:2\n\nafter=2\nlast=3\n"
    );
}

#[test]
fn test_first_write_creates_file_with_block() {
    let (_dir, path) = setup(None);

    let report = upsert(&path, "X", "X\nval=1\n").unwrap();

    assert_eq!(read(&path), "X\nval=1\n");
    assert_eq!(report.path, path);
    assert!(report.backup.is_none());
    assert!(!backup_path(&path).exists());
}

#[test]
fn test_backup_holds_pre_upsert_content() {
    let (_dir, path) = setup(Some("A\n"));

    let report = upsert(&path, "X", "X\nval=1\n").unwrap();

    assert_eq!(report.backup, Some(backup_path(&path)));
    assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "A\n");
}

#[test]
fn test_backup_is_one_generation_deep() {
    let (_dir, path) = setup(Some("A\n"));

    upsert(&path, "X", "X\nval=1\n").unwrap();
    upsert(&path, "X", "X\nval=2\n").unwrap();

    assert_eq!(
        fs::read_to_string(backup_path(&path)).unwrap(),
        "A\nX\nval=1\n"
    );
}

#[test]
fn test_extract_round_trip() {
    let (_dir, path) = setup(Some("A\n\nB\n"));
    let block = "# m\nkey=value\nother=1\n";

    upsert(&path, "# m", block).unwrap();

    assert_eq!(extract(&path, "# m").unwrap(), Extraction::Found(block.into()));
}

#[test]
fn test_extract_distinguishes_not_found_cases() {
    let (_dir, path) = setup(None);
    assert_eq!(extract(&path, "X").unwrap(), Extraction::FileMissing);

    fs::write(&path, "A\n").unwrap();
    assert_eq!(extract(&path, "X").unwrap(), Extraction::MarkerMissing);
}

#[test]
fn test_extract_has_no_side_effects() {
    let (_dir, path) = setup(Some("X\nv\n"));

    extract(&path, "X").unwrap();

    assert!(!backup_path(&path).exists());
    assert_eq!(read(&path), "X\nv\n");
}

#[test]
fn test_internal_blank_line_is_truncated_on_extract() {
    let (_dir, path) = setup(None);

    upsert(&path, "X", "X\nfirst\n\nsecond\n").unwrap();

    assert_eq!(
        extract(&path, "X").unwrap(),
        Extraction::Found("X\nfirst\n".into())
    );
}

#[test]
fn test_duplicate_marker_leaves_second_copy_untouched() {
    let (_dir, path) = setup(Some("X\none\n\nX\ntwo\n"));

    upsert(&path, "X", "X\nnew\n").unwrap();

    assert_eq!(read(&path), "X\nnew\n\nX\ntwo\n");
}

#[test]
fn test_remove_restores_pre_append_content() {
    let (_dir, path) = setup(Some("A\nB\n\nC\n"));
    upsert(&path, "X", "X\nval=1\n").unwrap();

    let removal = remove(&path, "X").unwrap();

    assert!(matches!(removal, Removal::Removed(_)));
    assert_eq!(read(&path), "A\nB\n\nC\n");
}

#[test]
fn test_non_utf8_file_round_trips_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".bashrc");
    let original = b"# caf\xe9 latin-1 comment\nalias ll='ls -l'\n";
    fs::write(&path, original).unwrap();

    upsert(&path, "# proxyctl", "# proxyctl\nexport http_proxy=\"http://h:1\"\n").unwrap();
    assert_eq!(
        extract(&path, "# proxyctl").unwrap(),
        Extraction::Found("# proxyctl\nexport http_proxy=\"http://h:1\"\n".into())
    );
    assert_eq!(fs::read(backup_path(&path)).unwrap(), original);

    assert!(matches!(remove(&path, "# proxyctl").unwrap(), Removal::Removed(_)));
    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn test_remove_after_unterminated_last_line_leaves_newline() {
    let (_dir, path) = setup(Some("A"));

    upsert(&path, "X", "X\nval=1\n").unwrap();
    remove(&path, "X").unwrap();

    assert_eq!(read(&path), "A\n");
}

#[test]
fn test_remove_missing_file() {
    let (_dir, path) = setup(None);
    assert_eq!(remove(&path, "X").unwrap(), Removal::FileMissing);
    assert!(!path.exists());
}

#[test]
fn test_read_failure_leaves_nothing_behind() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be read.
    let path = dir.path().join("cfg");
    fs::create_dir(&path).unwrap();

    let err = upsert(&path, "X", "X\n").unwrap_err();

    assert!(matches!(err, Error::ReadFailure { .. }));
    assert!(!backup_path(&path).exists());
}

#[test]
fn test_backup_failure_leaves_original_untouched() {
    let (_dir, path) = setup(Some("A\n"));
    // Occupy the backup slot with a non-empty directory so it cannot be replaced.
    fs::create_dir(backup_path(&path)).unwrap();
    fs::write(backup_path(&path).join("keep"), "x").unwrap();

    let err = upsert(&path, "X", "X\n").unwrap_err();

    assert!(matches!(err, Error::BackupFailure { .. }));
    assert_eq!(read(&path), "A\n");
}

#[test]
fn test_write_failure_is_reported_and_original_restored() {
    let (_dir, path) = setup(Some("A\n"));
    fs::create_dir(io::temp_path(&path)).unwrap();

    let err = upsert(&path, "X", "X\nval=1\n").unwrap_err();

    match err {
        Error::WriteFailure { restore, .. } => assert_eq!(restore, None),
        other => panic!("expected WriteFailure, got {other:?}"),
    }
    assert_eq!(read(&path), "A\n");
    assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "A\n");
}

#[test]
fn test_failed_restore_is_surfaced() {
    let (_dir, path) = setup(Some("A\n"));
    let mut snapshot = Snapshot::read(&path).unwrap();
    snapshot.back_up().unwrap();
    fs::remove_file(backup_path(&path)).unwrap();

    assert!(snapshot.restore().is_some());
}
