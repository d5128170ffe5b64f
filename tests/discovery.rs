use std::fs;

use songplay_etl::ingestion::discover_files;

#[test]
fn discovers_json_files_recursively_as_absolute_paths() {
    let files = discover_files("tests/fixtures/song_data", "json").unwrap();

    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|p| p.is_absolute()));
    assert!(
        files
            .iter()
            .all(|p| p.extension().is_some_and(|ext| ext == "json"))
    );
}

#[test]
fn skips_files_with_other_extensions() {
    // The tree contains a notes.txt next to the data files.
    let files = discover_files("tests/fixtures/song_data", "json").unwrap();
    assert!(files.iter().all(|p| !p.ends_with("notes.txt")));
}

#[test]
fn extension_match_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lower.json"), "{}").unwrap();
    fs::write(dir.path().join("upper.JSON"), "{}").unwrap();

    let files = discover_files(dir.path(), "json").unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("lower.json"));
}

#[test]
fn walks_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::write(dir.path().join("a/b/c/deep.json"), "{}").unwrap();
    fs::write(dir.path().join("top.json"), "{}").unwrap();

    let files = discover_files(dir.path(), "json").unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn empty_directory_yields_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let files = discover_files(dir.path(), "json").unwrap();
    assert!(files.is_empty());
}

#[test]
fn missing_root_is_an_error() {
    assert!(discover_files("tests/fixtures/does_not_exist", "json").is_err());
}
