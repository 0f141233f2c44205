mod support;

use std::fs;
use std::path::{Path, PathBuf};

use altmem_engine::{discover_inputs, DiscoveryOptions};
use pretty_assertions::assert_eq;
use support::init_logging;
use tempfile::TempDir;

fn touch(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "<xliff/>").unwrap();
    path.to_path_buf()
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn directory_scan_is_shallow_unless_recursive() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let top = touch(&temp.path().join("a.xlf"));
    let nested = touch(&temp.path().join("sub").join("b.sdlxliff"));
    touch(&temp.path().join("notes.txt"));

    let shallow = discover_inputs(&[arg(temp.path())], &DiscoveryOptions::default());
    assert_eq!(shallow, vec![top.clone()]);

    let options = DiscoveryOptions {
        recursive: true,
        ..DiscoveryOptions::default()
    };
    let deep = discover_inputs(&[arg(temp.path())], &options);
    assert_eq!(deep, vec![top, nested]);
}

#[test]
fn extensions_match_case_insensitively_and_can_be_overridden() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let upper = touch(&temp.path().join("UPPER.XLF"));
    let custom = touch(&temp.path().join("job.mqxliff"));

    let found = discover_inputs(&[arg(temp.path())], &DiscoveryOptions::default());
    assert_eq!(found, vec![upper, custom.clone()]);

    let options = DiscoveryOptions {
        recursive: false,
        extensions: vec!["MQXLIFF".to_string()],
    };
    assert_eq!(discover_inputs(&[arg(temp.path())], &options), vec![custom]);
}

#[test]
fn same_file_named_twice_is_listed_once() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let file = touch(&temp.path().join("a.xliff"));

    let found = discover_inputs(
        &[arg(&file), arg(temp.path()), arg(&file)],
        &DiscoveryOptions::default(),
    );
    assert_eq!(found, vec![file]);
}

#[test]
fn wildcards_expand_within_their_directory() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let one = touch(&temp.path().join("part1.xlf"));
    let two = touch(&temp.path().join("part2.xlf"));
    touch(&temp.path().join("other.xlf"));

    let pattern = arg(&temp.path().join("part?.xlf"));
    assert_eq!(
        discover_inputs(&[pattern], &DiscoveryOptions::default()),
        vec![one.clone(), two.clone()]
    );

    let pattern = arg(&temp.path().join("p*"));
    assert_eq!(
        discover_inputs(&[pattern], &DiscoveryOptions::default()),
        vec![one, two]
    );
}

#[test]
fn missing_paths_are_skipped() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let real = touch(&temp.path().join("real.xlf"));

    let found = discover_inputs(
        &[
            arg(&temp.path().join("missing.xlf")),
            arg(&temp.path().join("none*.xlf")),
            arg(&real),
        ],
        &DiscoveryOptions::default(),
    );
    assert_eq!(found, vec![real]);
}

#[test]
fn explicit_file_with_unselected_extension_is_ignored() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let txt = touch(&temp.path().join("readme.txt"));
    assert!(discover_inputs(&[arg(&txt)], &DiscoveryOptions::default()).is_empty());
}
