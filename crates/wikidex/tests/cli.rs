//! CLI integration tests for wikidex commands.
//!
//! These tests exercise the index and search subcommands end to end
//! against real temporary page trees and index directories.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a wikidex command.
fn wikidex() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("wikidex").unwrap()
}

/// Writes a small page tree and indexes it into `dir/index`.
fn build_index(dir: &Path) {
    let pages = dir.join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(
        pages.join("Paris.html"),
        "<html><body><p>Paris is the capital of France</p></body></html>",
    )
    .unwrap();
    fs::write(
        pages.join("Texas.html"),
        "<html><body><p>Paris is also a city in Texas</p></body></html>",
    )
    .unwrap();

    wikidex()
        .arg("index")
        .arg("--pages")
        .arg(&pages)
        .arg("--index")
        .arg(dir.join("index"))
        .arg("--language")
        .arg("english")
        .assert()
        .success();
}

/// Runs a search against `dir/index` and returns the assert.
fn search(dir: &Path, query: &str) -> assert_cmd::assert::Assert {
    wikidex()
        .arg("search")
        .arg(query)
        .arg("--index")
        .arg(dir.join("index"))
        .arg("--language")
        .arg("english")
        .assert()
}

mod index {
    use super::*;

    #[test]
    fn reports_indexed_pages() {
        let dir = temp_dir();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("a.html"), "<p>uno</p>").unwrap();

        wikidex()
            .arg("index")
            .arg("--pages")
            .arg(&pages)
            .arg("--index")
            .arg(dir.path().join("index"))
            .assert()
            .success()
            .stdout(predicate::str::contains("indexed 1 pages"));
    }

    #[test]
    fn fails_on_missing_page_directory() {
        let dir = temp_dir();

        wikidex()
            .arg("index")
            .arg("--pages")
            .arg(dir.path().join("absent"))
            .arg("--index")
            .arg(dir.path().join("index"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn empty_pages_are_counted_not_indexed() {
        let dir = temp_dir();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("empty.html"), "<html></html>").unwrap();

        wikidex()
            .arg("index")
            .arg("--pages")
            .arg(&pages)
            .arg("--index")
            .arg(dir.path().join("index"))
            .assert()
            .success()
            .stdout(predicate::str::contains("indexed 0 pages (1 empty"));
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_indexed_page() {
        let dir = temp_dir();
        build_index(dir.path());

        search(dir.path(), "France")
            .success()
            .stdout(predicate::str::contains("1 results"))
            .stdout(predicate::str::contains(
                "https://es.wikipedia.org/wiki/Paris",
            ));
    }

    #[test]
    fn no_match_reports_zero_results() {
        let dir = temp_dir();
        build_index(dir.path());

        search(dir.path(), "nomatch")
            .success()
            .stdout(predicate::str::contains("0 results"));
    }

    #[test]
    fn and_operator_narrows() {
        let dir = temp_dir();
        build_index(dir.path());

        search(dir.path(), "Paris&Texas")
            .success()
            .stdout(predicate::str::contains("1 results"))
            .stdout(predicate::str::contains("Texas"));
    }

    #[test]
    fn not_operator_excludes() {
        let dir = temp_dir();
        build_index(dir.path());

        search(dir.path(), "Paris&~Texas")
            .success()
            .stdout(predicate::str::contains("1 results"))
            .stdout(predicate::str::contains("wiki/Paris"));
    }

    #[test]
    fn or_operator_widens() {
        let dir = temp_dir();
        build_index(dir.path());

        search(dir.path(), "France|Texas")
            .success()
            .stdout(predicate::str::contains("2 results"));
    }

    #[test]
    fn missing_index_reports_zero_results_without_failing() {
        let dir = temp_dir();

        search(dir.path(), "anything")
            .success()
            .stdout(predicate::str::contains("0 results"));
    }

    #[test]
    fn custom_base_url_is_used() {
        let dir = temp_dir();
        build_index(dir.path());

        wikidex()
            .arg("search")
            .arg("France")
            .arg("--index")
            .arg(dir.path().join("index"))
            .arg("--language")
            .arg("english")
            .arg("--base-url")
            .arg("https://example.org/p/")
            .assert()
            .success()
            .stdout(predicate::str::contains("https://example.org/p/Paris"));
    }

    #[test]
    fn reindex_does_not_double_entries() {
        let dir = temp_dir();
        build_index(dir.path());
        build_index(dir.path());

        search(dir.path(), "Paris")
            .success()
            .stdout(predicate::str::contains("2 results"));
    }
}
