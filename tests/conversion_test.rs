//! Integration tests for tree conversion.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use utf8_convert::encoding::{LEGACY_TEXT_ENCODING, decode_strict};
use utf8_convert::{Converter, Error, Outcome, convert_tree};

/// Helper to write a fixture file, creating parent directories.
fn put(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("Failed to read file")
}

fn modified(path: &Path) -> std::time::SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("Failed to stat file")
}

/// Windows-1252 page: "Crème brûlée – 5€".
const WINDOWS_1252_PAGE: &[u8] = b"<!DOCTYPE html>\n<html><head>\n\
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\n\
</head><body>Cr\xe8me br\xfbl\xe9e \x96 5\x80</body></html>\n";

#[test]
fn test_html_declaration_and_bytes_converted() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let page = put(temp.path(), "menu.html", WINDOWS_1252_PAGE);

    convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    let bytes = read(&page);
    let text = String::from_utf8(bytes).expect("output is not UTF-8");
    assert!(text.contains("charset=utf-8\""));
    assert!(!text.contains("windows-1252"));
    assert!(text.contains("Crème brûlée – 5€"));
}

#[test]
fn test_html_without_declaration_unchanged() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let content = b"<html><body>Cr\xe8me</body></html>";
    let page = put(temp.path(), "plain.htm", content);

    let report = convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    assert_eq!(read(&page), content);
    assert_eq!(report.skipped_count(), 1);
}

#[test]
fn test_text_file_reencoded() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    // "Příliš žluťoučký kůň úpěl ďábelské ódy" in windows-1250
    let content = b"P\xf8\xedli\x9a \x9elu\x9dou\xe8k\xfd k\xf9\xf2 \xfap\xecl \xef\xe1belsk\xe9 \xf3dy\n";
    let note = put(temp.path(), "docs/pangram.txt", content);

    convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    let expected = decode_strict(content, LEGACY_TEXT_ENCODING, "pangram.txt")
        .expect("fixture should decode");
    assert_eq!(expected, "Příliš žluťoučký kůň úpěl ďábelské ódy\n");
    assert_eq!(read(&note), expected.as_bytes());
}

#[test]
fn test_text_line_endings_translated_html_kept() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let note = put(temp.path(), "dos.txt", b"\x9akola\r\nmac\rend\r\n");
    let page = put(
        temp.path(),
        "dos.html",
        b"<meta content=\"text/html; charset=windows-1250\">\r\n\x9akola\r\n",
    );

    convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    assert_eq!(read(&note), "škola\nmac\nend\n".as_bytes());
    assert_eq!(
        read(&page),
        "<meta content=\"text/html; charset=utf-8\">\r\nškola\r\n".as_bytes()
    );
}

#[test]
fn test_latin1_declaration_is_not_windows_1252() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let page = put(
        temp.path(),
        "old.html",
        b"<meta content=\"text/html; charset=iso-8859-1\">\x80 caf\xe9",
    );

    let report = convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    assert_eq!(
        report.files[0].outcome,
        Outcome::Converted {
            from: "ISO-8859-1".to_string()
        }
    );
    assert_eq!(
        read(&page),
        "<meta content=\"text/html; charset=utf-8\">\u{80} café".as_bytes()
    );
}

#[test]
fn test_other_extensions_never_written() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let css = put(temp.path(), "style.css", b"/* caf\xe9 */");
    let upper = put(temp.path(), "OLD.HTML", WINDOWS_1252_PAGE);
    let backup = put(temp.path(), "notes.txt.bak", b"\x9a");
    let before = [modified(&css), modified(&upper), modified(&backup)];

    let report = convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    assert_eq!(report.ignored, 3);
    assert!(report.files.is_empty());
    assert_eq!(read(&css), b"/* caf\xe9 */");
    assert_eq!(read(&upper), WINDOWS_1252_PAGE);
    assert_eq!(read(&backup), b"\x9a");
    assert_eq!(
        [modified(&css), modified(&upper), modified(&backup)],
        before
    );
}

#[test]
fn test_excluded_roots_untouched_recursively() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let git = put(temp.path(), ".git/logs/refs/notes.txt", b"\x9a");
    let vscode = put(temp.path(), ".vscode/tasks.html", WINDOWS_1252_PAGE);
    let nested = put(temp.path(), "vendor/.git/readme.txt", b"\x9a");

    let report = convert_tree(temp.path(), &Converter::new()).expect("conversion failed");

    assert_eq!(report.files_found, 1);
    assert_eq!(read(&git), b"\x9a");
    assert_eq!(read(&vscode), WINDOWS_1252_PAGE);
    // only the first segment is checked
    assert_eq!(read(&nested), "š".as_bytes());
}

#[test]
fn test_second_run_is_idempotent_for_html() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let page = put(temp.path(), "menu.html", WINDOWS_1252_PAGE);

    convert_tree(temp.path(), &Converter::new()).expect("first run failed");
    let first = read(&page);

    let report = convert_tree(temp.path(), &Converter::new()).expect("second run failed");
    assert_eq!(read(&page), first);
    assert_eq!(
        report.files[0].outcome,
        Outcome::Converted {
            from: "UTF-8".to_string()
        }
    );
}

#[test]
fn test_first_failure_aborts_without_rollback() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let early = put(temp.path(), "a.html", WINDOWS_1252_PAGE);
    let broken = put(
        temp.path(),
        "m.html",
        b"<meta content=\"text/html; charset=utf-8\">\xc3\x28",
    );
    let late = put(temp.path(), "z.txt", b"\x9a");

    let err = convert_tree(temp.path(), &Converter::new()).expect_err("run should fail");
    assert!(matches!(err, Error::Encoding(_)));
    assert!(err.to_string().contains("m.html"));

    assert!(String::from_utf8(read(&early)).is_ok());
    assert_eq!(
        read(&broken),
        b"<meta content=\"text/html; charset=utf-8\">\xc3\x28"
    );
    assert_eq!(read(&late), b"\x9a");
}

#[test]
fn test_dry_run_modifies_nothing() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let page = put(temp.path(), "menu.html", WINDOWS_1252_PAGE);
    let note = put(temp.path(), "note.txt", b"\x9a");

    let report =
        convert_tree(temp.path(), &Converter::new().with_dry_run(true)).expect("dry run failed");

    assert_eq!(report.converted_count(), 2);
    assert_eq!(read(&page), WINDOWS_1252_PAGE);
    assert_eq!(read(&note), b"\x9a");
}

mod property_tests {
    use proptest::prelude::*;
    use tempfile::TempDir;
    use utf8_convert::{Converter, Rule};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn converted_html_is_a_fixed_point(body in "[a-zA-Z0-9 äöüčřžšéñ€<>/]{0,200}") {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("p.html");
            let page = format!("<meta content=\"text/html; charset=utf-8\">{body}");
            std::fs::write(&path, &page).unwrap();

            Converter::new().convert(&path, Rule::Detect).unwrap();
            prop_assert_eq!(std::fs::read(&path).unwrap(), page.into_bytes());
        }
    }
}
