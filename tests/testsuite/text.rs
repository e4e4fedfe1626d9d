use golden::Action;
use golden::ErrorKind;
use golden::Golden;

use crate::golden_in;
use crate::write_fixture;

#[test]
fn matching_text_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"line1\nline2\n");

    let comparison = golden_in(dir.path(), Action::Verify).string("line1\nline2\n", "out.txt");
    assert!(comparison.is_success(), "{comparison}");
}

#[test]
fn mismatch_is_unified_diff() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"line1\nline2\n");

    let comparison = golden_in(dir.path(), Action::Verify).string("line1\nline3\n", "out.txt");
    let message = comparison.message().expect("mismatch is a failure");
    assert!(message.starts_with('\n'), "{message}");
    assert!(message.contains("--- expected\n"), "{message}");
    assert!(message.contains("+++ actual\n"), "{message}");
    assert!(message.contains("\n-line2\n"), "{message}");
    assert!(message.contains("\n+line3\n"), "{message}");
    assert!(message.contains("\n line1\n"), "{message}");
}

#[test]
fn crlf_in_actual_matches_lf_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"a\nb\n");

    let golden = golden_in(dir.path(), Action::Verify);
    assert!(golden.string("a\r\nb\r\n", "out.txt").is_success());
    assert!(golden.bytes(b"a\r\nb\r\n", "out.txt").is_failure());
}

#[test]
fn lone_carriage_return_is_content() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"a\nb\n");

    let comparison = golden_in(dir.path(), Action::Verify).string("a\rb\n", "out.txt");
    assert!(comparison.is_failure(), "{comparison}");
}

#[test]
fn missing_fixture_is_error_not_failure() {
    let dir = tempfile::tempdir().unwrap();

    let comparison = golden_in(dir.path(), Action::Verify).string("anything", "missing.txt");
    assert!(comparison.is_error(), "{comparison}");
    assert_eq!(comparison.error().map(|e| e.kind()), Some(ErrorKind::Read));
    assert_eq!(comparison.message(), None);
}

#[test]
fn absolute_path_bypasses_fixture_dir() {
    let fixtures = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let path = write_fixture(elsewhere.path(), "abs.txt", b"absolute\n");

    let golden = golden_in(fixtures.path(), Action::Verify);
    assert_eq!(golden.path(&path), path);
    assert!(golden.string("absolute\n", &path).is_success());
}

#[test]
fn checked_in_fixture_resolves_relative_to_testdata() {
    let golden = Golden::new().action(Action::Verify);
    assert_eq!(golden.path("hello.txt"), golden::path("hello.txt"));
    assert!(golden.string("Hello\nWorld\n", "hello.txt").is_success());
    assert!(golden.string("Hello\r\nWorld\r\n", "hello.txt").is_success());
    assert_eq!(golden.get("hello.txt"), b"Hello\nWorld\n");
}

#[test]
fn assert_eq_passes_on_match() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"same\n");

    golden_in(dir.path(), Action::Verify).assert_eq("same\r\n", "out.txt");
}

#[test]
#[should_panic(expected = "assertion failed")]
fn assert_eq_panics_on_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"expected\n");

    golden_in(dir.path(), Action::Verify).assert_eq("actual\n", "out.txt");
}

#[test]
#[should_panic(expected = "Missing golden file")]
fn get_panics_on_missing_fixture() {
    let dir = tempfile::tempdir().unwrap();

    golden_in(dir.path(), Action::Verify).get("missing.txt");
}

#[test]
fn default_message_is_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"line1\nline2\n");

    let comparison = Golden::new()
        .fixture_dir(dir.path())
        .action(Action::Verify)
        .string("line1\nline3\n", "out.txt");
    let message = comparison.message().expect("mismatch is a failure");
    assert!(!message.contains('\u{1b}'), "{message:?}");
    assert!(message.starts_with("\n--- expected\n+++ actual\n"), "{message:?}");
    assert!(message.contains("\n-line2\n"), "{message:?}");
    assert!(message.contains("\n+line3\n"), "{message:?}");
}

#[test]
fn invalid_utf8_difference_is_explained() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"a\xff\n");

    let comparison = golden_in(dir.path(), Action::Verify).string("a\u{fffd}\n", "out.txt");
    let message = comparison.message().expect("mismatch is a failure");
    assert!(
        message.contains("differs only in bytes that are not valid UTF-8"),
        "{message}"
    );
}
