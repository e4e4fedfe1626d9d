use golden::Action;
use golden::Helper;
use golden::Reporter;

use crate::golden_in;
use crate::write_fixture;

#[derive(Default)]
struct Recorder {
    reports: Vec<String>,
    helpers: usize,
}

impl Reporter for Recorder {
    fn report(&mut self, message: &str) {
        self.reports.push(message.to_owned());
    }

    fn helper(&mut self) -> Option<&mut dyn Helper> {
        Some(self as &mut dyn Helper)
    }
}

impl Helper for Recorder {
    fn mark_helper(&mut self) {
        self.helpers += 1;
    }
}

#[derive(Default)]
struct Plain {
    reports: Vec<String>,
}

impl Reporter for Plain {
    fn report(&mut self, message: &str) {
        self.reports.push(message.to_owned());
    }
}

#[test]
fn success_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"ok\n");

    let mut recorder = Recorder::default();
    let passed =
        golden_in(dir.path(), Action::Verify).check(&mut recorder, "ok\r\n", "out.txt", &[]);
    assert!(passed);
    assert!(recorder.reports.is_empty());
    assert_eq!(recorder.helpers, 1);
}

#[test]
fn failure_is_reported_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"line1\nline2\n");

    let mut recorder = Recorder::default();
    let case = 7;
    let passed = golden_in(dir.path(), Action::Verify).check(
        &mut recorder,
        "line1\nline3\n",
        "out.txt",
        &[&"case", &case],
    );
    assert!(!passed);
    assert_eq!(recorder.reports.len(), 1);
    let report = &recorder.reports[0];
    assert!(report.starts_with("assertion failed: \n--- expected"), "{report}");
    assert!(report.contains("+line3"), "{report}");
    assert!(report.ends_with(": case 7"), "{report}");
}

#[test]
fn error_is_reported_without_helper() {
    let dir = tempfile::tempdir().unwrap();

    let mut plain = Plain::default();
    let passed =
        golden_in(dir.path(), Action::Verify).check_bytes(&mut plain, b"x", "missing.bin", &[]);
    assert!(!passed);
    assert_eq!(plain.reports.len(), 1);
    assert!(
        plain.reports[0].starts_with("assertion failed: error: Failed to read"),
        "{}",
        plain.reports[0]
    );
}

#[test]
fn env_action_adds_update_hint() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.bin", &[1]);

    let golden = golden::Golden::new()
        .fixture_dir(dir.path())
        .palette(golden::report::Palette::never())
        .action_env("GOLDEN_TESTSUITE_NEVER_SET");
    let mut plain = Plain::default();
    assert!(!golden.check_bytes(&mut plain, &[2], "out.bin", &[]));
    assert!(
        plain.reports[0].ends_with("\nUpdate with GOLDEN_TESTSUITE_NEVER_SET=overwrite"),
        "{}",
        plain.reports[0]
    );
}

#[test]
fn stderr_reporter_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"a\n");

    let golden = golden_in(dir.path(), Action::Verify);
    let mut reporter = golden::reporter::StderrReporter;
    assert!(!golden.check(&mut reporter, "b\n", "out.txt", &[]));
    assert!(golden.check(&mut reporter, "a\n", "out.txt", &[]));
}

#[test]
#[should_panic(expected = "assertion failed")]
fn panic_reporter_fails_test() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "out.txt", b"a\n");

    let mut reporter = golden::reporter::PanicReporter;
    golden_in(dir.path(), Action::Verify).check(&mut reporter, "b\n", "out.txt", &[]);
}
