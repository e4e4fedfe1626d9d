#[cfg(feature = "color")]
use anstream::panic;

use crate::comparison::Verdict;
use crate::data::DataInner;
use crate::report::Palette;
use crate::reporter::Reporter;
use crate::Action;
use crate::Comparison;
use crate::Error;

/// Golden-file assertions
///
/// Compares actual output against a file under the fixture directory
/// (`testdata` by default).  With [`Action::Overwrite`], the file is first
/// replaced by the actual output, creating it if needed.
///
/// # Examples
///
/// ```rust,no_run
/// let actual = "Usage: app [OPTIONS]\n";
/// golden::golden().assert_eq(actual, "help.txt");
/// ```
///
/// Run with `UPDATE_GOLDEN=overwrite` to regenerate `testdata/help.txt`.
#[derive(Clone, Debug)]
pub struct Golden {
    action: Action,
    action_var: Option<String>,
    fixture_dir: std::path::PathBuf,
    palette: Palette,
}

/// # Assertions
impl Golden {
    pub fn new() -> Self {
        Default::default()
    }

    /// Compare text against a golden file
    ///
    /// `\r\n` is normalized to `\n` before comparing.  A mismatch is reported as
    /// a unified diff.
    pub fn string(&self, actual: &str, filename: impl AsRef<std::path::Path>) -> Comparison {
        let filename = filename.as_ref();
        let actual = crate::utils::normalize_lines(actual);
        let expected = match self.compare(actual.as_bytes(), filename, true) {
            Ok(Verdict::Matched) => return Comparison::Success,
            Ok(Verdict::Mismatched { expected }) => expected,
            Err(err) => return Comparison::Error(err),
        };

        let expected = String::from_utf8_lossy(&expected);
        let mut buf = String::from("\n");
        if let Err(err) = self.write_text_failure(&mut buf, &expected, &actual) {
            return Comparison::Error(Error::format(err));
        }
        Comparison::Failure(buf)
    }

    fn write_text_failure(
        &self,
        buf: &mut String,
        expected: &str,
        actual: &str,
    ) -> Result<(), std::fmt::Error> {
        use std::fmt::Write as _;

        crate::report::write_diff(buf, expected, actual, &"expected", &"actual", self.palette)?;
        if expected == actual {
            // Only reachable when the lossy decode of the golden file hid the difference
            writeln!(buf, "golden file differs only in bytes that are not valid UTF-8")?;
        }
        Ok(())
    }

    /// Compare bytes against a golden file
    ///
    /// No normalization is applied.
    pub fn bytes(&self, actual: &[u8], filename: impl AsRef<std::path::Path>) -> Comparison {
        let filename = filename.as_ref();
        let expected = match self.compare(actual, filename, false) {
            Ok(Verdict::Matched) => return Comparison::Success,
            Ok(Verdict::Mismatched { expected }) => expected,
            Err(err) => return Comparison::Error(err),
        };

        let mut buf = String::new();
        if let Err(err) = crate::report::write_dump(&mut buf, &expected, actual, self.palette) {
            return Comparison::Error(Error::format(err));
        }
        Comparison::Failure(buf)
    }

    /// Compare text against a golden file, reporting any failure
    ///
    /// Returns whether the assertion passed.
    pub fn check(
        &self,
        reporter: &mut dyn Reporter,
        actual: &str,
        filename: impl AsRef<std::path::Path>,
        diagnostics: &[&dyn std::fmt::Display],
    ) -> bool {
        if let Some(helper) = reporter.helper() {
            helper.mark_helper();
        }
        let actual = crate::utils::normalize_lines(actual);
        let comparison = self.string(&actual, filename);
        self.report(reporter, &comparison, diagnostics)
    }

    /// Compare bytes against a golden file, reporting any failure
    ///
    /// Returns whether the assertion passed.
    pub fn check_bytes(
        &self,
        reporter: &mut dyn Reporter,
        actual: &[u8],
        filename: impl AsRef<std::path::Path>,
        diagnostics: &[&dyn std::fmt::Display],
    ) -> bool {
        if let Some(helper) = reporter.helper() {
            helper.mark_helper();
        }
        let comparison = self.bytes(actual, filename);
        self.report(reporter, &comparison, diagnostics)
    }

    /// Assert `actual` matches a golden file, panicking otherwise
    ///
    /// Text is compared with [`Golden::string`], binary with [`Golden::bytes`].
    #[track_caller]
    pub fn assert_eq(
        &self,
        actual: impl Into<crate::Data>,
        filename: impl AsRef<std::path::Path>,
    ) {
        let actual = actual.into();
        let comparison = match actual.inner() {
            DataInner::Text(text) => self.string(text, filename),
            DataInner::Binary(bin) => self.bytes(bin, filename),
        };
        if let Some(message) = self.failure_message(&comparison, &[]) {
            panic!("{message}");
        }
    }

    /// Read a golden file, panicking if it can't be read
    #[track_caller]
    pub fn get(&self, filename: impl AsRef<std::path::Path>) -> Vec<u8> {
        match self.load(filename) {
            Ok(expected) => expected,
            Err(err) => panic!("{}: {}", self.palette.error("Missing golden file"), err),
        }
    }

    /// Read a golden file
    pub fn load(&self, filename: impl AsRef<std::path::Path>) -> crate::Result<Vec<u8>> {
        let path = self.path(filename);
        crate::debug!("Loading {}", path.display());
        std::fs::read(&path).map_err(|e| Error::read(&path, e))
    }

    /// Where a golden file lives
    ///
    /// Absolute paths are returned unchanged.
    pub fn path(&self, filename: impl AsRef<std::path::Path>) -> std::path::PathBuf {
        crate::path::resolve(&self.fixture_dir, filename.as_ref())
    }

    pub(crate) fn update(
        &self,
        filename: &std::path::Path,
        actual: &[u8],
        clean: bool,
    ) -> crate::Result<()> {
        if !self.action.is_overwrite() {
            return Ok(());
        }

        let actual = if clean {
            crate::utils::normalize_line_bytes(actual)
        } else {
            std::borrow::Cow::Borrowed(actual)
        };
        let path = self.path(filename);
        crate::debug!("Overwriting {}", path.display());
        write_golden(&path, &actual).map_err(|e| Error::write(&path, e))
    }

    pub(crate) fn compare(
        &self,
        actual: &[u8],
        filename: &std::path::Path,
        clean: bool,
    ) -> crate::Result<Verdict> {
        self.update(filename, actual, clean)?;
        let expected = self.load(filename)?;
        if expected == actual {
            Ok(Verdict::Matched)
        } else {
            Ok(Verdict::Mismatched { expected })
        }
    }

    fn report(
        &self,
        reporter: &mut dyn Reporter,
        comparison: &Comparison,
        diagnostics: &[&dyn std::fmt::Display],
    ) -> bool {
        match self.failure_message(comparison, diagnostics) {
            Some(message) => {
                reporter.report(&message);
                false
            }
            None => true,
        }
    }

    fn failure_message(
        &self,
        comparison: &Comparison,
        diagnostics: &[&dyn std::fmt::Display],
    ) -> Option<String> {
        use std::fmt::Write as _;

        let mut message = match comparison {
            Comparison::Success => return None,
            Comparison::Failure(_) | Comparison::Error(_) => {
                format!("{}: {}", self.palette.error("assertion failed"), comparison)
            }
        };
        if !diagnostics.is_empty() {
            let diagnostics = diagnostics
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(message, ": {diagnostics}");
        }
        if let (Action::Verify, Some(action_var)) = (self.action, self.action_var.as_deref()) {
            let _ = write!(
                message,
                "\n{}",
                self.palette
                    .hint(format_args!("Update with {action_var}=overwrite"))
            );
        }
        Some(message)
    }
}

/// # Customize Behavior
impl Golden {
    /// Style failure messages
    ///
    /// Messages are plain text by default.  Styles end up inside
    /// [`Comparison`] messages, so only opt in when they are printed
    /// rather than inspected, e.g. with [`Palette::auto`].
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Read the update mode from an environment variable
    ///
    /// Unset or unrecognized values keep the current [`Action`].
    pub fn action_env(mut self, var_name: &str) -> Self {
        let action = Action::with_env_var(var_name);
        self.action = action.unwrap_or(self.action);
        self.action_var = Some(var_name.to_owned());
        self
    }

    /// Override the update mode
    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self.action_var = None;
        self
    }

    /// Override the directory relative filenames resolve against
    ///
    /// The default is [`DEFAULT_FIXTURE_DIR`][crate::DEFAULT_FIXTURE_DIR].
    pub fn fixture_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.fixture_dir = dir.into();
        self
    }
}

impl Default for Golden {
    fn default() -> Self {
        Self {
            action: Default::default(),
            action_var: Default::default(),
            fixture_dir: crate::DEFAULT_FIXTURE_DIR.into(),
            palette: Palette::never(),
        }
    }
}

fn write_golden(path: &std::path::Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write as _;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt as _;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}
