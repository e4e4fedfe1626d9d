/// Which step of a golden-file comparison failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The golden file is missing or unreadable
    Read,
    /// The golden file could not be overwritten
    Write,
    /// Rendering the mismatch report failed
    Format,
}

#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    inner: String,
    backtrace: Option<Backtrace>,
}

impl Error {
    pub(crate) fn read(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::with_string(
            ErrorKind::Read,
            format!("Failed to read {}: {}", path.display(), err),
        )
    }

    pub(crate) fn write(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::with_string(
            ErrorKind::Write,
            format!("Failed to write {}: {}", path.display(), err),
        )
    }

    pub(crate) fn format(err: std::fmt::Error) -> Self {
        Self::with_string(ErrorKind::Format, format!("Failed to render diff: {err}"))
    }

    fn with_string(kind: ErrorKind, inner: String) -> Self {
        Self {
            kind,
            inner,
            backtrace: Backtrace::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.inner == other.inner
    }
}

impl Eq for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)?;
        if let Some(backtrace) = self.backtrace.as_ref() {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Backtrace:")?;
            write!(f, "{backtrace}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "debug")]
#[derive(Debug, Clone)]
struct Backtrace(backtrace::Backtrace);

#[cfg(feature = "debug")]
impl Backtrace {
    fn new() -> Option<Self> {
        Some(Self(backtrace::Backtrace::new()))
    }
}

#[cfg(feature = "debug")]
impl std::fmt::Display for Backtrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `backtrace::Backtrace` uses `Debug` instead of `Display`
        write!(f, "{:?}", self.0)
    }
}

#[cfg(not(feature = "debug"))]
#[derive(Debug, Copy, Clone)]
struct Backtrace;

#[cfg(not(feature = "debug"))]
impl Backtrace {
    fn new() -> Option<Self> {
        None
    }
}

#[cfg(not(feature = "debug"))]
impl std::fmt::Display for Backtrace {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}
