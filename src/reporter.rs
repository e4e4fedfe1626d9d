//! Bridge from [`Comparison`][crate::Comparison]s to a test framework

#[cfg(feature = "color")]
use anstream::eprintln;
#[cfg(feature = "color")]
use anstream::panic;

/// Receives failed assertions
pub trait Reporter {
    /// Record a failed assertion
    fn report(&mut self, message: &str);

    /// Optional hook for frameworks that track helper frames
    fn helper(&mut self) -> Option<&mut dyn Helper> {
        None
    }
}

/// Marks the calling frame as a test helper
pub trait Helper {
    fn mark_helper(&mut self);
}

/// Fail the test on the first reported failure
#[derive(Copy, Clone, Debug, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    fn report(&mut self, message: &str) {
        panic!("{message}");
    }
}

/// Print failures to stderr and keep going
#[derive(Copy, Clone, Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    #[allow(clippy::print_stderr)]
    fn report(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
