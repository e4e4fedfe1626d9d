/// Assert `actual` matches a golden file
///
/// The update mode is read from [`DEFAULT_ACTION_ENV`][crate::DEFAULT_ACTION_ENV].
///
/// ```rust,no_run
/// let actual = "Usage: app [OPTIONS]\n";
/// golden::assert_golden!(actual, "help.txt");
/// golden::assert_golden!(vec![0x7f, b'E', b'L', b'F'], "header.bin");
/// ```
#[macro_export]
macro_rules! assert_golden {
    ($actual:expr, $filename:expr $(,)?) => {
        $crate::golden().assert_eq($actual, $filename)
    };
}

/// Feature-flag controlled additional test debug information
#[cfg(feature = "debug")]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => ({
        $crate::__macro_support::eprintln!(
            "[{:>w$}] \t{}",
            ::std::module_path!(),
            ::std::format_args!($($arg)*),
            w = 28
        );
    })
}

/// Feature-flag controlled additional test debug information
#[cfg(not(feature = "debug"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
