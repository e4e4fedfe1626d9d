/// Lines of unchanged context around each changed region
#[cfg(feature = "diff")]
pub(crate) const CONTEXT_RADIUS: usize = 3;

/// Render a unified diff of `expected` against `actual`
///
/// Nothing beyond the header is written when the two are equal.
pub fn write_diff(
    writer: &mut dyn std::fmt::Write,
    expected: &str,
    actual: &str,
    expected_name: &dyn std::fmt::Display,
    actual_name: &dyn std::fmt::Display,
    palette: crate::report::Palette,
) -> Result<(), std::fmt::Error> {
    #[cfg(feature = "diff")]
    {
        write_diff_inner(
            writer,
            expected,
            actual,
            expected_name,
            actual_name,
            palette,
        )
    }
    #[cfg(not(feature = "diff"))]
    {
        writeln!(writer, "{}:", palette.info(expected_name))?;
        writeln!(writer, "{}", palette.info(expected))?;
        writeln!(writer, "{}:", palette.error(actual_name))?;
        writeln!(writer, "{}", palette.error(actual))?;
        Ok(())
    }
}

#[cfg(feature = "diff")]
fn write_diff_inner(
    writer: &mut dyn std::fmt::Write,
    expected: &str,
    actual: &str,
    expected_name: &dyn std::fmt::Display,
    actual_name: &dyn std::fmt::Display,
    palette: crate::report::Palette,
) -> Result<(), std::fmt::Error> {
    let changes = similar::TextDiff::configure()
        .algorithm(similar::Algorithm::Myers)
        .timeout(std::time::Duration::from_millis(500))
        .diff_lines(expected, actual);

    writeln!(writer, "{}", palette.info(format_args!("--- {expected_name}")))?;
    writeln!(writer, "{}", palette.error(format_args!("+++ {actual_name}")))?;
    let mut unified = changes.unified_diff();
    unified.context_radius(CONTEXT_RADIUS);
    for hunk in unified.iter_hunks() {
        writeln!(writer, "{}", palette.hint(hunk.header()))?;
        for change in hunk.iter_changes() {
            let style = match change.tag() {
                similar::ChangeTag::Insert => palette.error,
                similar::ChangeTag::Delete => palette.info,
                similar::ChangeTag::Equal => crate::report::Style::new(),
            };
            write_change(writer, change, style)?;
        }
    }

    Ok(())
}

#[cfg(feature = "diff")]
fn write_change(
    writer: &mut dyn std::fmt::Write,
    change: similar::Change<&str>,
    style: crate::report::Style,
) -> Result<(), std::fmt::Error> {
    let line = change.value().strip_suffix('\n').unwrap_or(change.value());
    writeln!(
        writer,
        "{}",
        crate::report::Styled::new(format_args!("{}{}", change.tag(), line), style)
    )?;
    if change.missing_newline() {
        writeln!(writer, "\\ No newline at end of file")?;
    }

    Ok(())
}
