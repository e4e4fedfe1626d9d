/// Render a binary mismatch as both byte sequences side by side
///
/// Meant for small fixtures where eyeballing the bytes is enough.
pub fn write_dump(
    writer: &mut dyn std::fmt::Write,
    expected: &[u8],
    actual: &[u8],
    palette: crate::report::Palette,
) -> Result<(), std::fmt::Error> {
    write!(
        writer,
        "{} (actual) != {} (expected)",
        palette.error(format_args!("{actual:?}")),
        palette.info(format_args!("{expected:?}")),
    )
}
