//! Rendering of golden-file mismatches

mod color;
mod diff;
mod dump;

pub use color::Palette;
pub(crate) use color::Style;
pub use color::Styled;
pub use diff::write_diff;
pub use dump::write_dump;
