pub const DEFAULT_ACTION_ENV: &str = "UPDATE_GOLDEN";

/// What to do with a golden file, see [`Golden`][crate::Golden]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Action {
    /// Compare against the golden file, failing on mismatch
    #[default]
    Verify,
    /// Overwrite the golden file with the actual value before comparing
    Overwrite,
}

impl Action {
    pub fn with_env_var(var: impl AsRef<std::ffi::OsStr>) -> Option<Self> {
        let var = var.as_ref();
        let value = std::env::var_os(var)?;
        Self::with_env_value(value)
    }

    pub fn with_env_value(value: impl AsRef<std::ffi::OsStr>) -> Option<Self> {
        let value = value.as_ref();
        match value.to_str()? {
            "verify" | "0" | "false" => Some(Action::Verify),
            "overwrite" | "1" | "true" => Some(Action::Overwrite),
            _ => None,
        }
    }

    pub fn is_overwrite(self) -> bool {
        self == Action::Overwrite
    }
}
