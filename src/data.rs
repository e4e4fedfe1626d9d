/// Actual output handed to [`Golden::assert_eq`][crate::Golden::assert_eq]
///
/// The kind picks the comparison: text gets line-ending normalization and a
/// unified diff, binary is compared byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Data {
    inner: DataInner,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DataInner {
    Binary(Vec<u8>),
    Text(String),
}

impl Data {
    /// Mark the data as binary (no post-processing)
    pub fn binary(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: DataInner::Binary(raw.into()),
        }
    }

    /// Mark the data as text (line endings are normalized)
    pub fn text(raw: impl Into<String>) -> Self {
        Self {
            inner: DataInner::Text(raw.into()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.inner {
            DataInner::Binary(_) => None,
            DataInner::Text(text) => Some(text.as_str()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.inner {
            DataInner::Binary(bin) => bin,
            DataInner::Text(text) => text.as_bytes(),
        }
    }

    pub(crate) fn inner(&self) -> &DataInner {
        &self.inner
    }
}

impl<'d> From<&'d Data> for Data {
    fn from(other: &'d Data) -> Self {
        other.clone()
    }
}

impl From<Vec<u8>> for Data {
    fn from(other: Vec<u8>) -> Self {
        Self::binary(other)
    }
}

impl<'b> From<&'b Vec<u8>> for Data {
    fn from(other: &'b Vec<u8>) -> Self {
        Self::binary(other.clone())
    }
}

impl<'b> From<&'b [u8]> for Data {
    fn from(other: &'b [u8]) -> Self {
        Self::binary(other)
    }
}

impl<'b, const N: usize> From<&'b [u8; N]> for Data {
    fn from(other: &'b [u8; N]) -> Self {
        Self::binary(other.as_slice())
    }
}

impl From<String> for Data {
    fn from(other: String) -> Self {
        Self::text(other)
    }
}

impl<'s> From<&'s String> for Data {
    fn from(other: &'s String) -> Self {
        Self::text(other.clone())
    }
}

impl<'s> From<&'s str> for Data {
    fn from(other: &'s str) -> Self {
        Self::text(other)
    }
}
