use thiserror::Error;

/// Failure kinds shared by every wrapper in the crate.
///
/// Each fallible operation validates its arguments before touching the
/// container, so receiving one of these means nothing was mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl ContainerError {
    pub fn index(index: usize, len: usize) -> Self {
        Self::OutOfRange(format!("index {index} is past the end (len {len})"))
    }

    pub fn range(begin: usize, end: usize, len: usize) -> Self {
        Self::OutOfRange(format!("range {begin}..{end} is invalid for len {len}"))
    }

    pub fn missing_key(key: impl std::fmt::Debug) -> Self {
        Self::OutOfRange(format!("key {key:?} not found"))
    }

    pub fn count(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err = ContainerError::index(7, 3);
        assert!(err.is_out_of_range());
        assert_eq!(err.to_string(), "out of range: index 7 is past the end (len 3)");
    }

    #[test]
    fn test_range_error_display() {
        let err = ContainerError::range(3, 6, 5);
        assert!(err.to_string().contains("3..6"));
        assert!(err.to_string().contains("len 5"));
    }

    #[test]
    fn test_missing_key_uses_debug_format() {
        let err = ContainerError::missing_key("apple");
        assert_eq!(err.to_string(), "out of range: key \"apple\" not found");
    }

    #[test]
    fn test_count_error_kind() {
        let err = ContainerError::count("size can't be negative");
        assert!(err.is_invalid_argument());
        assert!(!err.is_out_of_range());
    }
}
