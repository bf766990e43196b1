use std::fmt;

/// The single error kind the round lifecycle surfaces. All lower-level
/// causes (missing image payload, transport failure, missing credential)
/// are normalized into this at the asset-provider boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetError {
    message: String,
}

impl AssetError {
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message shown to the player.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset generation failed: {}", self.message)
    }
}

impl std::error::Error for AssetError {}

/// The placement table is a fixed artifact defined only for the supported
/// gift count; any other count fails loudly instead of truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    UnsupportedCount(usize),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnsupportedCount(n) => {
                write!(f, "no placement table for {} gifts", n)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_keeps_message() {
        let err = AssetError::generation_failed("quota exceeded");
        assert_eq!(err.message(), "quota exceeded");
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn layout_error_names_count() {
        let err = LayoutError::UnsupportedCount(7);
        assert!(err.to_string().contains('7'));
    }
}
