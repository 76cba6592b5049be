//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Access errors
/// - 2xxx: Affiliate errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Access errors (1xxx)
    Access,
    /// Affiliate errors (2xxx)
    Affiliate,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Access,
            2000..3000 => Self::Affiliate,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Access => "access",
            Self::Affiliate => "affiliate",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Access);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Access);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Affiliate);
        assert_eq!(ErrorCategory::from_code(2999), ErrorCategory::Affiliate);

        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::AccessDenied.category(), ErrorCategory::Access);
        assert_eq!(
            ErrorCode::AffiliateNotFound.category(),
            ErrorCategory::Affiliate
        );
        assert_eq!(
            ErrorCode::NationalIdExists.category(),
            ErrorCategory::Affiliate
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
        assert_eq!(ErrorCode::StoreUnavailable.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Access.name(), "access");
        assert_eq!(ErrorCategory::Affiliate.name(), "affiliate");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Access;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"access\"");

        let category = ErrorCategory::Affiliate;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"affiliate\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"access\"").unwrap();
        assert_eq!(category, ErrorCategory::Access);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
