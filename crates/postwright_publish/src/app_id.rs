//! Validated Facebook App ID.

use postwright_error::{ValidationError, ValidationErrorKind};
use std::str::FromStr;

/// A Facebook App ID that has passed format validation.
///
/// App IDs are purely numeric. Users regularly paste a profile name or
/// a page URL slug into the field instead; parsing rejects those with
/// guidance before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct AppId(String);

impl AppId {
    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyAppId));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(ValidationErrorKind::NonNumericAppId(
                trimmed.to_string(),
            )));
        }
        Ok(AppId(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_parses() {
        let id: AppId = "123456789".parse().unwrap();
        assert_eq!(id.as_str(), "123456789");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let id: AppId = "  42  ".parse().unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!("   ".parse::<AppId>().is_err());
    }

    #[test]
    fn profile_name_gets_the_guidance_message() {
        let err = "johnsmith".parse::<AppId>().unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("numeric"));
        assert!(message.contains("developers.facebook.com"));
    }

    #[test]
    fn url_slug_is_rejected() {
        assert!("facebook.com/mypage".parse::<AppId>().is_err());
    }
}
