//! Field constraints shared by item and list write paths.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ITEM_TITLE_MIN_CHARS: usize = 3;
pub const ITEM_TITLE_MAX_CHARS: usize = 50;
pub const ITEM_DESCRIPTION_MAX_CHARS: usize = 100;
pub const LIST_TITLE_MIN_CHARS: usize = 1;
pub const LIST_TITLE_MAX_CHARS: usize = 50;

/// Field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Item title is outside `ITEM_TITLE_MIN_CHARS..=ITEM_TITLE_MAX_CHARS`.
    ItemTitleLength { chars: usize },
    /// Item description exceeds `ITEM_DESCRIPTION_MAX_CHARS`.
    ItemDescriptionTooLong { chars: usize },
    /// List title is outside `LIST_TITLE_MIN_CHARS..=LIST_TITLE_MAX_CHARS`.
    ListTitleLength { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemTitleLength { chars } => write!(
                f,
                "item title must be {ITEM_TITLE_MIN_CHARS}-{ITEM_TITLE_MAX_CHARS} characters, got {chars}"
            ),
            Self::ItemDescriptionTooLong { chars } => write!(
                f,
                "item description must be at most {ITEM_DESCRIPTION_MAX_CHARS} characters, got {chars}"
            ),
            Self::ListTitleLength { chars } => write!(
                f,
                "list title must be {LIST_TITLE_MIN_CHARS}-{LIST_TITLE_MAX_CHARS} characters, got {chars}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub fn validate_item_title(title: &str) -> Result<(), ValidationError> {
    let chars = title.chars().count();
    if (ITEM_TITLE_MIN_CHARS..=ITEM_TITLE_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(ValidationError::ItemTitleLength { chars })
    }
}

pub fn validate_item_description(description: Option<&str>) -> Result<(), ValidationError> {
    let Some(description) = description else {
        return Ok(());
    };
    let chars = description.chars().count();
    if chars <= ITEM_DESCRIPTION_MAX_CHARS {
        Ok(())
    } else {
        Err(ValidationError::ItemDescriptionTooLong { chars })
    }
}

pub fn validate_list_title(title: &str) -> Result<(), ValidationError> {
    let chars = title.chars().count();
    if (LIST_TITLE_MIN_CHARS..=LIST_TITLE_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(ValidationError::ListTitleLength { chars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_title_bounds_are_inclusive() {
        assert!(validate_item_title("abc").is_ok());
        assert!(validate_item_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_item_title("ab"),
            Err(ValidationError::ItemTitleLength { chars: 2 })
        );
        assert_eq!(
            validate_item_title(&"x".repeat(51)),
            Err(ValidationError::ItemTitleLength { chars: 51 })
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // three scalar values, nine bytes
        assert!(validate_item_title("日本語").is_ok());
        assert!(validate_item_description(Some(&"é".repeat(100))).is_ok());
    }

    #[test]
    fn missing_description_is_valid() {
        assert!(validate_item_description(None).is_ok());
        assert_eq!(
            validate_item_description(Some(&"d".repeat(101))),
            Err(ValidationError::ItemDescriptionTooLong { chars: 101 })
        );
    }

    #[test]
    fn list_title_rejects_empty_and_overlong() {
        assert!(validate_list_title("a").is_ok());
        assert_eq!(
            validate_list_title(""),
            Err(ValidationError::ListTitleLength { chars: 0 })
        );
        assert!(validate_list_title(&"l".repeat(51)).is_err());
    }

    #[test]
    fn display_names_the_bounds() {
        let message = ValidationError::ItemTitleLength { chars: 1 }.to_string();
        assert!(message.contains("3-50"));
    }
}
