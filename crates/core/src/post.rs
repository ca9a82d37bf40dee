//! Blog post constants and validation helpers.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Defaults and limits
   -------------------------------------------------------------------------- */

/// Author written when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Maximum length for a post title (matches the column width).
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum length for a slug (matches the column width).
pub const MAX_SLUG_LEN: usize = 255;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a post title: non-empty and within the column width.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate post content: non-empty.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a slug: non-empty and within the column width.
///
/// Slugs are stored as given; this only guards the obvious degenerate
/// cases (an empty slug would be unreachable by the lookup route).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug too long: {} chars (max {MAX_SLUG_LEN})",
            slug.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_title_passes() {
        assert!(validate_title("Deploying Rust").is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn overlong_title_rejected() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_title(&long).is_err());
    }

    #[test]
    fn empty_content_rejected() {
        assert!(validate_content("").is_err());
    }

    #[test]
    fn nonempty_content_passes() {
        assert!(validate_content("# heading\n\nbody").is_ok());
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn valid_slug_passes() {
        assert!(validate_slug("deploying-rust").is_ok());
    }
}
