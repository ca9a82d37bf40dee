//! URL slug derivation.
//!
//! Slugs are derived from post titles when the client does not supply one.
//! Lookup is exact-match and case-sensitive; derivation is the only place
//! any normalisation happens.

/// Derive a URL-safe slug from a title.
///
/// - Lowercases the input.
/// - Collapses every run of non-alphanumeric characters to a single `-`.
/// - Trims leading and trailing hyphens.
///
/// # Examples
///
/// ```
/// use devfolio_core::slug::slugify;
///
/// assert_eq!(slugify("Deploying Rust on Kubernetes"), "deploying-rust-on-kubernetes");
/// assert_eq!(slugify("  Docker -- the basics!  "), "docker-the-basics");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("CI/CD: a primer"), "ci-cd-a-primer");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("...Edge Case..."), "edge-case");
    }

    #[test]
    fn preserves_digits() {
        assert_eq!(slugify("Top 10 Docker Tips"), "top-10-docker-tips");
    }

    #[test]
    fn uppercase_input_is_lowered() {
        assert_eq!(slugify("KUBERNETES"), "kubernetes");
    }

    #[test]
    fn empty_title_yields_empty_slug() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn all_punctuation_yields_empty_slug() {
        assert_eq!(slugify("!!!"), "");
    }
}
