//! Slash-delimited repository paths.
//!
//! The current path is the only navigation state. Root is the empty string.

/// Parent of a path: drops the last segment.
///
/// The parent of a single segment (and of root) is root.
pub fn parent_of(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => "",
    }
}

/// Breadcrumb label for a path (`/a/b`).
pub fn display_path(path: &str) -> String {
    format!("/{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("a/b/c"), "a/b");
        assert_eq!(parent_of("a/b"), "a");
        assert_eq!(parent_of("a"), "");
        assert_eq!(parent_of(""), "");
    }

    #[test]
    fn test_back_reaches_root() {
        let mut path = "docs/papers/2024";
        let mut hops = 0;
        while !path.is_empty() {
            path = parent_of(path);
            hops += 1;
        }
        assert_eq!(hops, 3);
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path("docs/papers"), "/docs/papers");
    }
}
