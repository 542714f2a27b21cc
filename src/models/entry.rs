//! Directory entries as returned by the GitHub contents API.

use serde::Deserialize;

use crate::config::preview::{IMAGE_EXTENSIONS, RESERVED_EXTENSION};

/// Entry type from the contents API `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else; rendered like files.
    #[serde(other)]
    Other,
}

/// One entry of a directory listing.
///
/// Only `name`, `path` and `type` are read; other API fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    /// Entry name (last path segment)
    pub name: String,
    /// Path relative to the repository root
    pub path: String,
    /// File or directory
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DirectoryEntry {
    /// Check if this entry is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Lowercased extension of a file name.
///
/// Takes the text after the last `.`; a name without a dot is its own
/// extension (`Makefile` -> `makefile`).
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Whether `name` ends in `.` plus the reserved extension, in any case.
///
/// Unlike [`extension`], a dotless name never matches.
pub fn has_reserved_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(RESERVED_EXTENSION))
}

/// File category, used for icon selection and previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Document,
    Image,
    Video,
    Archive,
    Other,
}

impl FileKind {
    /// Classify a lowercased extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            e if e == RESERVED_EXTENSION => Self::Pdf,
            e if IMAGE_EXTENSIONS.contains(&e) => Self::Image,
            "doc" | "docx" | "txt" => Self::Document,
            "mp4" | "mov" => Self::Video,
            "zip" => Self::Archive,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_listing() {
        let json = r#"[
            {"name": "docs", "path": "docs", "sha": "abc", "size": 0, "type": "dir"},
            {"name": "a.pdf", "path": "a.pdf", "sha": "def", "size": 12, "type": "file",
             "download_url": "https://raw.githubusercontent.com/x/y/main/a.pdf"},
            {"name": "vendor", "path": "vendor", "type": "submodule"}
        ]"#;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[2].kind, EntryKind::Other);
    }

    #[test]
    fn test_single_file_object_is_not_a_listing() {
        let json = r#"{"name": "a.pdf", "path": "a.pdf", "type": "file"}"#;
        assert!(serde_json::from_str::<Vec<DirectoryEntry>>(json).is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.PNG"), "png");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("Makefile"), "makefile");
    }

    #[test]
    fn test_reserved_extension_needs_a_dot() {
        assert!(has_reserved_extension("paper.pdf"));
        assert!(has_reserved_extension("Paper.PDF"));
        assert!(!has_reserved_extension("pdf"));
        assert!(!has_reserved_extension("paper.pdf.txt"));
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::from_extension("pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_extension("webp"), FileKind::Image);
        assert_eq!(FileKind::from_extension("docx"), FileKind::Document);
        assert_eq!(FileKind::from_extension("mov"), FileKind::Video);
        assert_eq!(FileKind::from_extension("zip"), FileKind::Archive);
        assert_eq!(FileKind::from_extension("rs"), FileKind::Other);
    }
}
