//! Card grid view models.
//!
//! A [`Listing`] is one fetch's worth of filtered entries, already turned
//! into [`Card`]s. It is replaced wholesale by the next fetch.

use super::entry::{DirectoryEntry, EntryKind, FileKind, extension, has_reserved_extension};
use super::repository::RepositoryConfig;

/// Preview shown inside a file card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardPreview {
    /// Inline lazy-loaded image
    Image { url: String },
    /// First page rendered asynchronously (reserved extension)
    Document { url: String },
    /// Static icon only
    Glyph,
}

/// File-specific card data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCard {
    /// Lowercased extension
    pub extension: String,
    /// Icon category
    pub file_kind: FileKind,
    /// Preview strategy
    pub preview: CardPreview,
    /// Direct GitHub Pages link
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardKind {
    Folder,
    File(FileCard),
}

/// One rendered grid card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub path: String,
    pub kind: CardKind,
}

impl Card {
    /// Build a card for an entry of `config`'s repository.
    pub fn from_entry(entry: DirectoryEntry, config: &RepositoryConfig) -> Self {
        let kind = if entry.is_dir() {
            CardKind::Folder
        } else {
            let extension = extension(&entry.name);
            let file_kind = FileKind::from_extension(&extension);
            let url = config.file_url(&entry.path);
            // Only regular files get a preview body.
            let preview = match (entry.kind, file_kind) {
                (EntryKind::File, FileKind::Pdf) if has_reserved_extension(&entry.name) => {
                    CardPreview::Document { url: url.clone() }
                }
                (EntryKind::File, FileKind::Image) => CardPreview::Image { url: url.clone() },
                _ => CardPreview::Glyph,
            };
            CardKind::File(FileCard {
                extension,
                file_kind,
                preview,
                url,
            })
        };

        Self {
            name: entry.name,
            path: entry.path,
            kind,
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, CardKind::Folder)
    }

    /// Badge text: "Folder" or the uppercased extension.
    pub fn badge(&self) -> String {
        match &self.kind {
            CardKind::Folder => "Folder".to_string(),
            CardKind::File(file) => file.extension.to_uppercase(),
        }
    }

    /// URL a card click opens in a new tab.
    ///
    /// `None` for folders (they navigate) and for the reserved extension,
    /// whose preview carries its own open action.
    pub fn click_url(&self) -> Option<&str> {
        match &self.kind {
            CardKind::File(file) if !matches!(file.preview, CardPreview::Document { .. }) => {
                Some(&file.url)
            }
            _ => None,
        }
    }
}

/// A rendered directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// `owner/name`
    pub repository: String,
    pub branch: String,
    /// Directory path (empty = root)
    pub path: String,
    pub cards: Vec<Card>,
}

impl Listing {
    /// Filter `entries` through the config's excluded names and build cards.
    ///
    /// API order is preserved.
    pub fn build(config: &RepositoryConfig, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        let cards = entries
            .into_iter()
            .filter(|entry| !config.is_excluded(&entry.name))
            .map(|entry| Card::from_entry(entry, config))
            .collect();

        Self {
            repository: config.slug(),
            branch: config.branch.clone(),
            path: path.to_string(),
            cards,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}
