//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// GitHub Endpoints
// =============================================================================

/// Base URL of the GitHub REST API (contents listing).
pub const GITHUB_API_HOST: &str = "https://api.github.com";

/// Host suffix for GitHub Pages sites (`{owner}.github.io`).
pub const PAGES_HOST_SUFFIX: &str = "github.io";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for the persisted repository record.
pub const REPO_CONFIG_KEY: &str = "repoConfig";

/// localStorage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Document attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// =============================================================================
// Repository Defaults
// =============================================================================

/// Built-in repository defaults, used until the user saves settings.
pub mod repository {
    /// Default repository owner.
    pub const DEFAULT_OWNER: &str = "gongobongomaths";

    /// Default repository name.
    pub const DEFAULT_NAME: &str = "My-Research-Server";

    /// Branch used when the settings form leaves it blank.
    pub const DEFAULT_BRANCH: &str = "main";

    /// Housekeeping entries that never show up in the grid.
    ///
    /// These are the files a Pages site needs to serve this browser itself.
    pub const EXCLUDED_NAMES: &[&str] = &[
        "index.html",
        "README.md",
        "LICENSE",
        "CNAME",
        "favicon_io",
        "styles.css",
        "script.js",
    ];
}

// =============================================================================
// Preview Configuration
// =============================================================================

/// Card preview geometry and file type tables.
pub mod preview {
    /// Target width of a rendered document preview, in CSS pixels.
    /// Card width (250px) minus horizontal padding (40px).
    pub const DOCUMENT_PREVIEW_WIDTH: f64 = 210.0;

    /// Extension whose first page is rendered instead of opening on click.
    pub const RESERVED_EXTENSION: &str = "pdf";

    /// Extensions shown as an inline image preview.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

    /// Name of the page-global pdf.js object.
    pub const PDFJS_GLOBAL: &str = "pdfjsLib";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
