//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuBookOpen as FilePdf, LuChevronLeft as Back,
        LuExternalLink as ExternalLink, LuFile as File, LuFileText as FileText,
        LuFilm as FileVideo, LuFolder as Folder, LuImage as FileImage, LuMoon as Moon,
        LuSettings as Settings, LuSun as Sun, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as Back,
        BsExclamationTriangleFill as Warning, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsGearFill as Settings,
        BsMoonFill as Moon, BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(SETTINGS, Settings);
themed_icon!(WARNING, Warning);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);

/// Icon for a file category; unmapped kinds get the generic file icon.
pub fn file_icon(kind: FileKind) -> Icon {
    match kind {
        FileKind::Pdf => FILE_PDF,
        FileKind::Document => FILE_TEXT,
        FileKind::Image => FILE_IMAGE,
        FileKind::Video => FILE_VIDEO,
        FileKind::Archive => FILE_ARCHIVE,
        FileKind::Other => FILE,
    }
}
