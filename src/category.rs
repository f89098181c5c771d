//! XDG categories as an injected string set.
//!
//! `Category` is an open newtype rather than a closed enum, and the
//! taxonomy itself lives behind a `CategoryRegistry` trait so a consumer
//! can inject its own list. A `StaticCategoryRegistry` transcribing the
//! freedesktop menu-spec main/additional/reserved categories ships as the
//! built-in default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single XDG category name, e.g. `AudioVideo`, `Office`, `Network`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(pub String);

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An injected source of truth for "is this a known category name".
///
/// Unknown names are never rejected by the codec or the pool — they're
/// logged and retained — but a registry lets a consumer ask.
pub trait CategoryRegistry: Send + Sync {
    /// Whether `name` is a category this registry recognizes.
    fn is_known(&self, name: &str) -> bool;
}

/// A registry that treats every name as known; the default when no
/// taxonomy has been injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAllCategories;

impl CategoryRegistry for AllowAllCategories {
    fn is_known(&self, _name: &str) -> bool {
        true
    }
}

/// A registry covering the freedesktop menu-spec main, additional and
/// reserved categories as built-in default data.
#[derive(Clone, Debug)]
pub struct StaticCategoryRegistry {
    known: BTreeSet<&'static str>,
}

impl Default for StaticCategoryRegistry {
    fn default() -> Self {
        Self {
            known: FREEDESKTOP_CATEGORIES.iter().copied().collect(),
        }
    }
}

impl CategoryRegistry for StaticCategoryRegistry {
    fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }
}

/// Main, additional and reserved category names from the freedesktop
/// menu-spec registry.
pub const FREEDESKTOP_CATEGORIES: &[&str] = &[
    // Main categories.
    "AudioVideo", "Audio", "Video", "Development", "Education", "Game", "Graphics", "Network",
    "Office", "Science", "Settings", "System", "Utility",
    // Additional categories.
    "Building", "Debugger", "IDE", "GUIDesigner", "Profiling", "RevisionControl", "Translation",
    "Calendar", "ContactManagement", "Database", "Dictionary", "Chart", "Email", "Finance",
    "FlowChart", "PDA", "ProjectManagement", "Presentation", "Spreadsheet", "WordProcessor",
    "2DGraphics", "VectorGraphics", "RasterGraphics", "3DGraphics", "Scanning", "OCR",
    "Photography", "Publishing", "Viewer", "TextTools", "DesktopSettings", "HardwareSettings",
    "Printing", "PackageManager", "Dialup", "InstantMessaging", "Chat", "IRCClient", "Feed",
    "HamRadio", "News", "P2P", "RemoteAccess", "Telephony", "TelephonyTools", "VideoConference",
    "WebBrowser", "WebDevelopment", "Midi", "Mixer", "Sequencer", "Tuner", "TV",
    "AudioVideoEditing", "Player", "Recorder", "DiscBurning", "ActionGame", "AdventureGame",
    "ArcadeGame", "BoardGame", "BlocksGame", "CardGame", "KidsGame", "LogicGame", "RolePlaying",
    "Shooter", "Simulation", "SportsGame", "StrategyGame", "Art", "Construction", "Music",
    "Languages", "ArtificialIntelligence", "Astronomy", "Biology", "Chemistry",
    "ComputerScience", "DataVisualization", "Economy", "Electricity", "Geography", "Geology",
    "Geoscience", "History", "Humanities", "ImageProcessing", "Literature", "Maps", "Math",
    "NumericalAnalysis", "MedicalSoftware", "Physics", "Robotics", "Spirituality", "Sports",
    "ParallelComputing", "Amusement", "Archiving", "Compression", "Electronics", "Emulator",
    "Engineering", "FileTools", "FileManager", "TerminalEmulator", "FileTransfer", "Filesystem",
    "Monitor", "Security", "Accessibility", "Calculator", "Clock", "TextEditor", "Documentation",
    "Adult", "Core", "KDE", "GNOME", "XFCE", "GTK", "Qt", "Motif", "Java", "ConsoleOnly",
    // Reserved categories.
    "Screensaver", "TrayIcon", "Applet", "Shell",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_accepts_anything() {
        assert!(AllowAllCategories.is_known("TotallyMadeUp"));
    }

    #[test]
    fn static_registry_knows_main_categories() {
        let registry = StaticCategoryRegistry::default();
        assert!(registry.is_known("AudioVideo"));
        assert!(registry.is_known("Office"));
        assert!(!registry.is_known("TotallyMadeUp"));
    }
}
