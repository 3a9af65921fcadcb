use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed accent palette, in the order shown by `theme --list`.
pub const THEMES: &[Theme] = &[
    Theme::Primary,
    Theme::Success,
    Theme::Danger,
    Theme::Warning,
    Theme::Info,
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(rename = "date")]
    pub due: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Filter {
    All,
    Pending,
    Done,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Primary,
    Success,
    Danger,
    Warning,
    Info,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

pub fn default_theme() -> Theme {
    Theme::Primary
}

pub fn default_mode() -> Mode {
    Mode::Light
}

/// Persisted display preferences. Field names match the storage contract:
/// `theme` holds a palette name, `darkMode` holds "dark" or "light".
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default = "default_theme")]
    pub theme: Theme,
    #[serde(rename = "darkMode", default = "default_mode")]
    pub dark_mode: Mode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            dark_mode: default_mode(),
        }
    }
}
