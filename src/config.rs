//! Layout content and palettes, loaded from RON.

use crate::assets::{Assets, LAYOUT_RON};
use crate::theme::Themes;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating a layout config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("layout.ron not found in embedded assets")]
    BuiltinMissing,
    #[error("invalid UTF-8 in layout.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse layout config: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("failed to serialize layout config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("layout config has no menu items")]
    EmptyMenu,
    #[error("duplicate menu item id '{0}'")]
    DuplicateMenuItem(String),
    #[error("default section '{0}' is not a menu item")]
    UnknownDefaultSection(String),
}

/// An entry of the side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: String,
}

/// A nav bar or footer link. Links without a url are inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An entry of the notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    /// Human readable age, e.g. "2 minutes ago"
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub title: String,
    pub default_section: String,
    pub menu: Vec<MenuItem>,
    pub nav_links: Vec<Link>,
    pub footer_links: Vec<Link>,
    pub copyright: String,
    pub welcome_heading: String,
    pub welcome_text: String,
    pub notifications: Vec<Notification>,
    pub themes: Themes,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "My Website".to_owned(),
            default_section: "dashboard".to_owned(),
            menu: Vec::new(),
            nav_links: Vec::new(),
            footer_links: Vec::new(),
            copyright: String::new(),
            welcome_heading: String::new(),
            welcome_text: String::new(),
            notifications: Vec::new(),
            themes: Themes::default(),
        }
    }
}

impl LayoutConfig {
    /// Loads the config embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        let file = Assets::get(LAYOUT_RON).ok_or(ConfigError::BuiltinMissing)?;
        let ron_string = std::str::from_utf8(&file.data)?;
        Self::from_ron_str(ron_string)
    }

    /// Parses and validates a RON config.
    pub fn from_ron_str(ron_string: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = ron::from_str(ron_string)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ron_string = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&ron_string)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateMenuItem(item.id.clone()));
            }
        }

        if !seen.contains(self.default_section.as_str()) {
            return Err(ConfigError::UnknownDefaultSection(
                self.default_section.clone(),
            ));
        }

        Ok(())
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    /// Display label of a section, if the id names a menu item.
    pub fn section_label(&self, id: &str) -> Option<&str> {
        self.menu_item(id).map(|item| item.label.as_str())
    }

    /// Returns `requested` when it names a menu item, otherwise the default
    /// section.
    pub fn resolve_section(&self, requested: Option<&str>) -> String {
        match requested {
            Some(id) if self.menu_item(id).is_some() => id.to_owned(),
            Some(id) => {
                log::warn!(
                    "Unknown section '{id}', falling back to '{}'",
                    self.default_section
                );
                self.default_section.clone()
            }
            None => self.default_section.clone(),
        }
    }

    /// Serializes the config in the same layout as the built-in file.
    pub fn to_ron_pretty(&self) -> Result<String, ConfigError> {
        let pretty_config = PrettyConfig::new()
            .depth_limit(6)
            .indentor("  ".to_string())
            .struct_names(false)
            .enumerate_arrays(false);

        Ok(ron::ser::to_string_pretty(self, pretty_config)?)
    }
}
