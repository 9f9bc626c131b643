//! Drawer configuration persistence
//!
//! Stores preferences in `~/.config/drawer/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom::Selector;

/// Discovery selectors and names coupling the drawer to its host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// The sized panel: carries the stored width, the closed marker and
    /// fires transition-end
    pub panel: Selector,
    /// Element that receives the drag handle; its parent is the container
    /// whose computed width seeds a drag session
    pub handle_host: Selector,
    /// Region whose leading padding tracks the panel's visible width
    pub content: Selector,
    /// Class present on the panel while it is closed
    pub closed_class: String,
    /// Attribute holding the last explicit width
    pub width_attribute: String,
    /// Class given to the drag handle element
    pub handle_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            panel: Selector::class("q-drawer"),
            handle_host: Selector::class("nicegui-drawer"),
            content: Selector::class("q-page-container"),
            closed_class: "q-layout--prevent-focus".to_string(),
            width_attribute: "data-drawer-width".to_string(),
            handle_class: "drawer-resizer".to_string(),
        }
    }
}

impl Selectors {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("closed_class", &self.closed_class),
            ("width_attribute", &self.width_attribute),
            ("handle_class", &self.handle_class),
        ] {
            if value.trim().is_empty() {
                return Err(format!("selectors.{} must not be empty", field));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(format!(
                    "selectors.{} must be a single name, got '{}'",
                    field, value
                ));
            }
        }
        Ok(())
    }
}

/// Drawer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub selectors: Selectors,

    /// Lower bound applied while dragging (unclamped when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i32>,

    /// Upper bound applied while dragging (unclamped when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,

    /// Only write the panel width at page-ready when the panel is open,
    /// the same way transition-end does
    pub gate_width_on_load: bool,

    /// Keep only the latest pointer move and apply it once per frame
    pub coalesce_moves: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            min_width: None,
            max_width: None,
            gate_width_on_load: false,
            coalesce_moves: false,
        }
    }
}

impl DrawerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse and validate config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.selectors.validate()?;
        if let (Some(min), Some(max)) = (self.min_width, self.max_width) {
            if min > max {
                return Err(format!(
                    "min_width ({}) is greater than max_width ({})",
                    min, max
                ));
            }
        }
        Ok(())
    }

    /// Apply the optional drag clamp
    pub fn clamp_width(&self, width: i32) -> i32 {
        let width = self.min_width.map_or(width, |min| width.max(min));
        self.max_width.map_or(width, |max| width.min(max))
    }
}
