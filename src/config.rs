use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub editor: EditorConfig,
    pub explorer: ExplorerConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PanelConfig {
    /// Width of the explorer pane (in pixels)
    pub explorer_width: f32,
    /// Width of the preview pane (in pixels)
    pub preview_width: f32,
}

/// Edit pane configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditorConfig {
    /// Size of the editor font (in points)
    pub font_size: f32,
}

/// Explorer behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExplorerConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            panel: PanelConfig {
                explorer_width: 200.0,
                preview_width: 400.0,
            },
            editor: EditorConfig { font_size: 14.0 },
            explorer: ExplorerConfig { show_hidden: false },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "markpad") {
            return Some(proj_dirs.config_dir().join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse {}: {e}; using defaults", path.display());
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read {}: {e}; using defaults", path.display());
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(path) = Self::config_path() else {
            return Err("could not determine config directory".into());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.panel.explorer_width, 200.0);
        assert_eq!(config.panel.preview_width, 400.0);
        assert_eq!(config.editor.font_size, 14.0);
        assert!(!config.explorer.show_hidden);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.explorer.show_hidden, deserialized.explorer.show_hidden);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(toml::from_str::<Config>("theme = 3").is_err());
    }
}
