use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::direction::{Direction, SortOrder};

/// Record navigation configuration
///
/// Every key is optional in the file; missing keys fall back to the
/// defaults below, so a host can override just `order_column` and keep
/// the stock directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Column records are ordered by when resolving neighbors
    #[serde(default = "default_order_column")]
    pub order_column: String,
    /// Sort order of the candidate set for the previous action
    #[serde(default = "default_previous_direction")]
    pub previous_direction: SortOrder,
    /// Sort order of the candidate set for the next action
    #[serde(default = "default_next_direction")]
    pub next_direction: SortOrder,
}

fn default_order_column() -> String {
    "id".to_string()
}

fn default_previous_direction() -> SortOrder {
    Direction::Previous.default_order()
}

fn default_next_direction() -> SortOrder {
    Direction::Next.default_order()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            order_column: default_order_column(),
            previous_direction: default_previous_direction(),
            next_direction: default_next_direction(),
        }
    }
}

impl NavConfig {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Create default config file
            let config = NavConfig::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: NavConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "record-nav")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("record-nav.toml"))
    }

    /// Configured sort order for one navigation direction
    #[must_use]
    pub fn sort_order(&self, direction: Direction) -> SortOrder {
        match direction {
            Direction::Previous => self.previous_direction,
            Direction::Next => self.next_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.order_column, "id");
        assert_eq!(config.previous_direction, SortOrder::Desc);
        assert_eq!(config.next_direction, SortOrder::Asc);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let config: NavConfig = toml::from_str("order_column = \"number\"").unwrap();
        assert_eq!(config.order_column, "number");
        assert_eq!(config.previous_direction, SortOrder::Desc);
        assert_eq!(config.next_direction, SortOrder::Asc);
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: NavConfig = toml::from_str("").unwrap();
        assert_eq!(config.order_column, "id");
    }

    #[test]
    fn test_direction_override_parses() {
        let config: NavConfig =
            toml::from_str("previous_direction = \"asc\"\nnext_direction = \"desc\"").unwrap();
        assert_eq!(config.previous_direction, SortOrder::Asc);
        assert_eq!(config.next_direction, SortOrder::Desc);
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let result = toml::from_str::<NavConfig>("previous_direction = \"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_order_lookup() {
        let config = NavConfig::default();
        assert_eq!(config.sort_order(Direction::Previous), SortOrder::Desc);
        assert_eq!(config.sort_order(Direction::Next), SortOrder::Asc);

        let flipped = NavConfig {
            previous_direction: SortOrder::Asc,
            ..NavConfig::default()
        };
        assert_eq!(flipped.sort_order(Direction::Previous), SortOrder::Asc);
    }
}
