//! Configuration for a list and the screen that displays it.
//!
//! Every key is optional; missing keys fall back to [`ListConfig::default`].
//!
//! ```toml
//! title = "Scores"
//! initial_items = [3, 1, 4, 1, 5]
//! value_min = -10
//! value_max = 10
//! ```

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::logging::targets;

/// Contents of a freshly constructed list when nothing else is given.
pub fn default_items() -> Vec<i64> {
    (0..10).collect()
}

/// Settings for an [`ObservableList`](crate::ObservableList) and its screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Items the list starts with.
    pub initial_items: Vec<i64>,
    /// Title shown above the list.
    pub title: String,
    /// Smallest value a randomly added item may take.
    pub value_min: i64,
    /// Largest value a randomly added item may take.
    pub value_max: i64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_items: default_items(),
            title: "Items".to_string(),
            value_min: 0,
            value_max: 100,
        }
    }
}

impl ListConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(
            target: targets::CONFIG,
            items = config.initial_items.len(),
            title = %config.title,
            "loaded list configuration"
        );
        Ok(config)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.value_min > self.value_max {
            return Err(Error::config(format!(
                "value_min ({}) is greater than value_max ({})",
                self.value_min, self.value_max
            )));
        }
        Ok(())
    }

    /// The range randomly added values are drawn from.
    pub fn value_range(&self) -> RangeInclusive<i64> {
        self.value_min..=self.value_max
    }
}
