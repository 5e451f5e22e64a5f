//! Named spring presets
//!
//! Each preset is self-describing, carrying its canonical name, its aliases
//! and the constants it stands for. The registry indexes presets under every
//! name they answer to, so configuration files and the command line can
//! refer to springs by name instead of repeating raw constants.

use crate::physics::math::Scalar;
use crate::physics::spring::SpringParameters;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A named set of spring constants
#[derive(Debug, Clone, PartialEq)]
pub struct SpringPreset {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub parameters: SpringParameters,
}

impl SpringPreset {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        spring: Scalar,
        friction: Scalar,
    ) -> Self {
        Self {
            name,
            aliases,
            description,
            parameters: SpringParameters::new(spring, friction),
        }
    }
}

/// Errors raised when resolving a preset by name
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    #[error("Unknown spring preset: '{name}'. Available presets: {available}. Aliases: {aliases}")]
    Unknown {
        name: String,
        available: String,
        aliases: String,
    },
}

/// Presets shipped with the crate
pub fn standard_presets() -> Vec<SpringPreset> {
    vec![
        SpringPreset::new(
            "default",
            &["ui", "standard"],
            "Slightly underdamped spring tuned for UI motion",
            250.0,
            28.0,
        ),
        SpringPreset::new(
            "gentle",
            &["soft"],
            "Low stiffness with a soft, unhurried settle",
            120.0,
            14.0,
        ),
        SpringPreset::new(
            "wobbly",
            &["bouncy"],
            "Lightly damped spring with visible overshoot",
            180.0,
            12.0,
        ),
        SpringPreset::new(
            "stiff",
            &["snappy"],
            "High stiffness for quick, tight transitions",
            400.0,
            30.0,
        ),
        SpringPreset::new(
            "slow",
            &[],
            "Overdamped spring that eases in without overshoot",
            280.0,
            60.0,
        ),
        SpringPreset {
            name: "critical",
            aliases: &["critically_damped"],
            description: "Default stiffness with critical damping",
            parameters: SpringParameters::critically_damped(250.0),
        },
    ]
}

/// Registry resolving preset names and aliases
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    /// Maps names (canonical and aliases) to presets
    presets: HashMap<String, SpringPreset>,
}

impl PresetRegistry {
    /// Create an empty registry without any pre-registered presets.
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
        }
    }

    /// Register all standard presets.
    ///
    /// Returns self for method chaining.
    pub fn with_standard_presets(mut self) -> Self {
        for preset in standard_presets() {
            self.register_preset(preset);
        }
        self
    }

    /// Register a single preset.
    ///
    /// Returns self for method chaining.
    pub fn with_preset(mut self, preset: SpringPreset) -> Self {
        self.register_preset(preset);
        self
    }

    /// Register a preset under its name and every alias, replacing earlier
    /// entries with the same keys.
    pub fn register_preset(&mut self, preset: SpringPreset) {
        for alias in preset.aliases {
            self.presets.insert(alias.to_string(), preset.clone());
        }
        self.presets.insert(preset.name.to_string(), preset);
    }

    pub fn get(&self, name: &str) -> Result<&SpringPreset, PresetError> {
        self.presets.get(name).ok_or_else(|| {
            let alias_names: Vec<String> =
                self.list_aliases().into_iter().map(|(a, _)| a).collect();
            PresetError::Unknown {
                name: name.to_string(),
                available: self.list_available().join(", "),
                aliases: alias_names.join(", "),
            }
        })
    }

    /// Constants of the named preset
    pub fn parameters(&self, name: &str) -> Result<SpringParameters, PresetError> {
        self.get(name).map(|preset| preset.parameters)
    }

    /// Sorted canonical names
    pub fn list_available(&self) -> Vec<String> {
        let canonical_names: HashSet<&str> =
            self.presets.values().map(|preset| preset.name).collect();

        let mut names: Vec<String> = canonical_names.into_iter().map(String::from).collect();
        names.sort();
        names
    }

    /// Sorted `(alias, canonical name)` pairs
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .presets
            .iter()
            .filter(|(key, preset)| key.as_str() != preset.name)
            .map(|(key, preset)| (key.clone(), preset.name.to_string()))
            .collect();

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new().with_standard_presets()
    }
}
