// src/control/grip.rs
//! Grip pattern catalog
//!
//! Patterns are selectable labels with no control-loop behavior; the
//! catalog mirrors the hand configurations the client offers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named prosthetic hand configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripPattern {
    Precision,
    Power,
    Tripod,
    Hook,
    Spherical,
}

impl GripPattern {
    /// All selectable patterns in display order
    pub fn all() -> [GripPattern; 5] {
        [
            GripPattern::Precision,
            GripPattern::Power,
            GripPattern::Tripod,
            GripPattern::Hook,
            GripPattern::Spherical,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            GripPattern::Precision => "Precision",
            GripPattern::Power => "Power",
            GripPattern::Tripod => "Tripod",
            GripPattern::Hook => "Hook",
            GripPattern::Spherical => "Spherical",
        }
    }

    /// Short use-case description
    pub fn description(&self) -> &'static str {
        match self {
            GripPattern::Precision => "Fine motor tasks",
            GripPattern::Power => "Strong grip tasks",
            GripPattern::Tripod => "Writing & tools",
            GripPattern::Hook => "Carrying objects",
            GripPattern::Spherical => "Round objects",
        }
    }
}

impl Default for GripPattern {
    fn default() -> Self {
        GripPattern::Precision
    }
}

impl std::fmt::Display for GripPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GripPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precision" => Ok(GripPattern::Precision),
            "power" => Ok(GripPattern::Power),
            "tripod" => Ok(GripPattern::Tripod),
            "hook" => Ok(GripPattern::Hook),
            "spherical" => Ok(GripPattern::Spherical),
            other => Err(format!("unknown grip pattern: {}", other)),
        }
    }
}
