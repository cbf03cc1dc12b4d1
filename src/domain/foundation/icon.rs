//! Icon tag shown next to a matrix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Display icon for a matrix. `BarChart3` is the fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[default]
    BarChart3,
    Car,
    Home,
    Briefcase,
    GraduationCap,
    MapPin,
    Building,
    Plane,
    ShoppingCart,
    Heart,
    Coffee,
}

impl Icon {
    /// All known icons, in picker order.
    pub const ALL: [Icon; 11] = [
        Icon::BarChart3,
        Icon::Car,
        Icon::Home,
        Icon::Briefcase,
        Icon::GraduationCap,
        Icon::MapPin,
        Icon::Building,
        Icon::Plane,
        Icon::ShoppingCart,
        Icon::Heart,
        Icon::Coffee,
    ];

    /// Returns the tag name used in documents.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::BarChart3 => "BarChart3",
            Icon::Car => "Car",
            Icon::Home => "Home",
            Icon::Briefcase => "Briefcase",
            Icon::GraduationCap => "GraduationCap",
            Icon::MapPin => "MapPin",
            Icon::Building => "Building",
            Icon::Plane => "Plane",
            Icon::ShoppingCart => "ShoppingCart",
            Icon::Heart => "Heart",
            Icon::Coffee => "Coffee",
        }
    }

    /// Resolves a tag name, falling back to the default icon when unknown.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(icon = name, "Unknown icon, using default");
            Icon::default()
        })
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| ValidationError::invalid_format("icon", format!("unknown icon '{}'", s)))
    }
}
