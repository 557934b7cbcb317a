//! Elevation presets.
//!
//! A preset maps elevation levels (0 = flat, higher = further above the
//! surface) to shadow configurations. The generated "Effective" preset feeds
//! the layer generator; the Tailwind and Josh Comeau tables are literal CSS
//! kept for side-by-side comparison.
//!
//! Level lookups outside a table return the `"none"` sentinel and never
//! reach the generator.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ShadowOverrides, DEFAULT_ALPHA_EASING, DEFAULT_BLUR_EASING, DEFAULT_OFFSET_EASING};
use crate::css::{to_box_shadow, to_drop_shadow};
use crate::error::Error;
use crate::layers::build_shadow;

/// CSS value used for levels that draw no shadow.
pub const NO_SHADOW: &str = "none";

/// Display names of the Effective preset levels, indexed by elevation.
pub const SHADOW_LEVEL_NAMES: [&str; 6] = ["none", "subtle", "low", "medium", "high", "highest"];

// ============================================================================
// Generated presets
// ============================================================================

/// A generated preset: shared base overrides plus one override per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowPreset {
    pub name: String,
    pub description: String,
    /// Applied to every level before the level's own overrides
    pub base: ShadowOverrides,
    /// Index = elevation level
    pub elevations: Vec<ShadowOverrides>,
}

impl ShadowPreset {
    pub fn levels(&self) -> usize {
        self.elevations.len()
    }

    /// Fully resolved overrides for `level`, or `None` when out of range.
    pub fn level(&self, level: usize) -> Option<ShadowOverrides> {
        self.elevations.get(level).map(|e| self.base.merge(e))
    }
}

fn elevation(offset_y: f64, blur: f64) -> ShadowOverrides {
    ShadowOverrides {
        final_offset_y: Some(offset_y),
        final_blur: Some(blur),
        ..Default::default()
    }
}

/// The default preset: four layers, six levels.
pub fn effective_preset() -> ShadowPreset {
    ShadowPreset {
        name: "Effective".to_string(),
        description: "Multi-layered shadows with Bézier-curved transitions for natural depth"
            .to_string(),
        base: ShadowOverrides {
            layer_count: Some(4),
            final_offset_x: Some(0.0),
            offset_easing: Some(DEFAULT_OFFSET_EASING),
            blur_easing: Some(DEFAULT_BLUR_EASING),
            alpha_easing: Some(DEFAULT_ALPHA_EASING),
            final_alpha: Some(0.2),
            reverse_alpha: Some(false),
            ..Default::default()
        },
        elevations: vec![
            ShadowOverrides {
                final_alpha: Some(0.0),
                ..elevation(0.0, 0.0)
            },
            elevation(1.0, 2.0),
            elevation(3.0, 4.0),
            elevation(6.0, 10.0),
            elevation(10.0, 16.0),
            elevation(14.0, 24.0),
        ],
    }
}

/// Both CSS renditions of one preset level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedShadow {
    pub level: usize,
    pub name: String,
    pub box_shadow: String,
    pub drop_shadow: String,
}

fn level_name(level: usize) -> String {
    SHADOW_LEVEL_NAMES
        .get(level)
        .map_or_else(|| level.to_string(), |name| (*name).to_string())
}

fn render_level(overrides: &ShadowOverrides, precision: usize, color: Option<&str>) -> (String, String) {
    let config = overrides.resolve();
    if config.final_alpha == 0.0 {
        return (NO_SHADOW.to_string(), NO_SHADOW.to_string());
    }
    let layers = build_shadow(&config);
    (
        to_box_shadow(&layers, precision, color),
        to_drop_shadow(&layers, precision, color),
    )
}

/// Render every level of `preset`.
///
/// Levels whose final alpha is zero render as `"none"`. Levels are
/// rendered in parallel; the output keeps level order.
pub fn generate_from_preset(preset: &ShadowPreset, precision: usize) -> Vec<GeneratedShadow> {
    tracing::debug!(preset = %preset.name, levels = preset.levels(), "expanding preset");

    preset
        .elevations
        .par_iter()
        .enumerate()
        .map(|(level, elevation)| {
            let (box_shadow, drop_shadow) = render_level(&preset.base.merge(elevation), precision, None);
            GeneratedShadow {
                level,
                name: level_name(level),
                box_shadow,
                drop_shadow,
            }
        })
        .collect()
}

/// `box-shadow` value for one level, or `"none"` when `level` is out of range.
pub fn box_shadow_for_level(preset: &ShadowPreset, level: usize, precision: usize, color: Option<&str>) -> String {
    match preset.level(level) {
        Some(overrides) => render_level(&overrides, precision, color).0,
        None => {
            tracing::debug!(preset = %preset.name, level, "elevation out of range");
            NO_SHADOW.to_string()
        }
    }
}

/// `filter` value for one level, or `"none"` when `level` is out of range.
pub fn drop_shadow_for_level(preset: &ShadowPreset, level: usize, precision: usize, color: Option<&str>) -> String {
    match preset.level(level) {
        Some(overrides) => render_level(&overrides, precision, color).1,
        None => {
            tracing::debug!(preset = %preset.name, level, "elevation out of range");
            NO_SHADOW.to_string()
        }
    }
}

// ============================================================================
// Literal comparison tables
// ============================================================================

/// A third-party shadow scale stored as literal CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    /// `(level name, box-shadow value)`, index = elevation level
    pub levels: &'static [(&'static str, &'static str)],
    /// Named values outside the elevation scale, such as inset shadows
    pub extras: &'static [(&'static str, &'static str)],
}

impl StaticPreset {
    /// `box-shadow` value for `level`, or `"none"` when out of range.
    pub fn box_shadow(&self, level: usize) -> &'static str {
        self.levels.get(level).map_or(NO_SHADOW, |&(_, value)| value)
    }

    /// Look up a value by its name in the levels, then in the extras.
    pub fn named(&self, name: &str) -> Option<&'static str> {
        self.levels
            .iter()
            .chain(self.extras)
            .find(|(key, _)| *key == name)
            .map(|&(_, value)| value)
    }
}

/// Tailwind CSS v3 `shadow-*` utilities.
pub const TAILWIND_ORIGINAL: StaticPreset = StaticPreset {
    name: "Tailwind CSS",
    description: "Original Tailwind CSS v3 shadow utilities",
    url: "https://tailwindcss.com/docs/box-shadow",
    levels: &[
        ("none", "none"),
        ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        ("DEFAULT", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
        ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
        ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
        ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
        ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ],
    extras: &[("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)")],
};

/// Layered shadows from "Designing Beautiful Shadows in CSS".
pub const JOSH_COMEAU: StaticPreset = StaticPreset {
    name: "Josh Comeau",
    description: "Layered shadows from 'Designing Beautiful Shadows in CSS' article",
    url: "https://www.joshwcomeau.com/css/designing-shadows/",
    levels: &[
        ("none", "none"),
        (
            "low",
            "0px 0.5px 0.6px hsl(0deg 0% 0% / 0.36), \
             0px 0.8px 0.9px -1.2px hsl(0deg 0% 0% / 0.36), \
             0px 2px 2.3px -2.5px hsl(0deg 0% 0% / 0.36)",
        ),
        (
            "medium",
            "0px 0.6px 0.7px hsl(0deg 0% 0% / 0.34), \
             0px 1.3px 1.5px -0.8px hsl(0deg 0% 0% / 0.34), \
             0px 3.2px 3.6px -1.7px hsl(0deg 0% 0% / 0.34), \
             0px 7.7px 8.7px -2.5px hsl(0deg 0% 0% / 0.34)",
        ),
        (
            "high",
            "0px 0.7px 0.8px hsl(0deg 0% 0% / 0.37), \
             0px 1.8px 2px -0.4px hsl(0deg 0% 0% / 0.37), \
             0px 3.3px 3.7px -0.7px hsl(0deg 0% 0% / 0.37), \
             0px 5.4px 6.1px -1.1px hsl(0deg 0% 0% / 0.37), \
             0px 8.6px 9.7px -1.4px hsl(0deg 0% 0% / 0.37), \
             0px 13.5px 15.2px -1.8px hsl(0deg 0% 0% / 0.37), \
             0px 20.7px 23.3px -2.1px hsl(0deg 0% 0% / 0.37), \
             0px 31px 34.9px -2.5px hsl(0deg 0% 0% / 0.37)",
        ),
    ],
    extras: &[],
};

// ============================================================================
// Preset selection
// ============================================================================

/// Names of the built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    Effective,
    Tailwind,
    JoshComeau,
}

impl PresetName {
    pub const ALL: [PresetName; 3] = [PresetName::Effective, PresetName::Tailwind, PresetName::JoshComeau];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Effective => "effective",
            PresetName::Tailwind => "tailwind",
            PresetName::JoshComeau => "josh-comeau",
        }
    }

    /// `box-shadow` values of every level of the named preset.
    pub fn box_shadows(&self, precision: usize) -> Vec<String> {
        match self {
            PresetName::Effective => generate_from_preset(&effective_preset(), precision)
                .into_iter()
                .map(|s| s.box_shadow)
                .collect(),
            PresetName::Tailwind => static_values(&TAILWIND_ORIGINAL),
            PresetName::JoshComeau => static_values(&JOSH_COMEAU),
        }
    }
}

fn static_values(preset: &StaticPreset) -> Vec<String> {
    preset.levels.iter().map(|(_, value)| (*value).to_string()).collect()
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "effective" => Ok(PresetName::Effective),
            "tailwind" => Ok(PresetName::Tailwind),
            "josh-comeau" | "joshComeau" => Ok(PresetName::JoshComeau),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }
}
