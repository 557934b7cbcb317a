//! Stylesheet generation from presets.
//!
//! Renders every level of a [`ShadowPreset`] as ready-to-ship CSS, either as
//! utility classes or as custom properties on `:root`, and builds the
//! selector map a Tailwind plugin hands to `addUtilities`.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::DEFAULT_PRECISION;
use crate::error::Error;
use crate::presets::{generate_from_preset, ShadowPreset};

/// Name fragment used in class and variable names unless overridden.
pub const DEFAULT_PREFIX: &str = "effective";

/// Shape of the generated stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFormat {
    /// `.shadow-{prefix}-{n} { box-shadow: ...; }`
    #[default]
    Class,
    /// `:root { --shadow-{prefix}-{n}: ...; }`
    CssVariable,
}

impl FromStr for CssFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(CssFormat::Class),
            "css-variable" => Ok(CssFormat::CssVariable),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Options for [`generate_css`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCssOptions {
    pub format: CssFormat,
    pub prefix: String,
    pub precision: usize,
}

impl Default for GenerateCssOptions {
    fn default() -> Self {
        Self {
            format: CssFormat::Class,
            prefix: DEFAULT_PREFIX.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Render a preset as a stylesheet.
///
/// # Returns
/// CSS text starting with a comment naming the preset, followed by one
/// box-shadow and one drop-shadow declaration per level.
pub fn generate_css(preset: &ShadowPreset, options: &GenerateCssOptions) -> String {
    tracing::debug!(preset = %preset.name, format = ?options.format, "generating stylesheet");

    let shadows = generate_from_preset(preset, options.precision);
    let prefix = &options.prefix;
    let mut css = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(css, "/* {} shadows: {} */", preset.name, preset.description);

    match options.format {
        CssFormat::Class => {
            for shadow in &shadows {
                let _ = writeln!(
                    css,
                    ".shadow-{prefix}-{} {{ box-shadow: {}; }}",
                    shadow.level, shadow.box_shadow
                );
            }
            for shadow in &shadows {
                let _ = writeln!(
                    css,
                    ".drop-shadow-{prefix}-{} {{ filter: {}; }}",
                    shadow.level, shadow.drop_shadow
                );
            }
        }
        CssFormat::CssVariable => {
            css.push_str(":root {\n");
            for shadow in &shadows {
                let _ = writeln!(css, "  --shadow-{prefix}-{}: {};", shadow.level, shadow.box_shadow);
            }
            for shadow in &shadows {
                let _ = writeln!(
                    css,
                    "  --drop-shadow-{prefix}-{}: {};",
                    shadow.level, shadow.drop_shadow
                );
            }
            css.push_str("}\n");
        }
    }

    css
}

/// Utility classes keyed by selector, each mapping a CSS property to its value.
pub type UtilityClasses = BTreeMap<String, BTreeMap<&'static str, String>>;

/// Build `.shadow-{prefix}-{n}` and `.drop-shadow-{prefix}-{n}` utilities.
///
/// Serialize the result with `serde_json` to hand it to a Tailwind plugin.
pub fn utility_classes(preset: &ShadowPreset, prefix: &str, precision: usize) -> UtilityClasses {
    let mut utilities = UtilityClasses::new();
    for shadow in generate_from_preset(preset, precision) {
        utilities.insert(
            format!(".shadow-{prefix}-{}", shadow.level),
            BTreeMap::from([("box-shadow", shadow.box_shadow)]),
        );
        utilities.insert(
            format!(".drop-shadow-{prefix}-{}", shadow.level),
            BTreeMap::from([("filter", shadow.drop_shadow)]),
        );
    }
    utilities
}
