//! CSS serializers for shadow sets.
//!
//! Two targets are supported:
//! - **box-shadow**: `0.000px 2.891px 5.782px rgba(0, 0, 0, 0.052),...`
//! - **filter**: `drop-shadow(0.000px 2.891px 2.891px rgba(0, 0, 0, 0.052)) ...`
//!
//! ## Number formatting
//!
//! Every number is written with exactly `precision` digits after a `.`,
//! independent of locale, with trailing zeros kept. Rounding is to the
//! nearest representable decimal of the exact binary value; an exact binary
//! tie (such as `0.125` at two digits) rounds half to even. Only an exact
//! zero is written unsigned: `-0.0` prints as `0.000`, while a small negative
//! value that rounds to zero keeps its sign (`-0.0001` prints as `-0.000`).
//!
//! `precision` is capped at [`MAX_PRECISION`] digits, the same limit as
//! JavaScript's `Number.prototype.toFixed`.
//!
//! ## Box blur vs Gaussian blur
//!
//! `box-shadow` blurs with a box kernel while `drop-shadow()` uses a
//! Gaussian whose apparent spread is about twice as wide for the same
//! radius. [`DropShadowModifiers`] scales blur and alpha so both techniques
//! look alike for the same [`ShadowSet`](crate::layers::ShadowSet).

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::layers::ShadowLayer;

/// Decimal digits used when callers don't ask for anything else.
pub const DEFAULT_PRECISION: usize = 3;

/// Largest number of fractional digits ever written. Larger requests are
/// clamped to it.
pub const MAX_PRECISION: usize = 100;

/// RGB triple used when no color is given.
pub const DEFAULT_RGB: &str = "0, 0, 0";

/// Prefix identifying a raw CSS custom property reference.
const RAW_COLOR_PREFIX: &str = "var(";

/// Compensation applied by [`to_drop_shadow`].
pub const DROP_SHADOW_MODIFIERS: DropShadowModifiers = DropShadowModifiers {
    blur: 0.5,
    alpha: 1.0,
};

// ============================================================================
// Options
// ============================================================================

/// Scale factors applied to each layer before it is written as `drop-shadow()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadowModifiers {
    pub blur: f64,
    pub alpha: f64,
}

impl Default for DropShadowModifiers {
    fn default() -> Self {
        DROP_SHADOW_MODIFIERS
    }
}

/// Shadow color as accepted by the serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowColor<'a> {
    /// `"R, G, B"`; each layer gets `rgba(R, G, B, alpha)`
    Rgb(&'a str),
    /// A complete CSS color reference such as `var(--shadow-color)`,
    /// written verbatim. Layer alpha is not applied.
    Raw(&'a str),
}

impl<'a> ShadowColor<'a> {
    pub fn parse(color: &'a str) -> Self {
        if color.starts_with(RAW_COLOR_PREFIX) {
            ShadowColor::Raw(color)
        } else {
            ShadowColor::Rgb(color)
        }
    }

    /// Resolve an optional caller color, falling back to black.
    pub fn or_default(color: Option<&'a str>) -> Self {
        color.map_or(ShadowColor::Rgb(DEFAULT_RGB), ShadowColor::parse)
    }

    fn write(&self, out: &mut String, alpha: f64, precision: usize) {
        match self {
            ShadowColor::Rgb(rgb) => {
                out.push_str("rgba(");
                out.push_str(rgb);
                out.push_str(", ");
                push_fixed(out, alpha, precision);
                out.push(')');
            }
            ShadowColor::Raw(raw) => out.push_str(raw),
        }
    }
}

impl Default for ShadowColor<'_> {
    fn default() -> Self {
        ShadowColor::Rgb(DEFAULT_RGB)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Format `value` with exactly `precision` fractional digits.
///
/// `precision` above [`MAX_PRECISION`] is clamped to it.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let mut out = String::new();
    push_fixed(&mut out, value, precision);
    out
}

fn push_fixed(out: &mut String, value: f64, precision: usize) {
    // -0.0 prints as "-0.000" otherwise
    let value = if value == 0.0 { 0.0 } else { value };
    // Runtime precision must fit in a u16 or formatting panics
    let precision = precision.min(MAX_PRECISION);
    // Writing to a String cannot fail
    let _ = write!(out, "{value:.precision$}");
}

/// `{x}px {y}px {blur}px {color}`
fn push_layer(
    out: &mut String,
    layer: &ShadowLayer,
    blur: f64,
    alpha: f64,
    precision: usize,
    color: ShadowColor<'_>,
) {
    push_fixed(out, layer.offset_x, precision);
    out.push_str("px ");
    push_fixed(out, layer.offset_y, precision);
    out.push_str("px ");
    push_fixed(out, blur, precision);
    out.push_str("px ");
    color.write(out, alpha, precision);
}

// ============================================================================
// Serializers
// ============================================================================

/// Serialize layers as a `box-shadow` value.
///
/// # Arguments
/// * `layers` - Shadow layers, innermost first
/// * `precision` - Fractional digits for every number, at most [`MAX_PRECISION`]
/// * `color` - `"R, G, B"` triple or a `var(...)` reference; black when `None`
///
/// # Returns
/// Comma-joined layers without spaces between them, e.g.
/// `1.000px 2.000px 3.000px rgba(0, 0, 0, 0.100),4.000px ...`.
/// Empty input gives an empty string.
pub fn to_box_shadow(layers: &[ShadowLayer], precision: usize, color: Option<&str>) -> String {
    let color = ShadowColor::or_default(color);
    let mut out = String::new();
    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_layer(&mut out, layer, layer.blur, layer.alpha, precision, color);
    }
    out
}

/// Serialize layers as a `filter` value of stacked `drop-shadow()` calls,
/// using [`DROP_SHADOW_MODIFIERS`].
///
/// Layers are separated by a single space since `filter` applies its
/// functions in sequence rather than as a list.
pub fn to_drop_shadow(layers: &[ShadowLayer], precision: usize, color: Option<&str>) -> String {
    to_drop_shadow_with(layers, precision, color, DROP_SHADOW_MODIFIERS)
}

/// [`to_drop_shadow`] with explicit blur and alpha compensation.
pub fn to_drop_shadow_with(
    layers: &[ShadowLayer],
    precision: usize,
    color: Option<&str>,
    modifiers: DropShadowModifiers,
) -> String {
    let color = ShadowColor::or_default(color);
    let mut out = String::new();
    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str("drop-shadow(");
        push_layer(
            &mut out,
            layer,
            layer.blur * modifiers.blur,
            layer.alpha * modifiers.alpha,
            precision,
            color,
        );
        out.push(')');
    }
    out
}
