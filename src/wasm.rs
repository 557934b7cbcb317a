//! WebAssembly exports for the shadow engine.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Layer Format
//!
//! Layers cross the boundary as a flat `Float64Array`:
//! `[x0, y0, blur0, alpha0, x1, y1, blur1, alpha1, ...]`.
//! A trailing partial layer is ignored.

use wasm_bindgen::prelude::*;

use crate::config::ShadowOverrides;
use crate::css::{to_box_shadow, to_drop_shadow};
use crate::layers::{generate, ShadowSet};
use crate::presets::{box_shadow_for_level, drop_shadow_for_level, effective_preset};

// ============================================================================
// Layer Generator
// ============================================================================

/// Generate shadow layers from a JSON object of overrides.
///
/// # Arguments
/// * `config_json` - e.g. `{"layerCount": 3, "finalOffsetY": 10}`; `"{}"` for defaults
///
/// # Returns
/// Flat array of layer values (length = layer count * 4)
#[wasm_bindgen]
pub fn build_shadow_wasm(config_json: &str) -> Result<Vec<f64>, JsError> {
    let overrides = ShadowOverrides::from_json(config_json)?;
    Ok(generate(&overrides).to_flat())
}

// ============================================================================
// Serializers
// ============================================================================

/// Serialize flat layers as a CSS `box-shadow` value.
///
/// # Arguments
/// * `layers` - Flat layer values
/// * `precision` - Fractional digits for every number
/// * `color` - `"R, G, B"` or `var(...)`; black when omitted
#[wasm_bindgen]
pub fn to_box_shadow_wasm(layers: &[f64], precision: usize, color: Option<String>) -> String {
    to_box_shadow(&ShadowSet::from_flat(layers), precision, color.as_deref())
}

/// Serialize flat layers as a CSS `filter` value of `drop-shadow()` calls.
#[wasm_bindgen]
pub fn to_drop_shadow_wasm(layers: &[f64], precision: usize, color: Option<String>) -> String {
    to_drop_shadow(&ShadowSet::from_flat(layers), precision, color.as_deref())
}

// ============================================================================
// Presets
// ============================================================================

/// `box-shadow` value of an Effective preset level ("none" if out of range).
#[wasm_bindgen]
pub fn effective_box_shadow_wasm(level: usize, precision: usize, color: Option<String>) -> String {
    box_shadow_for_level(&effective_preset(), level, precision, color.as_deref())
}

/// `filter` value of an Effective preset level ("none" if out of range).
#[wasm_bindgen]
pub fn effective_drop_shadow_wasm(level: usize, precision: usize, color: Option<String>) -> String {
    drop_shadow_for_level(&effective_preset(), level, precision, color.as_deref())
}
