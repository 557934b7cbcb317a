//! Layered Shadow
//!
//! Multi-layer CSS shadows whose per-layer offset, blur and opacity follow
//! cubic Bézier easing curves instead of a straight line, giving smoother,
//! more natural depth than a single shadow or linear stacking.
//!
//! Usable from Rust directly, from Python via PyO3 and from JavaScript via
//! wasm-bindgen.
//!
//! ## Pipeline
//! 1. [`config`] - full configuration with defaults, plus partial overrides
//! 2. [`layers`] - the layer generator, one `(x, y, blur, alpha)` per layer
//! 3. [`css`] - `box-shadow` and `filter: drop-shadow()` serializers
//!
//! ```
//! use layered_shadow::{generate, to_box_shadow, ShadowOverrides};
//!
//! let layers = generate(&ShadowOverrides {
//!     layer_count: Some(3),
//!     final_offset_y: Some(10.0),
//!     final_blur: Some(15.0),
//!     final_alpha: Some(0.25),
//!     ..Default::default()
//! });
//! let css = to_box_shadow(&layers, 3, None);
//! assert!(css.ends_with("0.000px 10.000px 15.000px rgba(0, 0, 0, 0.250)"));
//! ```
//!
//! ## Around the engine
//! - [`presets`] - elevation tables (generated and literal comparison sets)
//! - [`stylesheet`] - whole stylesheets and Tailwind utility maps from a preset
//!
//! Everything here is pure and synchronous: identical inputs always give
//! identical strings, and all functions can be called from any thread.

pub mod config;
pub mod css;
pub mod easing;
pub mod error;
pub mod layers;
pub mod presets;
pub mod stylesheet;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{ShadowConfig, ShadowOverrides};
pub use css::{
    format_fixed, to_box_shadow, to_drop_shadow, to_drop_shadow_with, DropShadowModifiers, ShadowColor,
    DEFAULT_PRECISION, DROP_SHADOW_MODIFIERS, MAX_PRECISION,
};
pub use easing::{BezierEasing, EasingCurve};
pub use error::{Error, Result};
pub use layers::{build_shadow, generate, ShadowLayer, ShadowSet};
pub use presets::{effective_preset, generate_from_preset, GeneratedShadow, PresetName, ShadowPreset};
pub use stylesheet::{generate_css, utility_classes, CssFormat, GenerateCssOptions};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::config::{ShadowConfig, ShadowOverrides};
    use crate::css;
    use crate::easing::EasingCurve;
    use crate::error::Error;
    use crate::layers::{self, ShadowSet};
    use crate::presets;
    use crate::stylesheet::{self, CssFormat, GenerateCssOptions};

    type Layer = (f64, f64, f64, f64);
    type Curve = (f64, f64, f64, f64);

    impl From<Error> for PyErr {
        fn from(err: Error) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    fn curve(c: Option<Curve>) -> Option<EasingCurve> {
        c.map(|(x1, y1, x2, y2)| EasingCurve::new(x1, y1, x2, y2))
    }

    fn to_set(layers: Vec<Layer>) -> ShadowSet {
        layers.into_iter().map(Into::into).collect()
    }

    // ========================================================================
    // Layer Generator
    // ========================================================================

    /// Generate shadow layers as `(offset_x, offset_y, blur, alpha)` tuples.
    ///
    /// Unset arguments use the defaults (4 layers, alpha 0.2, default curves).
    /// Curves are `(x1, y1, x2, y2)` tuples.
    #[pyfunction]
    #[pyo3(signature = (
        layer_count=None, final_offset_x=None, final_offset_y=None, offset_easing=None,
        final_blur=None, blur_easing=None, final_alpha=None, alpha_easing=None, reverse_alpha=None
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn build_shadow(
        layer_count: Option<usize>,
        final_offset_x: Option<f64>,
        final_offset_y: Option<f64>,
        offset_easing: Option<Curve>,
        final_blur: Option<f64>,
        blur_easing: Option<Curve>,
        final_alpha: Option<f64>,
        alpha_easing: Option<Curve>,
        reverse_alpha: Option<bool>,
    ) -> Vec<Layer> {
        let overrides = ShadowOverrides {
            layer_count,
            final_offset_x,
            final_offset_y,
            offset_easing: curve(offset_easing),
            final_blur,
            blur_easing: curve(blur_easing),
            final_alpha,
            alpha_easing: curve(alpha_easing),
            reverse_alpha,
        };
        layers::build_shadow(&overrides.apply(&ShadowConfig::default()))
            .iter()
            .map(|l| (l.offset_x, l.offset_y, l.blur, l.alpha))
            .collect()
    }

    /// Generate shadow layers from a JSON object of overrides.
    #[pyfunction]
    pub fn build_shadow_json(config: &str) -> PyResult<Vec<Layer>> {
        let overrides = ShadowOverrides::from_json(config)?;
        Ok(layers::generate(&overrides)
            .iter()
            .map(|l| (l.offset_x, l.offset_y, l.blur, l.alpha))
            .collect())
    }

    // ========================================================================
    // Serializers
    // ========================================================================

    /// Serialize layers as a CSS `box-shadow` value.
    #[pyfunction]
    #[pyo3(signature = (layers, precision=3, color=None))]
    pub fn to_box_shadow(layers: Vec<Layer>, precision: usize, color: Option<&str>) -> String {
        css::to_box_shadow(&to_set(layers), precision, color)
    }

    /// Serialize layers as a CSS `filter` value of `drop-shadow()` calls.
    #[pyfunction]
    #[pyo3(signature = (layers, precision=3, color=None))]
    pub fn to_drop_shadow(layers: Vec<Layer>, precision: usize, color: Option<&str>) -> String {
        css::to_drop_shadow(&to_set(layers), precision, color)
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// `box-shadow` value of an Effective preset level ("none" if out of range).
    #[pyfunction]
    #[pyo3(signature = (level, precision=3, color=None))]
    pub fn box_shadow_for_level(level: usize, precision: usize, color: Option<&str>) -> String {
        presets::box_shadow_for_level(&presets::effective_preset(), level, precision, color)
    }

    /// `filter` value of an Effective preset level ("none" if out of range).
    #[pyfunction]
    #[pyo3(signature = (level, precision=3, color=None))]
    pub fn drop_shadow_for_level(level: usize, precision: usize, color: Option<&str>) -> String {
        presets::drop_shadow_for_level(&presets::effective_preset(), level, precision, color)
    }

    /// Stylesheet for the Effective preset.
    ///
    /// `format` is "class" or "css-variable".
    #[pyfunction]
    #[pyo3(signature = (format="class", prefix="effective", precision=3))]
    pub fn generate_css(format: &str, prefix: &str, precision: usize) -> PyResult<String> {
        let options = GenerateCssOptions {
            format: format.parse::<CssFormat>()?,
            prefix: prefix.to_string(),
            precision,
        };
        Ok(stylesheet::generate_css(&presets::effective_preset(), &options))
    }

    /// Layered Shadow extension module
    #[pymodule]
    pub fn layered_shadow(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Layer generator
        m.add_function(wrap_pyfunction!(build_shadow, m)?)?;
        m.add_function(wrap_pyfunction!(build_shadow_json, m)?)?;

        // Serializers
        m.add_function(wrap_pyfunction!(to_box_shadow, m)?)?;
        m.add_function(wrap_pyfunction!(to_drop_shadow, m)?)?;

        // Presets
        m.add_function(wrap_pyfunction!(box_shadow_for_level, m)?)?;
        m.add_function(wrap_pyfunction!(drop_shadow_for_level, m)?)?;
        m.add_function(wrap_pyfunction!(generate_css, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::layered_shadow;
