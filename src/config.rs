//! Shadow configuration and partial overrides.
//!
//! [`ShadowConfig`] is the complete input of the layer generator. Callers
//! usually only care about a few fields, so [`ShadowOverrides`] carries the
//! same fields as options and is applied field by field over a base config
//! (normally [`ShadowConfig::default`]). The structure is flat: there is no
//! deep merge.
//!
//! Both types use camelCase keys when (de)serialized, so JSON produced by a
//! web playground can be fed in directly.

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;
use crate::error::Result;

/// Default curve for the offset channel.
pub const DEFAULT_OFFSET_EASING: EasingCurve = EasingCurve::new(0.7, 0.1, 0.9, 0.3);

/// Default curve for the blur channel.
pub const DEFAULT_BLUR_EASING: EasingCurve = DEFAULT_OFFSET_EASING;

/// Default curve for the alpha channel.
pub const DEFAULT_ALPHA_EASING: EasingCurve = EasingCurve::new(0.1, 0.5, 0.9, 0.5);

/// Full set of parameters for one multi-layer shadow.
///
/// No validation is performed: a zero layer count yields an empty set and
/// negative targets yield negative values. Missing keys take their default
/// while unknown keys are rejected, as with [`ShadowOverrides`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ShadowConfig {
    /// Number of stacked layers
    #[serde(alias = "shadowLayers")]
    pub layer_count: usize,

    /// Horizontal offset of the outermost layer, in px
    pub final_offset_x: f64,
    /// Vertical offset of the outermost layer, in px
    pub final_offset_y: f64,
    pub offset_easing: EasingCurve,

    /// Blur radius of the outermost layer, in px
    pub final_blur: f64,
    pub blur_easing: EasingCurve,

    /// Opacity reached by the last generated layer
    pub final_alpha: f64,
    pub alpha_easing: EasingCurve,
    /// Hand the strongest alpha to the innermost layer instead of the outermost
    pub reverse_alpha: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            layer_count: 4,
            final_offset_x: 0.0,
            final_offset_y: 0.0,
            offset_easing: DEFAULT_OFFSET_EASING,
            final_blur: 0.0,
            blur_easing: DEFAULT_BLUR_EASING,
            final_alpha: 0.2,
            alpha_easing: DEFAULT_ALPHA_EASING,
            reverse_alpha: false,
        }
    }
}

impl ShadowConfig {
    /// Apply `overrides` on top of this config.
    pub fn with(&self, overrides: &ShadowOverrides) -> Self {
        overrides.apply(self)
    }
}

/// A partial [`ShadowConfig`]. Unset fields fall back to the base config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShadowOverrides {
    #[serde(alias = "shadowLayers", skip_serializing_if = "Option::is_none")]
    pub layer_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_easing: Option<EasingCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_easing: Option<EasingCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_easing: Option<EasingCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_alpha: Option<bool>,
}

impl ShadowOverrides {
    /// Parse overrides from a JSON object such as
    /// `{"layerCount": 3, "finalOffsetY": 10}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve against `base`, taking every set field from `self`.
    pub fn apply(&self, base: &ShadowConfig) -> ShadowConfig {
        ShadowConfig {
            layer_count: self.layer_count.unwrap_or(base.layer_count),
            final_offset_x: self.final_offset_x.unwrap_or(base.final_offset_x),
            final_offset_y: self.final_offset_y.unwrap_or(base.final_offset_y),
            offset_easing: self.offset_easing.unwrap_or(base.offset_easing),
            final_blur: self.final_blur.unwrap_or(base.final_blur),
            blur_easing: self.blur_easing.unwrap_or(base.blur_easing),
            final_alpha: self.final_alpha.unwrap_or(base.final_alpha),
            alpha_easing: self.alpha_easing.unwrap_or(base.alpha_easing),
            reverse_alpha: self.reverse_alpha.unwrap_or(base.reverse_alpha),
        }
    }

    /// Layer `other` over `self`; fields set in `other` win.
    pub fn merge(&self, other: &ShadowOverrides) -> ShadowOverrides {
        ShadowOverrides {
            layer_count: other.layer_count.or(self.layer_count),
            final_offset_x: other.final_offset_x.or(self.final_offset_x),
            final_offset_y: other.final_offset_y.or(self.final_offset_y),
            offset_easing: other.offset_easing.or(self.offset_easing),
            final_blur: other.final_blur.or(self.final_blur),
            blur_easing: other.blur_easing.or(self.blur_easing),
            final_alpha: other.final_alpha.or(self.final_alpha),
            alpha_easing: other.alpha_easing.or(self.alpha_easing),
            reverse_alpha: other.reverse_alpha.or(self.reverse_alpha),
        }
    }

    /// Resolve against [`ShadowConfig::default`].
    pub fn resolve(&self) -> ShadowConfig {
        self.apply(&ShadowConfig::default())
    }
}

impl From<ShadowConfig> for ShadowOverrides {
    fn from(config: ShadowConfig) -> Self {
        Self {
            layer_count: Some(config.layer_count),
            final_offset_x: Some(config.final_offset_x),
            final_offset_y: Some(config.final_offset_y),
            offset_easing: Some(config.offset_easing),
            final_blur: Some(config.final_blur),
            blur_easing: Some(config.blur_easing),
            final_alpha: Some(config.final_alpha),
            alpha_easing: Some(config.alpha_easing),
            reverse_alpha: Some(config.reverse_alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let cfg = ShadowConfig::default();
        assert_eq!(cfg.layer_count, 4);
        assert_eq!(cfg.final_offset_x, 0.0);
        assert_eq!(cfg.final_offset_y, 0.0);
        assert_eq!(cfg.final_blur, 0.0);
        assert_eq!(cfg.final_alpha, 0.2);
        assert!(!cfg.reverse_alpha);
        assert_eq!(cfg.offset_easing, EasingCurve::new(0.7, 0.1, 0.9, 0.3));
        assert_eq!(cfg.blur_easing, EasingCurve::new(0.7, 0.1, 0.9, 0.3));
        assert_eq!(cfg.alpha_easing, EasingCurve::new(0.1, 0.5, 0.9, 0.5));
    }

    #[test]
    fn test_empty_overrides_resolve_to_defaults() {
        assert_eq!(ShadowOverrides::default().resolve(), ShadowConfig::default());
    }

    #[test]
    fn test_apply_overrides_only_set_fields() {
        let overrides = ShadowOverrides {
            layer_count: Some(3),
            final_offset_y: Some(10.0),
            ..Default::default()
        };
        let cfg = overrides.resolve();
        assert_eq!(cfg.layer_count, 3);
        assert_eq!(cfg.final_offset_y, 10.0);
        assert_eq!(cfg.final_alpha, 0.2);
        assert_eq!(cfg.alpha_easing, DEFAULT_ALPHA_EASING);
    }

    #[test]
    fn test_merge_prefers_later_fields() {
        let base = ShadowOverrides {
            layer_count: Some(4),
            final_alpha: Some(0.2),
            ..Default::default()
        };
        let level = ShadowOverrides {
            final_alpha: Some(0.0),
            final_blur: Some(2.0),
            ..Default::default()
        };
        let merged = base.merge(&level);
        assert_eq!(merged.layer_count, Some(4));
        assert_eq!(merged.final_alpha, Some(0.0));
        assert_eq!(merged.final_blur, Some(2.0));
        assert_eq!(merged.final_offset_y, None);
    }

    #[test]
    fn test_from_json_camel_case() {
        let overrides = ShadowOverrides::from_json(
            r#"{"shadowLayers": 3, "finalOffsetY": 10, "alphaEasing": [0, 0, 1, 1], "reverseAlpha": true}"#,
        )
        .unwrap();
        assert_eq!(overrides.layer_count, Some(3));
        assert_eq!(overrides.final_offset_y, Some(10.0));
        assert_eq!(overrides.alpha_easing, Some(EasingCurve::LINEAR));
        assert_eq!(overrides.reverse_alpha, Some(true));
        assert_eq!(overrides.final_blur, None);
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = ShadowOverrides::from_json(r#"{"layers": 3}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_full_config_deserializes_partially() {
        let cfg: ShadowConfig = serde_json::from_str(r#"{"layerCount": 6, "finalBlur": 24}"#).unwrap();
        assert_eq!(cfg.layer_count, 6);
        assert_eq!(cfg.final_blur, 24.0);
        assert_eq!(cfg.final_alpha, 0.2);
    }

    #[test]
    fn test_full_config_rejects_unknown_keys() {
        assert!(serde_json::from_str::<ShadowConfig>(r#"{"layers": 3}"#).is_err());
        assert!(serde_json::from_str::<ShadowConfig>(r#"{"finalBlur": 4, "blur": 4}"#).is_err());

        let cfg: ShadowConfig = serde_json::from_str(r#"{"shadowLayers": 2}"#).unwrap();
        assert_eq!(cfg.layer_count, 2);
    }

    #[test]
    fn test_overrides_serialize_only_set_fields() {
        let overrides = ShadowOverrides {
            final_offset_y: Some(1.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&overrides).unwrap(), r#"{"finalOffsetY":1.0}"#);
    }
}
