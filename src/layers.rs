//! Layer generator: turns a [`ShadowConfig`] into a stack of shadow layers.
//!
//! For `n` layers, layer `i` (1-based) sits at progress `i / n`. Each channel
//! remaps that progress through its own Bézier curve and scales the result
//! by its final target:
//!
//! | Channel | Value |
//! |---------|-------|
//! | offset x | `offset_easing(i / n) * final_offset_x` |
//! | offset y | `offset_easing(i / n) * final_offset_y` |
//! | blur | `blur_easing(i / n) * final_blur` |
//! | alpha | `alpha_easing(i / n) * final_alpha` |
//!
//! The last layer therefore always lands exactly on the final values, while
//! the first one starts at `1 / n` of the way, never at zero.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::config::{ShadowConfig, ShadowOverrides};

/// One stacked shadow: offsets and blur in px, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ShadowLayer {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub alpha: f64,
}

impl ShadowLayer {
    pub const fn new(offset_x: f64, offset_y: f64, blur: f64, alpha: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            alpha,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.offset_x, self.offset_y, self.blur, self.alpha]
    }
}

impl From<[f64; 4]> for ShadowLayer {
    fn from([offset_x, offset_y, blur, alpha]: [f64; 4]) -> Self {
        Self::new(offset_x, offset_y, blur, alpha)
    }
}

impl From<ShadowLayer> for [f64; 4] {
    fn from(layer: ShadowLayer) -> Self {
        layer.to_array()
    }
}

impl From<(f64, f64, f64, f64)> for ShadowLayer {
    fn from((offset_x, offset_y, blur, alpha): (f64, f64, f64, f64)) -> Self {
        Self::new(offset_x, offset_y, blur, alpha)
    }
}

/// Ordered layers of one shadow. Index order is rendering order.
///
/// Sets are built once and only read afterwards; the layers are reachable
/// as a slice through `Deref`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadowSet(Vec<ShadowLayer>);

impl ShadowSet {
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.0
    }

    /// Flatten to `[x0, y0, blur0, alpha0, x1, ...]`.
    pub fn to_flat(&self) -> Vec<f64> {
        self.0.iter().flat_map(|layer| layer.to_array()).collect()
    }

    /// Rebuild from a flat buffer; a trailing partial layer is ignored.
    pub fn from_flat(values: &[f64]) -> Self {
        values
            .chunks_exact(4)
            .map(|c| ShadowLayer::new(c[0], c[1], c[2], c[3]))
            .collect()
    }

    pub fn into_inner(self) -> Vec<ShadowLayer> {
        self.0
    }
}

impl Deref for ShadowSet {
    type Target = [ShadowLayer];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ShadowLayer>> for ShadowSet {
    fn from(layers: Vec<ShadowLayer>) -> Self {
        Self(layers)
    }
}

impl FromIterator<ShadowLayer> for ShadowSet {
    fn from_iter<I: IntoIterator<Item = ShadowLayer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShadowSet {
    type Item = &'a ShadowLayer;
    type IntoIter = std::slice::Iter<'a, ShadowLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Generate the layers described by a complete config.
///
/// # Arguments
/// * `config` - Layer count, final targets and per-channel curves
///
/// # Returns
/// `config.layer_count` layers, innermost first. A layer count of zero
/// gives an empty set.
pub fn build_shadow(config: &ShadowConfig) -> ShadowSet {
    let n = config.layer_count;
    tracing::trace!(layers = n, reverse_alpha = config.reverse_alpha, "building shadow set");

    let offset = config.offset_easing.solver();
    let blur = config.blur_easing.solver();
    let alpha = config.alpha_easing.solver();

    let fractions = (1..=n).map(|i| i as f64 / n as f64);

    let mut alphas: Vec<f64> = fractions.clone().map(|f| alpha.ease(f)).collect();
    if config.reverse_alpha {
        alphas.reverse();
    }

    fractions
        .zip(alphas)
        .map(|(fraction, eased_alpha)| {
            let eased_offset = offset.ease(fraction);
            ShadowLayer {
                offset_x: eased_offset * config.final_offset_x,
                offset_y: eased_offset * config.final_offset_y,
                blur: blur.ease(fraction) * config.final_blur,
                alpha: eased_alpha * config.final_alpha,
            }
        })
        .collect()
}

/// Generate layers from a partial config, filling gaps with the defaults.
pub fn generate(overrides: &ShadowOverrides) -> ShadowSet {
    build_shadow(&overrides.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{to_box_shadow, DEFAULT_PRECISION};
    use crate::easing::EasingCurve;
    use proptest::prelude::*;

    fn overrides() -> ShadowOverrides {
        ShadowOverrides::default()
    }

    #[test]
    fn test_layer_count() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(3),
            ..overrides()
        });
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_default_layer_count() {
        assert_eq!(generate(&overrides()).len(), 4);
    }

    #[test]
    fn test_zero_layers_is_empty() {
        let set = build_shadow(&ShadowConfig {
            layer_count: 0,
            ..Default::default()
        });
        assert!(set.is_empty());
    }

    #[test]
    fn test_single_layer_reaches_final_offset_y() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(1),
            final_offset_y: Some(10.0),
            ..overrides()
        });
        assert!((set[0].offset_y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_layer_reaches_final_offset_x() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(1),
            final_offset_x: Some(5.0),
            ..overrides()
        });
        assert!((set[0].offset_x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_layer_reaches_final_blur() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(1),
            final_blur: Some(20.0),
            ..overrides()
        });
        assert!((set[0].blur - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_layer_reaches_final_alpha() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(1),
            final_alpha: Some(0.5),
            ..overrides()
        });
        assert!((set[0].alpha - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_last_layer_is_exact_for_many_layers() {
        let set = build_shadow(&ShadowConfig {
            layer_count: 7,
            final_offset_x: -3.0,
            final_offset_y: 12.0,
            final_blur: 18.0,
            final_alpha: 0.3,
            ..Default::default()
        });
        let last = set.last().unwrap();
        assert_eq!(last.to_array(), [-3.0, 12.0, 18.0, 0.3]);
    }

    #[test]
    fn test_values_increase_across_layers() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(4),
            final_offset_y: Some(10.0),
            final_blur: Some(20.0),
            ..overrides()
        });
        for pair in set.windows(2) {
            assert!(pair[1].offset_y >= pair[0].offset_y);
            assert!(pair[1].blur >= pair[0].blur);
        }
    }

    #[test]
    fn test_offset_axes_share_eased_fraction() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(4),
            final_offset_x: Some(4.0),
            final_offset_y: Some(8.0),
            ..overrides()
        });
        for layer in &set {
            assert!((layer.offset_y - 2.0 * layer.offset_x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linear_curves_interpolate_evenly() {
        let set = build_shadow(&ShadowConfig {
            layer_count: 4,
            final_offset_y: 8.0,
            offset_easing: EasingCurve::LINEAR,
            final_blur: 16.0,
            blur_easing: EasingCurve::LINEAR,
            final_alpha: 0.4,
            alpha_easing: EasingCurve::LINEAR,
            ..Default::default()
        });
        let ys: Vec<f64> = set.iter().map(|l| l.offset_y).collect();
        assert_eq!(ys, vec![2.0, 4.0, 6.0, 8.0]);
        let blurs: Vec<f64> = set.iter().map(|l| l.blur).collect();
        assert_eq!(blurs, vec![4.0, 8.0, 12.0, 16.0]);
        assert!((set[0].alpha - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_default_curves_serialize_exactly() {
        let set = generate(&ShadowOverrides {
            final_offset_y: Some(10.0),
            final_blur: Some(20.0),
            ..overrides()
        });
        assert_eq!(
            to_box_shadow(&set, DEFAULT_PRECISION, None),
            "0.000px 0.453px 0.906px rgba(0, 0, 0, 0.070),\
             0.000px 1.252px 2.504px rgba(0, 0, 0, 0.100),\
             0.000px 3.015px 6.029px rgba(0, 0, 0, 0.130),\
             0.000px 10.000px 20.000px rgba(0, 0, 0, 0.200)"
        );
    }

    #[test]
    fn test_reverse_alpha() {
        let base = ShadowOverrides {
            layer_count: Some(3),
            final_alpha: Some(0.3),
            final_offset_y: Some(6.0),
            final_blur: Some(9.0),
            ..overrides()
        };
        let normal = generate(&ShadowOverrides {
            reverse_alpha: Some(false),
            ..base
        });
        let reversed = generate(&ShadowOverrides {
            reverse_alpha: Some(true),
            ..base
        });

        assert!(normal[0].alpha < normal[2].alpha);
        assert!(reversed[0].alpha > reversed[2].alpha);

        for (n, r) in normal.iter().zip(reversed.iter()) {
            assert_eq!(n.offset_x, r.offset_x);
            assert_eq!(n.offset_y, r.offset_y);
            assert_eq!(n.blur, r.blur);
        }

        let forward: Vec<f64> = normal.iter().map(|l| l.alpha).collect();
        let backward: Vec<f64> = reversed.iter().rev().map(|l| l.alpha).collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_negative_targets_are_accepted() {
        let set = generate(&ShadowOverrides {
            layer_count: Some(2),
            final_offset_y: Some(-10.0),
            ..overrides()
        });
        assert!(set.iter().all(|l| l.offset_y < 0.0));
        assert_eq!(set[1].offset_y, -10.0);
    }

    #[test]
    fn test_flat_round_trip_drops_partial_layer() {
        let set = ShadowSet::from_flat(&[1.0, 2.0, 3.0, 0.1, 4.0, 5.0]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_flat(), vec![1.0, 2.0, 3.0, 0.1]);
    }

    #[test]
    fn test_set_serializes_as_nested_arrays() {
        let set: ShadowSet = vec![ShadowLayer::new(1.0, 2.0, 3.0, 0.5)].into();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[[1.0,2.0,3.0,0.5]]");
    }

    proptest! {
        #[test]
        fn prop_length_matches_layer_count(n in 0usize..32) {
            let set = build_shadow(&ShadowConfig { layer_count: n, ..Default::default() });
            prop_assert_eq!(set.len(), n);
        }

        #[test]
        fn prop_default_curves_are_non_decreasing(
            n in 1usize..16,
            y in 0.0f64..100.0,
            blur in 0.0f64..100.0,
        ) {
            let set = build_shadow(&ShadowConfig {
                layer_count: n,
                final_offset_y: y,
                final_blur: blur,
                ..Default::default()
            });
            for pair in set.windows(2) {
                prop_assert!(pair[1].offset_y >= pair[0].offset_y);
                prop_assert!(pair[1].blur >= pair[0].blur);
            }
        }

        #[test]
        fn prop_last_layer_hits_targets(
            n in 1usize..16,
            x in -50.0f64..50.0,
            y in -50.0f64..50.0,
            alpha in 0.0f64..1.0,
        ) {
            let set = build_shadow(&ShadowConfig {
                layer_count: n,
                final_offset_x: x,
                final_offset_y: y,
                final_alpha: alpha,
                ..Default::default()
            });
            let last = set[n - 1];
            prop_assert!((last.offset_x - x).abs() < 1e-9);
            prop_assert!((last.offset_y - y).abs() < 1e-9);
            prop_assert!((last.alpha - alpha).abs() < 1e-9);
        }
    }
}
