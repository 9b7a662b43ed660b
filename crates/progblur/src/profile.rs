//! Per-layer blur radii.
//!
//! Radii form a geometric progression from `strength` (layer 0) down to
//! [`MIN_RADIUS`] (last layer). Consecutive layers differ by a constant
//! ratio rather than a constant difference, which keeps the perceived blur
//! gradient even at the sharp end of the stack.

/// Radius of the least blurred layer, in pixels.
pub const MIN_RADIUS: f32 = 0.5;

/// Blur radius of layer `index` in a stack of `actual_steps` layers.
///
/// - `strength <= 0` (or NaN): every layer is unblurred (`0.0`).
/// - `actual_steps <= 1`: the single layer gets `strength` unchanged; the
///   ratio `(strength / MIN_RADIUS)^(1 / (n - 1))` is never evaluated.
pub fn blur_radius(strength: f32, actual_steps: usize, index: usize) -> f32 {
    if strength.is_nan() || strength <= 0.0 {
        return 0.0;
    }
    let n = actual_steps.max(1);
    if n == 1 {
        return strength;
    }
    debug_assert!(index < n, "layer index {index} out of range for {n} layers");

    let strength = f64::from(strength);
    let min = f64::from(MIN_RADIUS);
    let base = (strength / min).powf(1.0 / (n - 1) as f64);
    let exponent = n.saturating_sub(index + 1) as i32;

    (min * base.powi(exponent)) as f32
}

/// Radii for all layers, index 0 (most blurred) first.
pub fn blur_radii(strength: f32, actual_steps: usize) -> Vec<f32> {
    let n = actual_steps.max(1);
    (0..n).map(|i| blur_radius(strength, n, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3 * b.abs().max(1.0)
    }

    // ── endpoints ─────────────────────────────────────────────────────────

    #[test]
    fn first_layer_is_strength_last_is_min() {
        for n in 2..=16 {
            let radii = blur_radii(64.0, n);
            assert_eq!(radii.len(), n);
            assert!(approx(radii[0], 64.0), "n={n}: {}", radii[0]);
            assert_eq!(radii[n - 1], MIN_RADIUS);
        }
    }

    #[test]
    fn reference_configuration() {
        let radii = blur_radii(64.0, 8);
        assert!(approx(radii[0], 64.0));
        assert_eq!(radii[7], 0.5);
        // base = 128^(1/7) = 2
        assert!(approx(radii[6], 1.0));
        assert!(approx(radii[5], 2.0));
        assert!(approx(radii[1], 32.0));
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn radii_are_non_increasing() {
        for strength in [0.5, 1.0, 7.5, 32.0, 128.0] {
            let radii = blur_radii(strength, 9);
            for pair in radii.windows(2) {
                assert!(pair[0] >= pair[1], "strength={strength}: {radii:?}");
            }
        }
    }

    #[test]
    fn consecutive_ratio_is_constant() {
        let radii = blur_radii(40.0, 6);
        let ratio = radii[0] / radii[1];
        for pair in radii.windows(2) {
            assert!(approx(pair[0] / pair[1], ratio));
        }
    }

    // ── degenerate inputs ─────────────────────────────────────────────────

    #[test]
    fn single_step_returns_strength_exactly() {
        assert_eq!(blur_radii(64.0, 1), vec![64.0]);
        assert_eq!(blur_radii(0.25, 1), vec![0.25]);
        assert!(blur_radii(64.0, 1)[0].is_finite());
    }

    #[test]
    fn zero_steps_behaves_like_one() {
        assert_eq!(blur_radii(10.0, 0), vec![10.0]);
    }

    #[test]
    fn zero_strength_is_unblurred() {
        assert!(blur_radii(0.0, 8).iter().all(|&r| r == 0.0));
        assert_eq!(blur_radii(0.0, 1), vec![0.0]);
    }

    #[test]
    fn negative_or_nan_strength_is_unblurred() {
        assert!(blur_radii(-4.0, 5).iter().all(|&r| r == 0.0));
        assert!(blur_radii(f32::NAN, 5).iter().all(|&r| r == 0.0));
    }

    #[test]
    fn strength_below_min_radius_stays_finite() {
        let radii = blur_radii(0.25, 4);
        assert!(radii.iter().all(|r| r.is_finite()));
        assert!(approx(radii[0], 0.25));
        assert_eq!(radii[3], MIN_RADIUS);
    }
}
