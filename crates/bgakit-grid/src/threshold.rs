//! Global threshold selection over the bin contents matrix.
//!
//! Two interchangeable algorithms, both deterministic and bounded:
//! Otsu's method (Gonzalez & Woods, 3rd ed., p742-746) over a 64-bin
//! histogram, and basic iterative global thresholding (2nd ed., p599-600)
//! with a hard 100-iteration cap.

const HIST_BINS: usize = 64;
const MAX_TRIALS: usize = 100;

/// Pick the thresholding algorithm by sampling density and run it.
///
/// With 10 px per bin or less on either axis, Otsu's method usually behaves
/// better; above that, iterative global thresholding is used.
pub fn select_threshold(contents: &[f32], px_per_bin_x: f32, px_per_bin_y: f32) -> f32 {
    if px_per_bin_x <= 10.0 || px_per_bin_y <= 10.0 {
        log::debug!(
            "selecting Otsu threshold ({px_per_bin_x:.1} x {px_per_bin_y:.1} px/bin)"
        );
        otsu_threshold(contents)
    } else {
        log::debug!(
            "selecting iterative threshold ({px_per_bin_x:.1} x {px_per_bin_y:.1} px/bin)"
        );
        iterative_threshold(contents)
    }
}

/// Optimal thresholding by maximizing between-class variance.
///
/// The final value is `round(mean(winning bins - 1)) / n` with `n` the
/// number of samples. The off-by-one shift and the divide-by-`n` replicate
/// the numeric convention of the reference implementation and are kept for
/// output compatibility, although they push thresholds toward zero for
/// most realistic inputs.
pub fn otsu_threshold(contents: &[f32]) -> f32 {
    let n = contents.len();
    if n == 0 {
        return 0.0;
    }

    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in contents {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    // Flat data has zero range; spread the histogram over a unit interval
    // so binning stays well defined.
    let (lo, hi) = if hi > lo {
        (lo as f64, hi as f64)
    } else {
        (lo as f64 - 0.5, lo as f64 + 0.5)
    };
    let scale = HIST_BINS as f64 / (hi - lo);

    let mut hist_pi = [0f64; HIST_BINS];
    for &v in contents {
        let k = (((v as f64 - lo) * scale) as usize).min(HIST_BINS - 1);
        hist_pi[k] += 1.0;
    }
    for h in hist_pi.iter_mut() {
        *h /= n as f64;
    }

    let m_g: f64 = hist_pi.iter().enumerate().map(|(k, &p)| k as f64 * p).sum();

    // Cumulative probability p1(k) and partial mean m(k) over bins below k.
    let mut var_b = [0f64; HIST_BINS];
    let mut p1 = 0f64;
    let mut m = 0f64;
    for k in 0..HIST_BINS {
        let denom = p1 * (1.0 - p1);
        let denom = if denom == 0.0 { 1.0 } else { denom };
        let num = m_g * p1 - m;
        var_b[k] = num * num / denom;

        p1 += hist_pi[k];
        m += k as f64 * hist_pi[k];
    }

    let max_var = var_b.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut winner_sum = 0f64;
    let mut winner_count = 0usize;
    for (k, &v) in var_b.iter().enumerate() {
        if v >= max_var * 0.99999 && v <= max_var * 1.00001 {
            winner_sum += k as f64 - 1.0;
            winner_count += 1;
        }
    }

    (round_half_even(winner_sum / winner_count as f64) / n as f64) as f32
}

/// Basic global thresholding by iterated two-group means.
///
/// Starts at 0.5 and repeats `new = 0.5 * (mean(v > t) + mean(v <= t))`
/// until the update moves by 0.01 or less, or 100 iterations have run.
/// An empty group's mean is taken as 0.0 so the loop always terminates
/// with a usable number.
pub fn iterative_threshold(contents: &[f32]) -> f32 {
    let mut threshold = 0.5f32;
    let mut new_threshold = threshold;

    for _ in 0..MAX_TRIALS {
        let mut sum1 = 0f32;
        let mut n1 = 0usize;
        let mut sum2 = 0f32;
        let mut n2 = 0usize;
        for &v in contents {
            if v > threshold {
                sum1 += v;
                n1 += 1;
            } else {
                sum2 += v;
                n2 += 1;
            }
        }
        let mu1 = if n1 > 0 { sum1 / n1 as f32 } else { 0.0 };
        let mu2 = if n2 > 0 { sum2 / n2 as f32 } else { 0.0 };

        new_threshold = 0.5 * (mu1 + mu2);
        let delta = (new_threshold - threshold).abs();
        threshold = new_threshold;
        if delta <= 0.01 {
            break;
        }
    }

    new_threshold
}

/// Round to the nearest integer, ties to even (the convention of the
/// reference implementation's numeric stack).
fn round_half_even(v: f64) -> f64 {
    let floor = v.floor();
    let frac = v - floor;
    if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bimodal() -> Vec<f32> {
        let mut v = vec![0.05f32; 50];
        v.extend(std::iter::repeat(0.9f32).take(50));
        v
    }

    #[test]
    fn iterative_converges_to_midpoint_of_two_groups() {
        let t = iterative_threshold(&bimodal());
        // Means are 0.05 and 0.9; the fixed point is their midpoint.
        assert_relative_eq!(t, 0.475, epsilon = 0.011);
    }

    #[test]
    fn iterative_diagonal_2x2_straddles_half() {
        let t = iterative_threshold(&[1.0, 0.0, 0.0, 1.0]);
        assert_relative_eq!(t, 0.5, epsilon = 0.011);
        // Fully-lit bins must binarize as occupied under `>=`.
        assert!(1.0 >= t && 0.0 < t);
    }

    #[test]
    fn iterative_handles_all_low_contents() {
        // All values below the starting threshold: G1 goes empty and its
        // mean collapses to zero instead of poisoning the estimate.
        let t = iterative_threshold(&[0.1f32; 16]);
        assert!(t.is_finite());
        assert!((0.0..=1.0).contains(&t));
    }

    #[test]
    fn both_algorithms_stay_in_unit_range() {
        let mut contents = Vec::new();
        for i in 0..100 {
            contents.push(if i % 3 == 0 { 0.8 } else { 0.02 });
        }
        let otsu = otsu_threshold(&contents);
        let iter = iterative_threshold(&contents);
        assert!((0.0..=1.0).contains(&otsu), "otsu = {otsu}");
        assert!((0.0..=1.0).contains(&iter), "iterative = {iter}");
    }

    #[test]
    fn otsu_threshold_is_near_zero_by_convention() {
        // The divide-by-n convention makes Otsu values tiny but usable:
        // empty bins sit below them, filled bins far above.
        let t = otsu_threshold(&bimodal());
        assert!(t >= 0.0 && t < 0.9, "t = {t}");
        assert!(0.9 >= t, "filled bins must clear the cutoff");
    }

    #[test]
    fn otsu_flat_input_is_finite() {
        let t = otsu_threshold(&[0.4f32; 64]);
        assert!(t.is_finite());
    }

    #[test]
    fn selector_prefers_otsu_for_coarse_bins() {
        // Exercised indirectly: identical data must produce the documented
        // algorithm on each side of the 10 px/bin boundary.
        let data = bimodal();
        assert_relative_eq!(
            select_threshold(&data, 10.0, 32.0),
            otsu_threshold(&data)
        );
        assert_relative_eq!(
            select_threshold(&data, 10.1, 32.0),
            iterative_threshold(&data)
        );
    }
}
