//! Hyperbolic kernels of the first-passage moment formulas.
//!
//! The conditional moments of a two-boundary Wiener process are differences
//! of three even functions of a scaled coordinate `u`:
//!
//! ```text
//! m(u) = u coth u                                         m(0) = 1
//! h(u) = u^2 csch^2 u + u coth u                          h(0) = 2
//! q(u) = 3u^2 csch^2 u + 2u^3 coth u csch^2 u + 3u coth u  q(0) = 8
//! ```
//!
//! Their constant terms cancel in every moment, and the leading remaining
//! power of `u` cancels against the `drift^2`, `drift^4`, `drift^6`
//! prefactors. The kernels below return the reduced forms
//!
//! ```text
//! (m(u) - 1) / u^2,   (h(u) - 2) / u^4,   (q(u) - 8) / u^6
//! ```
//!
//! which are smooth and bounded at `u = 0`. With `c_n = 2^{2n} B_{2n} / (2n)!`
//! (so that `u coth u = sum c_n u^{2n}`):
//!
//! ```text
//! m(u) = sum c_n u^{2n}
//! h(u) = sum c_n (2 - 2n) u^{2n}
//! q(u) = sum 4 c_n (n - 1)(n - 2) u^{2n}
//! ```
//!
//! Small arguments use these series; larger ones use `tanh`/`sinh` directly,
//! where the subtraction no longer loses precision.

/// Taylor coefficients of `u coth u` in powers of `u^2`: `2^{2n} B_{2n} / (2n)!`.
const COTH_SERIES: [f64; 17] = [
    1.0,
    1.0 / 3.0,
    -1.0 / 45.0,
    2.0 / 945.0,
    -1.0 / 4725.0,
    2.137_779_915_557_693_5e-5,
    -2.164_404_280_806_397_2e-6,
    2.192_594_785_187_377_8e-7,
    -2.221_460_878_997_967_8e-8,
    2.250_784_651_680_899_4e-9,
    -2.280_515_120_459_218_3e-10,
    2.310_643_259_900_262_4e-11,
    -2.341_170_681_982_488_2e-12,
    2.372_101_740_023_365_3e-13,
    -2.403_441_533_330_770_5e-14,
    2.435_195_402_918_336_7e-15,
    -2.467_368_804_517_207_5e-16,
];

fn coth(u: f64) -> f64 {
    1.0 / u.tanh()
}

fn csch(u: f64) -> f64 {
    1.0 / u.sinh()
}

/// Evaluate `sum_{n >= first} weight(n) c_n w^{n - first}` by Horner's rule.
fn series(w: f64, first: usize, weight: impl Fn(f64) -> f64) -> f64 {
    COTH_SERIES
        .iter()
        .enumerate()
        .skip(first)
        .rev()
        .fold(0.0, |acc, (n, c)| acc * w + weight(n as f64) * c)
}

/// `(u coth u - 1) / u^2`; equals `1/3` at `u = 0`.
pub fn mean_kernel(u: f64, cutoff: f64) -> f64 {
    if u.abs() < cutoff {
        return series(u * u, 1, |_| 1.0);
    }
    (u * coth(u) - 1.0) / (u * u)
}

/// `(u^2 csch^2 u + u coth u - 2) / u^4`; equals `2/45` at `u = 0`.
pub fn variance_kernel(u: f64, cutoff: f64) -> f64 {
    if u.abs() < cutoff {
        return series(u * u, 2, |n| 2.0 - 2.0 * n);
    }
    let u2 = u * u;
    let cs = csch(u);
    (u2 * cs * cs + u * coth(u) - 2.0) / (u2 * u2)
}

/// `(q(u) - 8) / u^6`; equals `16/945` at `u = 0`.
pub fn third_cumulant_kernel(u: f64, cutoff: f64) -> f64 {
    if u.abs() < cutoff {
        return series(u * u, 3, |n| 4.0 * (n - 1.0) * (n - 2.0));
    }
    let u2 = u * u;
    let ct = coth(u);
    let cs2 = csch(u).powi(2);
    let q = 3.0 * u2 * cs2 + 2.0 * u2 * u * ct * cs2 + 3.0 * u * ct;
    (q - 8.0) / (u2 * u2 * u2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CUTOFF: f64 = 1.0;

    fn m(u: f64) -> f64 {
        u * coth(u)
    }

    fn h(u: f64) -> f64 {
        u * u * csch(u).powi(2) + u * coth(u)
    }

    fn q(u: f64) -> f64 {
        let cs2 = csch(u).powi(2);
        3.0 * u * u * cs2 + 2.0 * u.powi(3) * coth(u) * cs2 + 3.0 * u * coth(u)
    }

    #[test]
    fn test_limits_at_zero() {
        assert_relative_eq!(mean_kernel(0.0, CUTOFF), 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(variance_kernel(0.0, CUTOFF), 2.0 / 45.0, epsilon = 1e-15);
        assert_relative_eq!(third_cumulant_kernel(0.0, CUTOFF), 16.0 / 945.0, epsilon = 1e-15);
    }

    #[test]
    fn test_series_matches_closed_form_at_cutoff() {
        // Both branches should agree where they meet.
        for u in [0.999_999, 1.0, 1.000_001] {
            assert_relative_eq!(
                series(u * u, 1, |_| 1.0),
                (m(u) - 1.0) / (u * u),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                series(u * u, 2, |n| 2.0 - 2.0 * n),
                (h(u) - 2.0) / u.powi(4),
                max_relative = 1e-11
            );
            assert_relative_eq!(
                series(u * u, 3, |n| 4.0 * (n - 1.0) * (n - 2.0)),
                (q(u) - 8.0) / u.powi(6),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_known_values() {
        // Reference values computed with 50-digit arithmetic.
        assert_relative_eq!(mean_kernel(0.5, CUTOFF), 0.327_906_827_477_305_7, max_relative = 1e-13);
        assert_relative_eq!(variance_kernel(0.5, CUTOFF), 0.042_404_817_233_899_9, max_relative = 1e-12);
        assert_relative_eq!(
            third_cumulant_kernel(0.5, CUTOFF),
            0.015_722_902_805_991_87,
            max_relative = 1e-11
        );
    }

    #[test]
    fn test_kernels_are_even() {
        for u in [0.3, 1.7, 12.0, 150.0] {
            assert_eq!(mean_kernel(u, CUTOFF), mean_kernel(-u, CUTOFF));
            assert_eq!(variance_kernel(u, CUTOFF), variance_kernel(-u, CUTOFF));
            assert_eq!(third_cumulant_kernel(u, CUTOFF), third_cumulant_kernel(-u, CUTOFF));
        }
    }

    #[test]
    fn test_large_arguments_stay_finite() {
        for u in [100.0, 200.0, -200.0] {
            assert!(mean_kernel(u, CUTOFF).is_finite());
            assert!(variance_kernel(u, CUTOFF).is_finite());
            assert!(third_cumulant_kernel(u, CUTOFF).is_finite());
        }
        // u coth u -> |u| for large |u|
        assert_relative_eq!(mean_kernel(200.0, CUTOFF), 199.0 / 40_000.0, max_relative = 1e-12);
    }
}
