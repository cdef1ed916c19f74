//! Boundary-hit probabilities of the two-boundary Wiener process.
//!
//! ```text
//! P(upper) = (1 - exp(-2(X + Z))) / (1 - exp(-4Z))
//! P(lower) = (1 - exp( 2(X - Z))) / (1 - exp( 4Z))
//! ```
//!
//! Both are evaluated with `expm1` so they stay accurate as `Z -> 0`. At
//! `Z = 0` (no drift) they reduce to the gambler's-ruin ratios
//! `(x + z) / 2z` and `(z - x) / 2z`.
//!
//! Only non-positive exponents are ever passed to `exp`/`expm1`. For `Z > 0`
//! the lower probability is rewritten as
//!
//! ```text
//! P(lower) = exp(-2(X + Z)) * expm1(-2(Z - X)) / expm1(-4Z)
//! ```
//!
//! and symmetrically for `Z < 0`, so no clamp limit can overflow them.

use super::coordinates::ScaledCoordinates;

/// Hit probabilities `(upper, lower)`.
pub fn hit_probabilities(coords: &ScaledCoordinates) -> (f64, f64) {
    let ScaledCoordinates {
        x,
        z,
        start_length,
        threshold_length,
    } = *coords;

    if z == 0.0 {
        let span = 2.0 * threshold_length;
        return (
            (threshold_length + start_length) / span,
            (threshold_length - start_length) / span,
        );
    }

    // |x| <= |z|, so x + z and z - x share the sign of z.
    if z > 0.0 {
        let span = (-4.0 * z).exp_m1();
        let upper = (-2.0 * (x + z)).exp_m1() / span;
        let lower = (-2.0 * (x + z)).exp() * (-2.0 * (z - x)).exp_m1() / span;
        (upper, lower)
    } else {
        let span = (4.0 * z).exp_m1();
        let upper = (2.0 * (z - x)).exp() * (2.0 * (x + z)).exp_m1() / span;
        let lower = (2.0 * (z - x)).exp_m1() / span;
        (upper, lower)
    }
}
