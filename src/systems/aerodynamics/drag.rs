/// Empirical drag coefficient of a sphere versus Mach number.
///
/// A quadratic rise up to M = 0.722, then an exponential fit through the transonic
/// drag rise that levels off near 0.92 at high Mach.
pub fn sphere_drag_coefficient(mach: f64) -> f64 {
    if mach <= 0.722 {
        0.45 * mach.powi(2) + 0.424
    } else {
        2.1 * (-1.16 * (mach + 0.35)).exp() - 8.9 * (-2.2 * (mach + 0.35)).exp() + 0.92
    }
}
