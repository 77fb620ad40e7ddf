use crate::f;

/// Extends primitives with a consistent scientific format
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// The `{:e}` formatter in `std` drops the exponent sign and padding, so
    /// `125.0` would otherwise show as `1.25e2`.
    ///
    /// ```rust
    /// # use f90tools_utils::ValueExt;
    /// assert_eq!(125.0.sci(5, 2), "1.25000e+02");
    /// assert_eq!((-0.003_f32).sci(2, 3), "-3.00e-003");
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self);

        // non-finite values have no exponent to fix up
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
