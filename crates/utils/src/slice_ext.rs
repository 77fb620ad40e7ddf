use crate::error::{Error, Result};

/// Extends slices of floats with checked extremes
pub trait SliceExt<T> {
    /// Find the minimum value in a float slice
    ///
    /// Any NAN values, infinite values, or an empty slice will return an
    /// error rather than a misleading number.
    ///
    /// ```rust
    /// # use f90tools_utils::{Error, SliceExt};
    /// assert_eq!([1.5, -0.25, 2.0].try_min(), Ok(-0.25));
    /// assert_eq!([3.0_f32, f32::MIN].try_min(), Ok(f32::MIN));
    ///
    /// assert_eq!([1.0, f64::NAN].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Ordering uses `total_cmp`, the IEEE 754 totalOrder predicate, since
    /// floats do not implement `Ord`.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in a float slice
    ///
    /// Same failure cases as [SliceExt::try_min()].
    ///
    /// ```rust
    /// # use f90tools_utils::{Error, SliceExt};
    /// assert_eq!([1.5, -0.25, 2.0].try_max(), Ok(2.0));
    /// assert_eq!([1.0_f32, f32::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<T>;
}

macro_rules! impl_slice_ext {
    ($t:ty) => {
        impl SliceExt<$t> for [$t] {
            fn try_min(&self) -> Result<$t> {
                check_finite(self.iter().all(|v| v.is_finite()))?;
                self.iter()
                    .min_by(|a, b| a.total_cmp(b))
                    .copied()
                    .ok_or(Error::SliceContainsNoValues)
            }

            fn try_max(&self) -> Result<$t> {
                check_finite(self.iter().all(|v| v.is_finite()))?;
                self.iter()
                    .max_by(|a, b| a.total_cmp(b))
                    .copied()
                    .ok_or(Error::SliceContainsNoValues)
            }
        }
    };
}

impl_slice_ext!(f32);
impl_slice_ext!(f64);

fn check_finite(all_finite: bool) -> Result<()> {
    if all_finite {
        Ok(())
    } else {
        Err(Error::SliceContainsUndefinedValues)
    }
}
