//! Priority keys.

use std::cmp::{Ordering, Reverse};
use std::fmt::Debug;

/// A totally-ordered key that decides extraction precedence.
///
/// Lower values are extracted first. Implementations must be a total order;
/// queues rely on it to keep their ordering invariant.
pub trait Priority: Copy + Debug {
    /// Compares two priorities.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer_priority {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Priority for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_integer_priority!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Numeric order where defined, so -0.0 and 0.0 tie. NaN only reaches the
// fallback and is placed at the ends by its sign.
macro_rules! impl_float_priority {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Priority for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other)
                        .unwrap_or_else(|| self.total_cmp(other))
                }
            }
        )*
    };
}

impl_float_priority!(f32, f64);

/// Inverts the order: higher values are extracted first.
impl<P: Priority> Priority for Reverse<P> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}
