use std::fmt::{Debug, Display};

use num::{PrimInt, Unsigned};

/// Unsigned integer type used for linear indices, levels and columns.
pub trait Size: PrimInt + Unsigned + Debug + Display {
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    fn as_usize(&self) -> usize;
    fn as_f64(&self) -> f64;
    fn from_u8(value: u8) -> Self;
    fn from_usize(value: usize) -> Option<Self>;
    /// Saturating conversion of a non-negative float, rounding toward zero.
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_size {
    ($($t:ty),*) => {
        $(
            impl Size for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn as_usize(&self) -> usize {
                    *self as usize
                }

                #[inline(always)]
                fn as_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline(always)]
                fn from_u8(value: u8) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn from_usize(value: usize) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline(always)]
                fn from_f64_lossy(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_size!(usize, u64, u32, u16, u8);
