//! Arithmetic on [`Angle`]: sums, differences and negation.
//!
//! Results are raw. Nothing here folds into a range; that is the job of
//! [`normalize`](super::normalize) and the coordinate canonicalizer.

use super::core::Angle;
use core::ops::{Add, Neg, Sub};

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.radians())
    }
}
