//! Scalar angle in radians.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::Rotation;

/// Angle in radians. Not wrapped unless `wrapped()` is called.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };
    pub const HALF_TURN: Angle = Angle { radians: PI };
    pub const FULL_TURN: Angle = Angle { radians: TAU };

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    #[inline]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Same direction, expressed in `(-π, π]`.
    pub fn wrapped(self) -> Self {
        let mut x = self.radians % TAU;
        if x <= -PI {
            x += TAU;
        } else if x > PI {
            x -= TAU;
        }
        Self { radians: x }
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    #[inline]
    pub fn to_rotation(self) -> Rotation {
        Rotation::new(self.radians)
    }

    /// Angle of a rotation, in `(-π, π]`.
    #[inline]
    pub fn of(rotation: &Rotation) -> Self {
        Self {
            radians: rotation.angle(),
        }
    }
}

impl From<Angle> for Rotation {
    #[inline]
    fn from(angle: Angle) -> Self {
        angle.to_rotation()
    }
}

impl From<Rotation> for Angle {
    #[inline]
    fn from(rotation: Rotation) -> Self {
        Angle::of(&rotation)
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        self.radians += rhs.radians;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn degrees_round_trip() {
        let a = Angle::from_degrees(90.0);
        assert!((a.radians() - FRAC_PI_2).abs() < 1e-12);
        assert!((a.degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn wrapping_lands_in_half_open_range() {
        assert!((Angle::from_radians(2.5 * PI).wrapped().radians() - FRAC_PI_2).abs() < 1e-12);
        assert!((Angle::from_radians(-PI).wrapped().radians() - PI).abs() < 1e-12);
        let w = Angle::from_radians(-7.5).wrapped().radians();
        assert!(w > -PI && w <= PI);
        assert!((w.sin() - (-7.5f64).sin()).abs() < 1e-12);
        assert!((w.cos() - (-7.5f64).cos()).abs() < 1e-12);
    }

    #[test]
    fn rotation_conversion() {
        let a = Angle::from_degrees(-30.0);
        let r: Rotation = a.into();
        assert!((Angle::from(r).radians() - a.radians()).abs() < 1e-12);
        assert!(((a + a) * 0.5 - a).radians().abs() < 1e-12);
        assert_eq!(-(-a), a);
    }
}
