//! Federation time

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Logical time of a federate, a double with a `+inf` end of time
///
/// Comparisons treat values closer than a relative epsilon as equal, and all
/// positive infinities as equal to each other.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FedTime(f64);

impl FedTime {
    pub const ZERO: FedTime = FedTime(0.0);
    pub const EPSILON: FedTime = FedTime(f64::EPSILON);
    pub const POSITIVE_INFINITY: FedTime = FedTime(f64::INFINITY);

    pub fn new(time: f64) -> Self {
        Self(time)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive_infinity(self) -> bool {
        self.0 == f64::INFINITY
    }
}

/// Relative comparison scaled by the larger exponent of the two operands
fn approx_cmp(a: f64, b: f64) -> Ordering {
    let (_, exponent) = frexp(if a.abs() > b.abs() { a } else { b });
    let delta = f64::EPSILON * 2f64.powi(exponent);
    let diff = a - b;
    if diff > delta {
        Ordering::Greater
    } else if diff < -delta {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let exponent = x.abs().log2().floor() as i32 + 1;
    (x / 2f64.powi(exponent), exponent)
}

impl PartialEq for FedTime {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for FedTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_positive_infinity(), other.is_positive_infinity()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) if self.0.is_nan() || other.0.is_nan() => None,
            (false, false) => Some(approx_cmp(self.0, other.0)),
        }
    }
}

impl From<f64> for FedTime {
    fn from(time: f64) -> Self {
        Self(time)
    }
}

impl Add for FedTime {
    type Output = FedTime;

    fn add(self, rhs: FedTime) -> FedTime {
        FedTime(self.0 + rhs.0)
    }
}

impl AddAssign for FedTime {
    fn add_assign(&mut self, rhs: FedTime) {
        self.0 += rhs.0;
    }
}

impl Sub for FedTime {
    type Output = FedTime;

    fn sub(self, rhs: FedTime) -> FedTime {
        FedTime(self.0 - rhs.0)
    }
}

impl SubAssign for FedTime {
    fn sub_assign(&mut self, rhs: FedTime) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for FedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_positive_infinity() {
            f.write_str("+inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_times_compare_equal() {
        let a = FedTime::new(0.1 + 0.2);
        let b = FedTime::new(0.3);
        assert_eq!(a, b);
        assert!(a <= b && a >= b);
    }

    #[test]
    fn infinity_is_the_end_of_time() {
        let end = FedTime::POSITIVE_INFINITY;
        assert!(end > FedTime::new(1e300));
        assert_eq!(end, end + FedTime::new(5.0));
        assert!(!(end < end));
        assert_eq!(end.to_string(), "+inf");
    }

    #[test]
    fn arithmetic_and_display() {
        let mut t = FedTime::new(10.0);
        t += FedTime::new(2.5);
        t -= FedTime::new(0.5);
        assert_eq!(t, FedTime::new(12.0));
        assert_eq!(t.to_string(), "12");
        assert!(FedTime::ZERO.is_zero());
        assert!(FedTime::ZERO < FedTime::new(1.0));
    }
}
