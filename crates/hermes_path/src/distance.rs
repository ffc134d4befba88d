use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign},
};

use serde::{Serialize, Serializer};

pub trait DistanceUnit: Copy + Eq {
    const NAME: &'static str;
    const NANOMETERS_IN_UNIT: i64;
}

/// Fixed-point distance stored in nanometers, so sums over many edges and
/// legs do not drift.
#[derive(Debug, Clone, Copy, Eq, rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)]
pub struct Distance<T: DistanceUnit> {
    nm: i64,
    unit: PhantomData<T>,
}

macro_rules! create_distance_unit {
    ($struct_name:ident, $string_name:expr , $nm_conv:expr) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub struct $struct_name;

        impl DistanceUnit for $struct_name {
            const NAME: &'static str = $string_name;
            const NANOMETERS_IN_UNIT: i64 = $nm_conv;
        }
    };
}

create_distance_unit!(Meters, "meter", 1_000_000_000);
create_distance_unit!(Kilometers, "kilometer", 1_000_000_000_000);

impl<T: DistanceUnit> Distance<T> {
    pub fn zero() -> Self {
        Distance {
            nm: 0,
            unit: PhantomData,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> f64 {
        (self.nm as f64) / (T::NANOMETERS_IN_UNIT as f64)
    }
}

impl<T: DistanceUnit> Default for Distance<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: DistanceUnit> From<f64> for Distance<T> {
    fn from(value: f64) -> Self {
        Distance {
            nm: (value * (T::NANOMETERS_IN_UNIT as f64)).round() as i64,
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> From<i64> for Distance<T> {
    fn from(value: i64) -> Self {
        Distance {
            nm: value * T::NANOMETERS_IN_UNIT,
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> From<Distance<T>> for f64 {
    fn from(value: Distance<T>) -> Self {
        value.value()
    }
}

impl<T: DistanceUnit> fmt::Display for Distance<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value();
        let plural = if value == 1.0 { "" } else { "s" };
        write!(f, "{} {}{}", value, T::NAME, plural)
    }
}

impl<T: DistanceUnit> Ord for Distance<T> {
    fn cmp(&self, other: &Distance<T>) -> Ordering {
        self.nm.cmp(&other.nm)
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> PartialEq<Distance<T2>> for Distance<T1> {
    fn eq(&self, other: &Distance<T2>) -> bool {
        self.nm == other.nm
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> PartialOrd<Distance<T2>> for Distance<T1> {
    fn partial_cmp(&self, other: &Distance<T2>) -> Option<Ordering> {
        Some(self.nm.cmp(&other.nm))
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> Add<Distance<T2>> for Distance<T1> {
    type Output = Distance<T1>;

    fn add(self, other: Distance<T2>) -> Distance<T1> {
        Distance {
            nm: self.nm + other.nm,
            unit: PhantomData,
        }
    }
}

impl<T1: DistanceUnit, T2: DistanceUnit> AddAssign<Distance<T2>> for Distance<T1> {
    fn add_assign(&mut self, other: Distance<T2>) {
        self.nm += other.nm;
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Distance::zero(), |acc, distance| acc + distance)
    }
}

impl<T: DistanceUnit> Serialize for Distance<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Meters>::from($num)
    };
}

#[macro_export]
macro_rules! kilometers {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Kilometers>::from($num)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_distances_together() {
        let result = meters!(10) + kilometers!(1);
        assert_eq!(result, meters!(1010));
    }

    #[test]
    fn should_sum_without_drift() {
        let total: Distance<Meters> = (0..10).map(|_| meters!(0.1)).sum();
        assert_eq!(total, meters!(1));
        assert_eq!(total.value(), 1.0);
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&meters!(12.5)).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn display() {
        assert_eq!(meters!(1).to_string(), "1 meter");
        assert_eq!(kilometers!(3).to_string(), "3 kilometers");
    }
}
