// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Signed integer within the IEEE double safe-integer range.
///
/// Values in this range round-trip losslessly through an f64, so they can
/// stand in for a number value without heap allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SmallInteger {
    data: i64,
}

impl std::fmt::Debug for SmallInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}

impl SmallInteger {
    pub const MIN: i64 = -(2i64.pow(53) - 1);
    pub const MAX: i64 = 2i64.pow(53) - 1;

    pub(crate) fn from_i64_unchecked(value: i64) -> SmallInteger {
        debug_assert!((Self::MIN..=Self::MAX).contains(&value));
        Self { data: value }
    }

    pub fn into_i64(self) -> i64 {
        self.data
    }
}

impl TryFrom<i64> for SmallInteger {
    type Error = ();
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self::from_i64_unchecked(value))
        } else {
            Err(())
        }
    }
}

impl TryFrom<f64> for SmallInteger {
    type Error = ();
    /// Succeeds for integral doubles in the safe-integer range, except
    /// negative zero which must stay a double.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.trunc() == value
            && value.is_finite()
            && !(value == 0.0 && value.is_sign_negative())
            && (Self::MIN as f64..=Self::MAX as f64).contains(&value)
        {
            Ok(Self::from_i64_unchecked(value as i64))
        } else {
            Err(())
        }
    }
}

impl From<u32> for SmallInteger {
    fn from(value: u32) -> Self {
        Self::from_i64_unchecked(value as i64)
    }
}

impl From<i32> for SmallInteger {
    fn from(value: i32) -> Self {
        Self::from_i64_unchecked(value as i64)
    }
}

impl From<SmallInteger> for i64 {
    fn from(value: SmallInteger) -> Self {
        value.into_i64()
    }
}

impl From<SmallInteger> for f64 {
    fn from(value: SmallInteger) -> Self {
        value.into_i64() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::SmallInteger;

    #[test]
    fn range_checks() {
        assert!(SmallInteger::try_from(SmallInteger::MAX).is_ok());
        assert!(SmallInteger::try_from(SmallInteger::MAX + 1).is_err());
        assert!(SmallInteger::try_from(SmallInteger::MIN).is_ok());
        assert!(SmallInteger::try_from(SmallInteger::MIN - 1).is_err());
    }

    #[test]
    fn doubles() {
        assert_eq!(SmallInteger::try_from(3.0).map(|i| i.into_i64()), Ok(3));
        assert!(SmallInteger::try_from(3.5).is_err());
        assert!(SmallInteger::try_from(-0.0).is_err());
        assert!(SmallInteger::try_from(f64::NAN).is_err());
        assert!(SmallInteger::try_from(f64::INFINITY).is_err());
    }
}
