// Author: Dustin Pilgrim
// License: MIT

use super::{Dictionary, ParameterValue, Tuple};
use crate::error::ParamError;

impl<'a> TryFrom<&'a ParameterValue> for bool {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_bool()
    }
}

impl<'a> TryFrom<&'a ParameterValue> for i64 {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_int()
    }
}

impl<'a> TryFrom<&'a ParameterValue> for f64 {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_real().copied()
    }
}

impl<'a> TryFrom<&'a ParameterValue> for &'a str {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_str()
    }
}

impl<'a> TryFrom<&'a ParameterValue> for String {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_str().map(str::to_string)
    }
}

impl<'a> TryFrom<&'a ParameterValue> for &'a Tuple {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_tuple()
    }
}

impl<'a> TryFrom<&'a ParameterValue> for &'a Dictionary {
    type Error = ParamError;

    fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
        value.as_dict()
    }
}

// Narrower integers are taken from `Int` nodes only, with a range check.
macro_rules! impl_checked_int {
    ($($target:ty),+ $(,)?) => {
        $(
            impl<'a> TryFrom<&'a ParameterValue> for $target {
                type Error = ParamError;

                fn try_from(value: &'a ParameterValue) -> Result<Self, Self::Error> {
                    let n = value.as_int()?;
                    <$target>::try_from(n).map_err(|_| ParamError::OutOfRange {
                        value: n,
                        target: stringify!($target),
                        hint: Some(format!(
                            "Use a number between {} and {}",
                            <$target>::MIN,
                            <$target>::MAX
                        )),
                        code: Some(402),
                    })
                }
            }
        )+
    };
}

impl_checked_int!(i32, u16, u32, u64, usize);
