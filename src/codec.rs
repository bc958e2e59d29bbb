//! Feature codec: turns a [`PropertyRecord`] into a fixed-order numeric vector.
//!
//! Categorical attributes are encoded with fixed ordinals. The location ordinals
//! do not follow the declaration order.
//! There are no fallback ordinals: anything unknown is a [`CodecError`].

use crate::error::CodecError;
use crate::models::{Furnishing, Kitchen, Location, PropertyRecord};

/// Numeric features in the canonical order, see [`FeatureVector::NAMES`].
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector(pub Vec<f64>);

impl FeatureVector {
    pub const LEN: usize = 9;

    pub const NAMES: [&'static str; Self::LEN] = [
        "area",
        "bedrooms",
        "bathrooms",
        "age",
        "neighborhood",
        "parking_spaces",
        "location",
        "furnishing",
        "kitchen",
    ];

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[must_use]
pub fn encode(record: &PropertyRecord) -> FeatureVector {
    FeatureVector(vec![
        record.area,
        record.bedrooms as f64,
        record.bathrooms as f64,
        record.age as f64,
        record.neighborhood,
        record.parking_spaces as f64,
        record.location.ordinal() as f64,
        record.furnishing.ordinal() as f64,
        record.kitchen.ordinal() as f64,
    ])
}

impl Location {
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Rural => 1,
            Self::Suburb => 2,
            Self::Uptown => 3,
            Self::Downtown => 4,
            Self::Metropolitan => 5,
            Self::Beachside => 6,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, CodecError> {
        Self::ALL
            .into_iter()
            .find(|location| location.ordinal() == ordinal)
            .ok_or_else(|| CodecError::invalid("location ordinal", ordinal))
    }

    /// Decodes the positional wire code: `1..=6` in the declaration order.
    pub fn from_code(code: i64) -> Result<Self, CodecError> {
        usize::try_from(code)
            .ok()
            .and_then(|code| code.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| CodecError::invalid("location type", code))
    }
}

impl Furnishing {
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Unfurnished => 1,
            Self::SemiFurnished => 2,
            Self::Furnished => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, CodecError> {
        Self::ALL
            .into_iter()
            .find(|furnishing| furnishing.ordinal() == ordinal)
            .ok_or_else(|| CodecError::invalid("furnishing ordinal", ordinal))
    }

    /// The wire code coincides with the ordinal.
    pub fn from_code(code: i64) -> Result<Self, CodecError> {
        u8::try_from(code)
            .ok()
            .and_then(|code| Self::from_ordinal(code).ok())
            .ok_or_else(|| CodecError::invalid("furnishing state", code))
    }
}

impl Kitchen {
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Open => 1,
            Self::Closed => 0,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, CodecError> {
        match ordinal {
            1 => Ok(Self::Open),
            0 => Ok(Self::Closed),
            _ => Err(CodecError::invalid("kitchen ordinal", ordinal)),
        }
    }

    /// The wire code coincides with the ordinal.
    pub fn from_code(code: i64) -> Result<Self, CodecError> {
        u8::try_from(code)
            .ok()
            .and_then(|code| Self::from_ordinal(code).ok())
            .ok_or_else(|| CodecError::invalid("kitchen type", code))
    }
}
