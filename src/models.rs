//! Property records and their categorical attributes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    Downtown,
    Suburb,
    Rural,
    Uptown,
    Beachside,
    Metropolitan,
}

impl Location {
    pub const ALL: [Self; 6] = [
        Self::Downtown,
        Self::Suburb,
        Self::Rural,
        Self::Uptown,
        Self::Beachside,
        Self::Metropolitan,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Downtown => "downtown",
            Self::Suburb => "suburb",
            Self::Rural => "rural",
            Self::Uptown => "uptown",
            Self::Beachside => "beachside",
            Self::Metropolitan => "metropolitan",
        }
    }
}

impl FromStr for Location {
    type Err = CodecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|location| location.as_str() == value)
            .ok_or_else(|| CodecError::invalid("location", value))
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Furnishing {
    Furnished,
    Unfurnished,
    SemiFurnished,
}

impl Furnishing {
    pub const ALL: [Self; 3] = [Self::Furnished, Self::Unfurnished, Self::SemiFurnished];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Furnished => "furnished",
            Self::Unfurnished => "unfurnished",
            Self::SemiFurnished => "semi-furnished",
        }
    }
}

impl FromStr for Furnishing {
    type Err = CodecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|furnishing| furnishing.as_str() == value)
            .ok_or_else(|| CodecError::invalid("furnishing", value))
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Kitchen {
    Open,
    Closed,
}

impl Kitchen {
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for Kitchen {
    type Err = CodecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kitchen| kitchen.as_str() == value)
            .ok_or_else(|| CodecError::invalid("kitchen", value))
    }
}

/// Wires up `Display`, `TryFrom<String>` and `Into<String>` for a category,
/// so that serde goes through [`FromStr`] and reports [`CodecError`].
macro_rules! impl_category_conversions {
    ($($category:ty),*) => {$(
        impl Display for $category {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $category {
            type Error = CodecError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_str(&value)
            }
        }

        impl From<$category> for String {
            fn from(category: $category) -> Self {
                category.as_str().to_string()
            }
        }
    )*};
}

impl_category_conversions!(Location, Furnishing, Kitchen);

/// Property attributes, without the price.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PropertyRecord {
    /// Living area in square units.
    pub area: f64,

    pub bedrooms: u32,
    pub bathrooms: u32,

    /// Age in years.
    pub age: u32,

    /// Neighborhood quality, nominally from 1.0 to 5.0.
    pub neighborhood: f64,

    pub parking_spaces: u32,
    pub location: Location,
    pub furnishing: Furnishing,
    pub kitchen: Kitchen,
}

impl PropertyRecord {
    /// Checks the numeric constraints serde cannot express.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.area > 0.0 {
            Ok(())
        } else {
            Err(CodecError::NonPositive {
                field: "area",
                value: self.area.to_string(),
            })
        }
    }
}

/// Labeled record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sample {
    #[serde(flatten)]
    pub record: PropertyRecord,

    pub price: f64,
}

pub type TrainingSet = Vec<Sample>;
