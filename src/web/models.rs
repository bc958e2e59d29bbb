//! Wire models.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::models::{Furnishing, Kitchen, Location, PropertyRecord, Sample};
use crate::regression::FittedModel;

/// Strictly decodes a JSON request body. An empty body stands for `{}`.
pub fn parse_body<T: DeserializeOwned + Default>(body: &str) -> Result<T, ServiceError> {
    if body.trim().is_empty() {
        Ok(T::default())
    } else {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub trained: bool,
}

#[derive(Deserialize, Default, Debug)]
pub struct TrainRequest {
    /// Number of synthetic samples to train on.
    #[serde(default)]
    pub samples: Option<usize>,

    /// Explicit training set, mutually exclusive with `samples`.
    #[serde(default)]
    pub records: Option<Vec<Sample>>,
}

#[derive(Serialize, Debug)]
pub struct TrainResponse {
    pub samples: usize,
    pub status: &'static str,
}

impl TrainResponse {
    pub const fn trained(samples: usize) -> Self {
        Self {
            samples,
            status: "trained",
        }
    }
}

/// Prediction request, categories are passed as positional codes.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub square_footage: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub age: u32,
    pub neighborhood: f64,
    pub parking_spaces: u32,
    pub location_type: i64,
    pub furnishing_state: i64,
    pub kitchen_type: i64,
}

impl TryFrom<PredictRequest> for PropertyRecord {
    type Error = ServiceError;

    fn try_from(request: PredictRequest) -> Result<Self, Self::Error> {
        let record = Self {
            area: request.square_footage,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            age: request.age,
            neighborhood: request.neighborhood,
            parking_spaces: request.parking_spaces,
            location: Location::from_code(request.location_type)?,
            furnishing: Furnishing::from_code(request.furnishing_state)?,
            kitchen: Kitchen::from_code(request.kitchen_type)?,
        };
        record.validate()?;
        Ok(record)
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub predicted_price: f64,
}

#[derive(Serialize, Debug)]
pub struct EvaluateResponse {
    /// Weights in the canonical feature order.
    pub coefficients: Vec<f64>,

    pub intercept: f64,
}

impl From<&FittedModel> for EvaluateResponse {
    fn from(model: &FittedModel) -> Self {
        Self {
            coefficients: model.weights.clone(),
            intercept: model.intercept,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
