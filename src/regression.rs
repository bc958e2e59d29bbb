//! Linear price model.
//!
//! Every weight is the univariate least-squares slope of its own column:
//! `cov(x_j, price) / var(x_j)`. The columns are **not** solved jointly,
//! so correlated features (say, area and bedrooms) each get their own full
//! slope. Constant columns get a zero weight.

use crate::codec::{encode, FeatureVector};
use crate::error::FitError;
use crate::math::{dot, mean};
use crate::models::{PropertyRecord, Sample};
use crate::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FittedModel {
    pub intercept: f64,

    /// One weight per feature, in the [`FeatureVector`] order.
    pub weights: Vec<f64>,
}

impl FittedModel {
    /// Raw linear response. Never clamped nor rounded.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.intercept + dot(&self.weights, &features.0)
    }

    #[must_use]
    pub fn predict_record(&self, record: &PropertyRecord) -> f64 {
        self.predict(&encode(record))
    }

    /// Named weights, for display.
    pub fn named_weights(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FeatureVector::NAMES.into_iter().zip(self.weights.iter().copied())
    }
}

#[instrument(level = "debug", skip_all, fields(n_samples = training_set.len()))]
pub fn fit(training_set: &[Sample]) -> StdResult<FittedModel, FitError> {
    let samples: Vec<(FeatureVector, f64)> = training_set
        .iter()
        .map(|sample| (encode(&sample.record), sample.price))
        .collect();
    fit_vectors(&samples)
}

/// Fits the model on already encoded `(features, price)` pairs.
pub fn fit_vectors(samples: &[(FeatureVector, f64)]) -> StdResult<FittedModel, FitError> {
    let (first, _) = samples.first().ok_or(FitError::EmptyTrainingSet)?;
    let n_features = first.len();
    if let Some((index, (features, _))) = samples
        .iter()
        .enumerate()
        .find(|(_, (features, _))| features.len() != n_features)
    {
        return Err(FitError::InconsistentVectorLength {
            index,
            expected: n_features,
            actual: features.len(),
        });
    }

    let feature_means: Vec<f64> = (0..n_features)
        .map(|j| mean(samples.iter().map(|(features, _)| features.0[j])))
        .collect();
    let mean_price = mean(samples.iter().map(|(_, price)| *price));

    let weights: Vec<f64> = feature_means
        .iter()
        .enumerate()
        .map(|(j, feature_mean)| {
            let (covariance, variance) =
                samples
                    .iter()
                    .fold((0.0, 0.0), |(covariance, variance), (features, price)| {
                        let deviation = features.0[j] - feature_mean;
                        (
                            covariance + deviation * (price - mean_price),
                            variance + deviation * deviation,
                        )
                    });
            if variance != 0.0 {
                covariance / variance
            } else {
                0.0
            }
        })
        .collect();

    let intercept = weights
        .iter()
        .zip(&feature_means)
        .fold(mean_price, |intercept, (weight, feature_mean)| intercept - weight * feature_mean);

    debug!(n_samples = samples.len(), intercept, "fitted");
    Ok(FittedModel { intercept, weights })
}
