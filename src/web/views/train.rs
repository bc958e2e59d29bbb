use poem::handler;
use poem::web::{Data, Json};

use crate::error::ServiceError;
use crate::models::TrainingSet;
use crate::prelude::*;
use crate::web::models::{parse_body, TrainRequest, TrainResponse};
use crate::web::state::State;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_train(
    body: String,
    Data(state): Data<&State>,
) -> poem::Result<Json<TrainResponse>> {
    let request: TrainRequest = parse_body(&body)?;
    let training_set = resolve_training_set(request, state)?;
    state
        .store
        .train(&training_set)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(TrainResponse::trained(training_set.len())))
}

fn resolve_training_set(
    request: TrainRequest,
    state: &State,
) -> StdResult<TrainingSet, ServiceError> {
    match (request.records, request.samples) {
        (Some(_), Some(_)) => Err(ServiceError::invalid_request(
            "`records` and `samples` are mutually exclusive",
        )),
        (Some(records), None) => {
            for sample in &records {
                sample.record.validate()?;
            }
            debug!(n_records = records.len(), "training on the explicit records");
            Ok(records)
        }
        (None, n_samples) => {
            let n_samples = n_samples.unwrap_or(state.default_samples);
            if n_samples > state.max_samples {
                return Err(ServiceError::invalid_request(format!(
                    "at most {} samples are allowed",
                    state.max_samples,
                )));
            }
            debug!(n_samples, "training on the synthetic samples");
            Ok(state.sample_source.generate(n_samples))
        }
    }
}
