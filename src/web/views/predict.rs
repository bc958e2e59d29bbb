use poem::handler;
use poem::web::{Data, Json};

use crate::error::ServiceError;
use crate::models::PropertyRecord;
use crate::prelude::*;
use crate::web::models::{parse_body, PredictRequest, PredictResponse};
use crate::web::state::State;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_predict(
    body: String,
    Data(state): Data<&State>,
) -> poem::Result<Json<PredictResponse>> {
    let model = state
        .store
        .current()
        .await
        .ok_or(ServiceError::ModelNotTrained)?;
    let request: Option<PredictRequest> = parse_body(&body)?;
    let request = request.ok_or_else(|| ServiceError::invalid_request("empty request body"))?;
    let record = PropertyRecord::try_from(request)?;
    let predicted_price = model.predict_record(&record);
    debug!(?record, predicted_price);
    Ok(Json(PredictResponse { predicted_price }))
}
