use poem::handler;
use poem::web::{Data, Json};

use crate::error::ServiceError;
use crate::prelude::*;
use crate::web::models::EvaluateResponse;
use crate::web::state::State;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_evaluate(Data(state): Data<&State>) -> poem::Result<Json<EvaluateResponse>> {
    let model = state
        .store
        .current()
        .await
        .ok_or(ServiceError::ModelNotTrained)?;
    Ok(Json(EvaluateResponse::from(model.as_ref())))
}
