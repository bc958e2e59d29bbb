use poem::handler;
use poem::web::{Data, Json};

use crate::prelude::*;
use crate::web::models::StatusResponse;
use crate::web::state::State;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_status(Data(state): Data<&State>) -> Json<StatusResponse> {
    Json(StatusResponse {
        trained: state.store.is_trained().await,
    })
}
