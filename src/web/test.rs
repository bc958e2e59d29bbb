use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use serde_json::Value;

use crate::prelude::*;
use crate::samples::SyntheticSamples;
use crate::store::ModelStore;
use crate::web::create_app;
use crate::web::state::State;

pub fn create_test_client() -> TestClient<impl Endpoint> {
    let state = State::new(
        Arc::new(ModelStore::new()),
        Arc::new(SyntheticSamples::default()),
        20,
        10000,
    );
    TestClient::new(create_app(state))
}

pub async fn read_json(response: TestResponse) -> Result<Value> {
    response
        .0
        .into_body()
        .into_json::<Value>()
        .await
        .map_err(|error| anyhow!("failed to read the response body: {:#}", error))
}
