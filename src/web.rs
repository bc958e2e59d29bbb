use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::samples::{SampleSource, SyntheticSamples};
use crate::store::ModelStore;
use crate::web::middleware::{
    render_panic,
    ErrorMiddleware,
    RequestLogMiddleware,
    ResponseHeadersMiddleware,
};
use crate::web::state::State;

mod middleware;
pub mod models;
pub mod state;
mod views;

#[cfg(test)]
mod test;

#[instrument(skip_all, fields(host = opts.host.as_str(), port = opts.port))]
pub async fn run(opts: WebOpts) -> Result {
    let store = Arc::new(ModelStore::new());
    let sample_source = Arc::new(SyntheticSamples::new(opts.samples.seed));

    if opts.warm_up {
        let training_set = sample_source.generate(opts.samples.n_samples);
        store.train(&training_set).await.context("failed to warm up the model")?;
    }

    let state = State::new(store, sample_source, opts.samples.n_samples, opts.max_samples);
    let app = create_app(state);
    info!("listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    error!("failed to listen for the shutdown signal: {:#}", error);
                }
            },
            Some(StdDuration::from_secs(5)),
        )
        .await?;
    info!("stopped");
    Ok(())
}

pub fn create_app(state: State) -> impl Endpoint<Output = Response> {
    let routes = Route::new()
        .at("/api/status", get(views::status::get_status))
        .at("/api/train", post(views::train::post_train))
        .at("/api/predict", post(views::predict::post_predict))
        .at("/api/evaluate", get(views::evaluate::get_evaluate))
        .data(state);
    with_middleware(routes)
}

fn with_middleware(
    endpoint: impl Endpoint<Output = Response>,
) -> impl Endpoint<Output = Response> {
    endpoint
        .with(CatchPanic::new().with_handler(render_panic))
        .with(ErrorMiddleware)
        .with(ResponseHeadersMiddleware)
        .with(RequestLogMiddleware)
}

#[cfg(test)]
mod tests {
    use poem::http::{HeaderValue, StatusCode};
    use poem::test::TestClient;
    use serde_json::{json, Value};

    use super::*;
    use crate::web::test::{create_test_client, read_json};

    fn predict_body() -> Value {
        json!({
            "squareFootage": 1500,
            "bedrooms": 2,
            "bathrooms": 1,
            "age": 10,
            "neighborhood": 3.0,
            "parkingSpaces": 1,
            "locationType": 2,
            "furnishingState": 1,
            "kitchenType": 0,
        })
    }

    fn record(area: f64, price: f64) -> Value {
        json!({
            "area": area,
            "bedrooms": 2,
            "bathrooms": 1,
            "age": 10,
            "neighborhood": 3.0,
            "parking_spaces": 1,
            "location": "suburb",
            "furnishing": "unfurnished",
            "kitchen": "closed",
            "price": price,
        })
    }

    #[tokio::test]
    async fn status_untrained_ok() -> Result {
        let client = create_test_client();
        let response = client.get("/api/status").send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(read_json(response).await?, json!({"trained": false}));
        Ok(())
    }

    #[tokio::test]
    async fn predict_untrained_fails() -> Result {
        let client = create_test_client();
        let response = client.post("/api/predict").body_json(&predict_body()).send().await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await?, json!({"error": "Model not trained"}));
        Ok(())
    }

    #[tokio::test]
    async fn evaluate_untrained_fails() -> Result {
        let client = create_test_client();
        let response = client.get("/api/evaluate").send().await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await?, json!({"error": "Model not trained"}));
        Ok(())
    }

    #[tokio::test]
    async fn train_default_samples_ok() -> Result {
        let client = create_test_client();
        let response = client.post("/api/train").send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(read_json(response).await?, json!({"samples": 20, "status": "trained"}));

        let response = client.get("/api/status").send().await;
        assert_eq!(read_json(response).await?, json!({"trained": true}));
        Ok(())
    }

    #[tokio::test]
    async fn train_sample_count_ok() -> Result {
        let client = create_test_client();
        let response = client.post("/api/train").body_json(&json!({"samples": 100})).send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(read_json(response).await?, json!({"samples": 100, "status": "trained"}));
        Ok(())
    }

    #[tokio::test]
    async fn train_too_many_samples_fails() -> Result {
        let client = create_test_client();
        let response = client
            .post("/api/train")
            .body_json(&json!({"samples": 1_000_000}))
            .send()
            .await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn train_zero_samples_fails() -> Result {
        let client = create_test_client();
        let response = client.post("/api/train").body_json(&json!({"samples": 0})).send().await;
        assert_eq!(response.0.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(response).await?,
            json!({"error": "Training failed: training set is empty"}),
        );
        Ok(())
    }

    #[tokio::test]
    async fn train_malformed_body_fails() -> Result {
        let client = create_test_client();
        let response = client.post("/api/train").body("{samples: twenty}").send().await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn train_unknown_category_fails() -> Result {
        let client = create_test_client();
        let mut record = record(1000.0, 100000.0);
        record["location"] = json!("moon");
        let response = client
            .post("/api/train")
            .body_json(&json!({"records": [record]}))
            .send()
            .await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn train_non_positive_area_fails() -> Result {
        let client = create_test_client();
        let response = client
            .post("/api/train")
            .body_json(&json!({"records": [record(-1000.0, 100000.0), record(0.0, 200000.0)]}))
            .send()
            .await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await?,
            json!({"error": "Invalid request: invalid record: `area` must be positive, got `-1000`"}),
        );

        let response = client.get("/api/status").send().await;
        assert_eq!(read_json(response).await?, json!({"trained": false}));
        Ok(())
    }

    #[tokio::test]
    async fn predict_non_positive_area_fails() -> Result {
        let client = create_test_client();
        client.post("/api/train").send().await;
        let mut body = predict_body();
        body["squareFootage"] = json!(0);
        let response = client.post("/api/predict").body_json(&body).send().await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn train_predict_evaluate_ok() -> Result {
        let client = create_test_client();
        let response = client
            .post("/api/train")
            .body_json(&json!({"records": [record(1000.0, 100000.0), record(2000.0, 200000.0)]}))
            .send()
            .await;
        assert_eq!(read_json(response).await?, json!({"samples": 2, "status": "trained"}));

        let response = client.post("/api/predict").body_json(&predict_body()).send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(read_json(response).await?, json!({"predictedPrice": 150000.0}));

        let response = client.get("/api/evaluate").send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await?,
            json!({
                "coefficients": [100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "intercept": 0.0,
            }),
        );
        Ok(())
    }

    #[tokio::test]
    async fn train_is_idempotent() -> Result {
        let client = create_test_client();
        client.post("/api/train").send().await;
        let first = read_json(client.get("/api/evaluate").send().await).await?;
        client.post("/api/train").send().await;
        let second = read_json(client.get("/api/evaluate").send().await).await?;
        assert_eq!(first, second);
        assert_eq!(first["coefficients"].as_array().map(Vec::len), Some(9));
        Ok(())
    }

    #[tokio::test]
    async fn predict_invalid_location_fails() -> Result {
        let client = create_test_client();
        client.post("/api/train").send().await;
        let mut body = predict_body();
        body["locationType"] = json!(7);
        let response = client.post("/api/predict").body_json(&body).send().await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await?,
            json!({"error": "Invalid request: invalid record: unknown location type `7`"}),
        );
        Ok(())
    }

    #[tokio::test]
    async fn predict_missing_field_fails() -> Result {
        let client = create_test_client();
        client.post("/api/train").send().await;
        let response = client
            .post("/api/predict")
            .body_json(&json!({"squareFootage": 1500}))
            .send()
            .await;
        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn wrong_method_fails() -> Result {
        let client = create_test_client();
        let response = client.get("/api/predict").send().await;
        assert_eq!(response.0.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(read_json(response).await?, json!({"error": "Method not allowed"}));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_path_fails() -> Result {
        let client = create_test_client();
        let response = client.get("/api/unknown").send().await;
        assert_eq!(response.0.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn panic_renders_json_error() -> Result {
        #[poem::handler]
        fn explode() -> &'static str {
            panic!("explode")
        }

        let client = TestClient::new(with_middleware(Route::new().at("/explode", get(explode))));
        let response = client.get("/explode").send().await;
        assert_eq!(response.0.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.0.headers().get("Access-Control-Allow-Origin"),
            Some(&HeaderValue::from_static("*")),
        );
        assert_eq!(read_json(response).await?, json!({"error": "Internal server error"}));
        Ok(())
    }

    #[tokio::test]
    async fn cors_header_ok() {
        let client = create_test_client();
        let response = client.get("/api/status").send().await;
        assert_eq!(
            response.0.headers().get("Access-Control-Allow-Origin"),
            Some(&HeaderValue::from_static("*")),
        );
    }
}
