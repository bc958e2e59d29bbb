use clap::Parser;

use crate::models::{Furnishing, Kitchen, Location};
use crate::opts::{FitOpts, Opts, Subcommand};
use crate::prelude::*;
use crate::regression::FittedModel;
use crate::samples::{SampleSource, SyntheticSamples};

mod codec;
mod error;
mod logging;
mod math;
mod models;
mod opts;
mod prelude;
mod regression;
mod samples;
mod store;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry.sentry_dsn, opts.sentry.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let result = match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts).await,
        Subcommand::Fit(opts) => run_fit(opts),
    };
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}

/// Fits a model on the synthetic samples and logs its weights.
fn run_fit(opts: FitOpts) -> Result {
    let start_instant = Instant::now();
    let training_set = SyntheticSamples::new(opts.samples.seed).generate(opts.samples.n_samples);
    let model = regression::fit(&training_set).context("failed to fit the model")?;
    info!(n_samples = training_set.len(), elapsed = ?start_instant.elapsed(), "fitted");
    info!(intercept = model.intercept, "intercept");
    for (feature, weight) in model.named_weights() {
        info!(feature, weight, "weight");
    }
    log_category_contributions(&model)
}

/// Logs the price contribution of every category value, in the ordinal order.
fn log_category_contributions(model: &FittedModel) -> Result {
    let weight_of = |name: &str| {
        model
            .named_weights()
            .find(|(feature, _)| *feature == name)
            .map_or(0.0, |(_, weight)| weight)
    };
    for ordinal in 1..=6 {
        let location = Location::from_ordinal(ordinal)?;
        let contribution = weight_of("location") * f64::from(ordinal);
        info!(%location, ordinal, contribution, "category");
    }
    for ordinal in 1..=3 {
        let furnishing = Furnishing::from_ordinal(ordinal)?;
        let contribution = weight_of("furnishing") * f64::from(ordinal);
        info!(%furnishing, ordinal, contribution, "category");
    }
    for ordinal in 0..=1 {
        let kitchen = Kitchen::from_ordinal(ordinal)?;
        let contribution = weight_of("kitchen") * f64::from(ordinal);
        info!(%kitchen, ordinal, contribution, "category");
    }
    Ok(())
}
