//! CLI options.

use clap::{Args, Parser};

use crate::samples::SyntheticSamples;

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct Opts {
    #[command(flatten)]
    pub sentry: SentryOpts,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Args)]
pub struct SentryOpts {
    /// Sentry DSN
    #[arg(short, long, env = "HOUSING_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(
        long,
        default_value = "0",
        env = "HOUSING_TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Fit(FitOpts),
}

/// Runs the prediction web service
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "::", env = "HOUSING_HOST")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8080", env = "HOUSING_PORT")]
    pub port: u16,

    #[command(flatten)]
    pub samples: SampleOpts,

    /// Upper limit for the number of samples a train request may ask for
    #[arg(long, default_value = "10000", value_parser = parsers::non_zero_usize)]
    pub max_samples: usize,

    /// Train on the default samples before accepting requests
    #[arg(long)]
    pub warm_up: bool,
}

/// Fits a model on the synthetic samples and logs it
#[derive(Args)]
pub struct FitOpts {
    #[command(flatten)]
    pub samples: SampleOpts,
}

#[derive(Args, Copy, Clone)]
pub struct SampleOpts {
    /// Number of synthetic samples to train on by default
    #[arg(long = "samples", default_value = "20", value_parser = parsers::non_zero_usize)]
    pub n_samples: usize,

    /// Synthetic samples random seed
    #[arg(long, default_value_t = SyntheticSamples::DEFAULT_SEED)]
    pub seed: u64,
}
