//! Console and Sentry logging.

use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

const CONSOLE_FILTER_ENV: &str = "HOUSING_LOG";
const CONSOLE_DEFAULT_FILTER: &str = "housing_price_service=info,poem=warn";

const SENTRY_FILTER_ENV: &str = "HOUSING_SENTRY_LOG";
const SENTRY_DEFAULT_FILTER: &str = "housing_price_service=debug";

/// Installs the global subscriber and the Sentry client.
///
/// Sentry stays disabled without a DSN, but the returned guard must still be
/// held until exit so that pending events get flushed.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            traces_sample_rate,
            ..Default::default()
        },
    ));
    tracing_subscriber::Registry::default()
        .with(sentry_layer()?)
        .with(console_layer()?)
        .try_init()
        .context("failed to install the tracing subscriber")?;
    Ok(guard)
}

fn env_filter(variable: &str, default: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(variable)
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("invalid `{}` filter", variable))
}

fn console_layer<S>() -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_filter(env_filter(CONSOLE_FILTER_ENV, CONSOLE_DEFAULT_FILTER)?);
    Ok(layer)
}

/// Warnings and errors become Sentry events, the rest are breadcrumbs.
fn sentry_layer<S>() -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata: &Metadata| {
            if *metadata.level() <= Level::WARN {
                EventFilter::Event
            } else {
                EventFilter::Breadcrumb
            }
        })
        .span_filter(|metadata: &Metadata| *metadata.level() <= Level::INFO)
        .with_filter(env_filter(SENTRY_FILTER_ENV, SENTRY_DEFAULT_FILTER)?);
    Ok(layer)
}
