//! Error tracking and monitoring providers.

mod datadog;
mod logrocket;
mod sentry;

pub use datadog::DatadogProvider;
pub use logrocket::LogRocketProvider;
pub use sentry::SentryProvider;
