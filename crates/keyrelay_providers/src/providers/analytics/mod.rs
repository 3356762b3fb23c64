//! Product analytics providers.

mod mixpanel;
mod posthog;
mod segment;

pub use mixpanel::MixpanelProvider;
pub use posthog::PostHogProvider;
pub use segment::SegmentProvider;
