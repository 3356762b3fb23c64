//! Builtin providers for API key detection.
//!
//! `builtin_providers` returns providers in catalog order. The detector
//! evaluates patterns in exactly this order, so changes here are
//! behaviour changes.

mod ai;
mod analytics;
mod auth;
mod backend;
mod cloud;
mod cms;
mod database;
mod devtools;
mod ecommerce;
mod email;
mod hosting;
mod maps;
mod media;
mod messaging;
mod monitoring;
mod payments;
mod search;
mod vcs;

use crate::provider::Provider;

/// Returns all builtin providers in catalog order.
#[must_use]
pub fn builtin_providers() -> Vec<&'static dyn Provider> {
    vec![
        // AI providers
        &ai::OpenAiProvider,
        &ai::AnthropicProvider,
        &ai::GoogleAiProvider,
        &ai::CohereProvider,
        &ai::ReplicateProvider,
        &ai::HuggingFaceProvider,
        // Version control
        &vcs::GitHubProvider,
        &vcs::GitLabProvider,
        &vcs::BitbucketProvider,
        // Cloud and hosting
        &cloud::AwsProvider,
        &hosting::VercelProvider,
        &hosting::NetlifyProvider,
        &hosting::RailwayProvider,
        &hosting::RenderProvider,
        &hosting::FlyioProvider,
        &cloud::DigitalOceanProvider,
        &cloud::CloudflareProvider,
        // Databases and backends
        &database::SupabaseProvider,
        &database::PlanetScaleProvider,
        &database::NeonProvider,
        &database::TursoProvider,
        &database::MongoDbProvider,
        &database::RedisProvider,
        &backend::FirebaseProvider,
        &backend::ConvexProvider,
        // Auth providers
        &auth::ClerkProvider,
        &auth::Auth0Provider,
        // Payments
        &payments::StripeProvider,
        &payments::PayPalProvider,
        &payments::SquareProvider,
        &payments::LemonSqueezyProvider,
        // Email services
        &email::SendGridProvider,
        &email::ResendProvider,
        &email::PostmarkProvider,
        &email::MailgunProvider,
        &email::MailchimpProvider,
        // Messaging and communication
        &messaging::TwilioProvider,
        &messaging::SlackProvider,
        &messaging::DiscordProvider,
        &messaging::TelegramProvider,
        // Monitoring and analytics
        &monitoring::SentryProvider,
        &monitoring::DatadogProvider,
        &analytics::SegmentProvider,
        &analytics::MixpanelProvider,
        &analytics::PostHogProvider,
        &monitoring::LogRocketProvider,
        // Search
        &search::AlgoliaProvider,
        &search::MeilisearchProvider,
        // Developer tools
        &devtools::LinearProvider,
        &devtools::NotionProvider,
        &devtools::AirtableProvider,
        &devtools::NpmProvider,
        &devtools::DockerProvider,
        // E-commerce
        &ecommerce::ShopifyProvider,
        // Maps
        &maps::MapboxProvider,
        &maps::GoogleMapsProvider,
        // Media and storage
        &media::CloudinaryProvider,
        &media::UploadThingProvider,
        // CMS
        &cms::ContentfulProvider,
        &cms::SanityProvider,
    ]
}
