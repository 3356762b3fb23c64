//! Sentry DSN patterns.

crate::declare_provider!(
    SentryProvider,
    id: "monitoring/sentry",
    name: "Sentry",
    group: Group::Monitoring,
    patterns: [
        crate::pattern! {
            id: "sentry",
            group: Group::Monitoring,
            name: "Sentry DSN",
            regex: r"https://[a-f0-9]{32}@[a-z0-9]+\.ingest\.sentry\.io/[0-9]+",
            keywords: &["ingest.sentry.io"],
            dashboard_url: "https://sentry.io/settings/projects/",
            tags: &["env-var", "sentry", "monitoring"],
        },
    ],
);
