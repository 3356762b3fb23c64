//! Datadog key patterns.

crate::declare_provider!(
    DatadogProvider,
    id: "monitoring/datadog",
    name: "Datadog",
    group: Group::Monitoring,
    patterns: [
        crate::pattern! {
            id: "datadog",
            group: Group::Monitoring,
            name: "Datadog API Key",
            regex: r"[a-f0-9]{32}",
            keywords: &[],
            context: r"(?i)datadog",
            dashboard_url: "https://app.datadoghq.com/organization-settings/api-keys",
            tags: &["env-var", "datadog", "monitoring"],
        },
    ],
);
