//! PostHog key patterns.

crate::declare_provider!(
    PostHogProvider,
    id: "analytics/posthog",
    name: "PostHog",
    group: Group::Analytics,
    patterns: [
        crate::pattern! {
            id: "posthog",
            group: Group::Analytics,
            name: "PostHog API Key",
            regex: r"phc_[a-zA-Z0-9]{32,}",
            keywords: &["phc_"],
            dashboard_url: "https://app.posthog.com/project/settings",
            tags: &["env-var", "posthog", "analytics"],
        },
    ],
);
