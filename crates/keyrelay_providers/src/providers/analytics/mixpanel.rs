//! Mixpanel token patterns.

crate::declare_provider!(
    MixpanelProvider,
    id: "analytics/mixpanel",
    name: "Mixpanel",
    group: Group::Analytics,
    patterns: [
        crate::pattern! {
            id: "mixpanel",
            group: Group::Analytics,
            name: "Mixpanel Token",
            regex: r"[a-f0-9]{32}",
            keywords: &[],
            context: r"(?i)mixpanel",
            dashboard_url: "https://mixpanel.com/settings/project",
            tags: &["env-var", "mixpanel", "analytics"],
        },
    ],
);
