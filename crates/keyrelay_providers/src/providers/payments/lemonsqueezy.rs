//! Lemon Squeezy key patterns.

crate::declare_provider!(
    LemonSqueezyProvider,
    id: "payments/lemonsqueezy",
    name: "Lemon Squeezy",
    group: Group::Payments,
    patterns: [
        crate::pattern! {
            id: "lemonsqueezy",
            group: Group::Payments,
            name: "Lemon Squeezy API Key",
            regex: r"[a-zA-Z0-9]{40,}",
            keywords: &[],
            context: r"(?i)lemon",
            dashboard_url: "https://app.lemonsqueezy.com/settings/api",
            tags: &["env-var", "lemonsqueezy", "payments"],
        },
    ],
);
