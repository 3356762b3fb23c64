//! Google AI key patterns.

crate::declare_provider!(
    GoogleAiProvider,
    id: "ai/google",
    name: "Google AI",
    group: Group::Ai,
    patterns: [
        crate::pattern! {
            id: "google-ai",
            group: Group::Ai,
            name: "Google AI API Key",
            regex: r"AIza[a-zA-Z0-9_-]{35}",
            keywords: &["AIza"],
            dashboard_url: "https://aistudio.google.com/app/apikey",
            tags: &["env-var", "google", "ai"],
        },
    ],
);
