//! Anthropic key patterns.

crate::declare_provider!(
    AnthropicProvider,
    id: "ai/anthropic",
    name: "Anthropic",
    group: Group::Ai,
    patterns: [
        crate::pattern! {
            id: "anthropic",
            group: Group::Ai,
            name: "Anthropic API Key",
            regex: r"sk-ant-[a-zA-Z0-9_-]{90,}",
            keywords: &["sk-ant-"],
            dashboard_url: "https://console.anthropic.com/settings/keys",
            tags: &["env-var", "anthropic", "ai"],
        },
    ],
);
