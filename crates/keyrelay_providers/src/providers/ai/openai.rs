//! OpenAI key patterns.

crate::declare_provider!(
    OpenAiProvider,
    id: "ai/openai",
    name: "OpenAI",
    group: Group::Ai,
    patterns: [
        crate::pattern! {
            id: "openai",
            group: Group::Ai,
            name: "OpenAI API Key",
            regex: r"sk-[a-zA-Z0-9]{48,}",
            keywords: &["sk-"],
            dashboard_url: "https://platform.openai.com/api-keys",
            tags: &["env-var", "openai", "ai"],
        },
        crate::pattern! {
            id: "openai-project",
            group: Group::Ai,
            name: "OpenAI Project Key",
            regex: r"sk-proj-[a-zA-Z0-9_-]{80,}",
            keywords: &["sk-proj-"],
            dashboard_url: "https://platform.openai.com/api-keys",
            tags: &["env-var", "openai", "ai"],
        },
    ],
);
