//! Hugging Face key patterns.

crate::declare_provider!(
    HuggingFaceProvider,
    id: "ai/huggingface",
    name: "Hugging Face",
    group: Group::Ai,
    patterns: [
        crate::pattern! {
            id: "huggingface",
            group: Group::Ai,
            name: "Hugging Face Token",
            regex: r"hf_[a-zA-Z0-9]{34}",
            keywords: &["hf_"],
            dashboard_url: "https://huggingface.co/settings/tokens",
            tags: &["env-var", "huggingface", "ai"],
        },
    ],
);
