//! Resend key patterns.

crate::declare_provider!(
    ResendProvider,
    id: "email/resend",
    name: "Resend",
    group: Group::Email,
    patterns: [
        crate::pattern! {
            id: "resend",
            group: Group::Email,
            name: "Resend API Key",
            regex: r"re_[a-zA-Z0-9]{32,}",
            keywords: &["re_"],
            dashboard_url: "https://resend.com/api-keys",
            tags: &["env-var", "resend", "email"],
        },
    ],
);
