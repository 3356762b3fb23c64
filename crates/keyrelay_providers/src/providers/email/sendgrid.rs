//! SendGrid key patterns.

crate::declare_provider!(
    SendGridProvider,
    id: "email/sendgrid",
    name: "SendGrid",
    group: Group::Email,
    patterns: [
        crate::pattern! {
            id: "sendgrid",
            group: Group::Email,
            name: "SendGrid API Key",
            regex: r"SG\.[a-zA-Z0-9_-]{22}\.[a-zA-Z0-9_-]{43}",
            keywords: &["SG."],
            dashboard_url: "https://app.sendgrid.com/settings/api_keys",
            tags: &["env-var", "sendgrid", "email"],
        },
    ],
);
