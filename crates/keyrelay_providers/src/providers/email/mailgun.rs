//! Mailgun key patterns.

crate::declare_provider!(
    MailgunProvider,
    id: "email/mailgun",
    name: "Mailgun",
    group: Group::Email,
    patterns: [
        crate::pattern! {
            id: "mailgun",
            group: Group::Email,
            name: "Mailgun API Key",
            regex: r"key-[a-f0-9]{32}|[a-f0-9]{32}-[a-f0-9]{8}-[a-f0-9]{8}",
            keywords: &[],
            dashboard_url: "https://app.mailgun.com/app/account/security/api_keys",
            tags: &["env-var", "mailgun", "email"],
        },
    ],
);
