//! Mailchimp key patterns.

crate::declare_provider!(
    MailchimpProvider,
    id: "email/mailchimp",
    name: "Mailchimp",
    group: Group::Email,
    patterns: [
        crate::pattern! {
            id: "mailchimp",
            group: Group::Email,
            name: "Mailchimp API Key",
            regex: r"[a-f0-9]{32}-us[0-9]{1,2}",
            keywords: &["-us"],
            dashboard_url: "https://admin.mailchimp.com/account/api/",
            tags: &["env-var", "mailchimp", "email"],
        },
    ],
);
