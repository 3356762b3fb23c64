//! Twilio credential patterns.

crate::declare_provider!(
    TwilioProvider,
    id: "messaging/twilio",
    name: "Twilio",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
            id: "twilio-account-sid",
            group: Group::Messaging,
            name: "Twilio Account SID",
            regex: r"AC[a-f0-9]{32}",
            keywords: &[],
            dashboard_url: "https://console.twilio.com/",
            tags: &["env-var", "twilio", "communications"],
        },
        // Bare 32-char hex, gated on Twilio pages.
        crate::pattern! {
            id: "twilio-auth-token",
            group: Group::Messaging,
            name: "Twilio Auth Token",
            regex: r"[a-f0-9]{32}",
            keywords: &[],
            context: r"(?i)twilio",
            dashboard_url: "https://console.twilio.com/",
            tags: &["env-var", "twilio", "communications"],
        },
    ],
);
