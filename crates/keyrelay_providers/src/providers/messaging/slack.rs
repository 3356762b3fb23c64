//! Slack token patterns.

crate::declare_provider!(
    SlackProvider,
    id: "messaging/slack",
    name: "Slack",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
            id: "slack-bot",
            group: Group::Messaging,
            name: "Slack Bot Token",
            regex: r"xoxb-[0-9]+-[0-9]+-[a-zA-Z0-9]+",
            keywords: &["xoxb-"],
            dashboard_url: "https://api.slack.com/apps",
            tags: &["env-var", "slack", "messaging"],
        },
        crate::pattern! {
            id: "slack-user",
            group: Group::Messaging,
            name: "Slack User Token",
            regex: r"xoxp-[0-9]+-[0-9]+-[0-9]+-[a-f0-9]+",
            keywords: &["xoxp-"],
            dashboard_url: "https://api.slack.com/apps",
            tags: &["env-var", "slack", "messaging"],
        },
        crate::pattern! {
            id: "slack-webhook",
            group: Group::Messaging,
            name: "Slack Webhook URL",
            regex: r"https://hooks\.slack\.com/services/T[a-zA-Z0-9]+/B[a-zA-Z0-9]+/[a-zA-Z0-9]+",
            keywords: &["hooks.slack.com"],
            dashboard_url: "https://api.slack.com/apps",
            tags: &["env-var", "slack", "messaging"],
        },
    ],
);
