//! Discord token patterns.

crate::declare_provider!(
    DiscordProvider,
    id: "messaging/discord",
    name: "Discord",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
            id: "discord-bot",
            group: Group::Messaging,
            name: "Discord Bot Token",
            regex: r"[MN][a-zA-Z0-9_-]{23,}\.[a-zA-Z0-9_-]{6}\.[a-zA-Z0-9_-]{27,}",
            keywords: &[],
            dashboard_url: "https://discord.com/developers/applications",
            tags: &["env-var", "discord", "messaging"],
        },
        crate::pattern! {
            id: "discord-webhook",
            group: Group::Messaging,
            name: "Discord Webhook URL",
            regex: r"https://discord(?:app)?\.com/api/webhooks/[0-9]+/[a-zA-Z0-9_-]+",
            keywords: &["discord"],
            dashboard_url: "https://discord.com/developers/applications",
            tags: &["env-var", "discord", "messaging"],
        },
    ],
);
