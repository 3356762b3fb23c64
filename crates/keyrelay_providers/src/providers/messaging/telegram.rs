//! Telegram token patterns.

crate::declare_provider!(
    TelegramProvider,
    id: "messaging/telegram",
    name: "Telegram",
    group: Group::Messaging,
    patterns: [
        crate::pattern! {
            id: "telegram",
            group: Group::Messaging,
            name: "Telegram Bot Token",
            regex: r"[0-9]{9,10}:[a-zA-Z0-9_-]{35}",
            keywords: &[],
            dashboard_url: "https://t.me/BotFather",
            tags: &["env-var", "telegram", "messaging"],
        },
    ],
);
