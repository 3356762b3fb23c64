//! Redis connection URL patterns.

crate::declare_provider!(
    RedisProvider,
    id: "database/redis",
    name: "Redis",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "redis",
            group: Group::Database,
            name: "Redis/Upstash URL",
            regex: r"rediss?://[a-zA-Z0-9_-]+:[a-zA-Z0-9_-]+@[a-zA-Z0-9_.-]+",
            keywords: &["redis"],
            dashboard_url: "https://console.upstash.com/",
            tags: &["env-var", "redis", "database"],
        },
    ],
);
