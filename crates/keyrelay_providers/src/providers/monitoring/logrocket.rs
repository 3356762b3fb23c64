//! LogRocket app ID patterns.

crate::declare_provider!(
    LogRocketProvider,
    id: "monitoring/logrocket",
    name: "LogRocket",
    group: Group::Monitoring,
    patterns: [
        crate::pattern! {
            id: "logrocket",
            group: Group::Monitoring,
            name: "LogRocket App ID",
            regex: r"[a-z0-9]+/[a-z0-9-]+",
            keywords: &[],
            context: r"(?i)logrocket",
            dashboard_url: "https://app.logrocket.com/",
            tags: &["env-var", "logrocket", "monitoring"],
        },
    ],
);
