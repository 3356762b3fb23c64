//! Segment key patterns.

crate::declare_provider!(
    SegmentProvider,
    id: "analytics/segment",
    name: "Segment",
    group: Group::Analytics,
    patterns: [
        crate::pattern! {
            id: "segment",
            group: Group::Analytics,
            name: "Segment Write Key",
            regex: r"[a-zA-Z0-9]{32}",
            keywords: &[],
            context: r"(?i)segment",
            dashboard_url: "https://app.segment.com/",
            tags: &["env-var", "segment", "analytics"],
        },
    ],
);
