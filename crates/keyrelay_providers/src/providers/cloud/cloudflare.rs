//! Cloudflare token patterns.

crate::declare_provider!(
    CloudflareProvider,
    id: "cloud/cloudflare",
    name: "Cloudflare",
    group: Group::Cloud,
    patterns: [
        // 40-char tokens with no distinguishing prefix. Gated on context so
        // a 40-char run inside some longer key is not misreported.
        crate::pattern! {
            id: "cloudflare-api",
            group: Group::Cloud,
            name: "Cloudflare API Token",
            regex: r"[a-zA-Z0-9_-]{40}",
            keywords: &[],
            context: r"(?i)cloudflare",
            dashboard_url: "https://dash.cloudflare.com/profile/api-tokens",
            tags: &["env-var", "cloudflare", "cdn"],
        },
    ],
);
