//! Vercel token patterns.

crate::declare_provider!(
    VercelProvider,
    id: "hosting/vercel",
    name: "Vercel",
    group: Group::Hosting,
    patterns: [
        crate::pattern! {
            id: "vercel",
            group: Group::Hosting,
            name: "Vercel Token",
            regex: r"[a-zA-Z0-9]{24}",
            keywords: &[],
            context: r"(?i)vercel",
            dashboard_url: "https://vercel.com/account/tokens",
            tags: &["env-var", "vercel", "hosting"],
        },
    ],
);
