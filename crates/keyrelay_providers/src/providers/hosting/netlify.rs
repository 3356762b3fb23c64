//! Netlify token patterns.

crate::declare_provider!(
    NetlifyProvider,
    id: "hosting/netlify",
    name: "Netlify",
    group: Group::Hosting,
    patterns: [
        crate::pattern! {
            id: "netlify",
            group: Group::Hosting,
            name: "Netlify Personal Access Token",
            regex: r"nfp_[a-zA-Z0-9]{40}",
            keywords: &["nfp_"],
            dashboard_url: "https://app.netlify.com/user/applications#personal-access-tokens",
            tags: &["env-var", "netlify", "hosting"],
        },
    ],
);
