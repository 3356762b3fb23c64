//! Bitbucket credential patterns.

crate::declare_provider!(
    BitbucketProvider,
    id: "vcs/bitbucket",
    name: "Bitbucket",
    group: Group::Vcs,
    patterns: [
        crate::pattern! {
            id: "bitbucket",
            group: Group::Vcs,
            name: "Bitbucket App Password",
            regex: r"ATBB[a-zA-Z0-9]{32}",
            keywords: &["ATBB"],
            dashboard_url: "https://bitbucket.org/account/settings/app-passwords/",
            tags: &["env-var", "bitbucket", "vcs"],
        },
    ],
);
