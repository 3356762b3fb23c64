//! GitLab token patterns.

crate::declare_provider!(
    GitLabProvider,
    id: "vcs/gitlab",
    name: "GitLab",
    group: Group::Vcs,
    patterns: [
        crate::pattern! {
            id: "gitlab-pat",
            group: Group::Vcs,
            name: "GitLab Personal Access Token",
            regex: r"glpat-[a-zA-Z0-9_-]{20}",
            keywords: &["glpat-"],
            dashboard_url: "https://gitlab.com/-/profile/personal_access_tokens",
            tags: &["env-var", "gitlab", "vcs"],
        },
    ],
);
