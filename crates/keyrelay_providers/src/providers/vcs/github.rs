//! GitHub token patterns.

crate::declare_provider!(
    GitHubProvider,
    id: "vcs/github",
    name: "GitHub",
    group: Group::Vcs,
    patterns: [
        crate::pattern! {
            id: "github-pat",
            group: Group::Vcs,
            name: "GitHub Personal Access Token",
            regex: r"ghp_[a-zA-Z0-9]{36}",
            keywords: &["ghp_"],
            dashboard_url: "https://github.com/settings/tokens",
            tags: &["env-var", "github", "vcs"],
        },
        crate::pattern! {
            id: "github-pat-fine",
            group: Group::Vcs,
            name: "GitHub Fine-Grained PAT",
            regex: r"github_pat_[a-zA-Z0-9_]{82}",
            keywords: &["github_pat_"],
            dashboard_url: "https://github.com/settings/tokens",
            tags: &["env-var", "github", "vcs"],
        },
        crate::pattern! {
            id: "github-oauth",
            group: Group::Vcs,
            name: "GitHub OAuth Token",
            regex: r"gho_[a-zA-Z0-9]{36}",
            keywords: &["gho_"],
            dashboard_url: "https://github.com/settings/developers",
            tags: &["env-var", "github", "vcs"],
        },
        crate::pattern! {
            id: "github-app",
            group: Group::Vcs,
            name: "GitHub App Token",
            regex: r"ghu_[a-zA-Z0-9]{36}|ghs_[a-zA-Z0-9]{36}",
            keywords: &["ghu_", "ghs_"],
            dashboard_url: "https://github.com/settings/apps",
            tags: &["env-var", "github", "vcs"],
        },
    ],
);
