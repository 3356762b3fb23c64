//! Docker Hub token patterns.

crate::declare_provider!(
    DockerProvider,
    id: "devtools/docker",
    name: "Docker Hub",
    group: Group::Devtools,
    patterns: [
        crate::pattern! {
            id: "docker",
            group: Group::Devtools,
            name: "Docker Hub Token",
            regex: r"dckr_pat_[a-zA-Z0-9_-]{52}",
            keywords: &["dckr_pat_"],
            dashboard_url: "https://hub.docker.com/settings/security",
            tags: &["env-var", "docker", "registry"],
        },
    ],
);
