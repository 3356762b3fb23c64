//! Auth0 credential patterns.

crate::declare_provider!(
    Auth0Provider,
    id: "auth/auth0",
    name: "Auth0",
    group: Group::Auth,
    patterns: [
        crate::pattern! {
            id: "auth0",
            group: Group::Auth,
            name: "Auth0 Client Secret",
            regex: r"[a-zA-Z0-9_-]{32,}",
            keywords: &[],
            context: r"(?i)auth0",
            dashboard_url: "https://manage.auth0.com/",
            tags: &["env-var", "auth0", "auth"],
        },
    ],
);
