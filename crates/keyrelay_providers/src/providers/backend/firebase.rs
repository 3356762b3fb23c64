//! Firebase key patterns.

crate::declare_provider!(
    FirebaseProvider,
    id: "backend/firebase",
    name: "Firebase",
    group: Group::Backend,
    patterns: [
        crate::pattern! {
            id: "firebase",
            group: Group::Backend,
            name: "Firebase API Key",
            regex: r"AIza[a-zA-Z0-9_-]{35}",
            keywords: &["AIza"],
            dashboard_url: "https://console.firebase.google.com/",
            tags: &["env-var", "firebase", "backend"],
        },
    ],
);
