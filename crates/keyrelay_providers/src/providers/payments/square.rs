//! Square token patterns.

crate::declare_provider!(
    SquareProvider,
    id: "payments/square",
    name: "Square",
    group: Group::Payments,
    patterns: [
        crate::pattern! {
            id: "square",
            group: Group::Payments,
            name: "Square Access Token",
            regex: r"sq0atp-[a-zA-Z0-9_-]{22}|EAAAE[a-zA-Z0-9_-]{56}",
            keywords: &["sq0atp-", "EAAAE"],
            dashboard_url: "https://developer.squareup.com/apps",
            tags: &["env-var", "square", "payments"],
        },
    ],
);
