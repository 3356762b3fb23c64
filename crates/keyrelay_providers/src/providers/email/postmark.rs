//! Postmark token patterns.

crate::declare_provider!(
    PostmarkProvider,
    id: "email/postmark",
    name: "Postmark",
    group: Group::Email,
    patterns: [
        crate::pattern! {
            id: "postmark",
            group: Group::Email,
            name: "Postmark Server Token",
            regex: r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
            keywords: &[],
            context: r"(?i)postmark",
            dashboard_url: "https://account.postmarkapp.com/servers",
            tags: &["env-var", "postmark", "email"],
        },
    ],
);
