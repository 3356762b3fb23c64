//! Supabase key patterns.

crate::declare_provider!(
    SupabaseProvider,
    id: "database/supabase",
    name: "Supabase",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "supabase-publishable",
            group: Group::Database,
            name: "Supabase Publishable Key",
            regex: r"sb_publishable_[a-zA-Z0-9_-]{20,}",
            keywords: &["sb_publishable_"],
            dashboard_url: "https://supabase.com/dashboard/project/_/settings/api",
            tags: &["env-var", "supabase", "database"],
        },
        crate::pattern! {
            id: "supabase-secret",
            group: Group::Database,
            name: "Supabase Secret Key",
            regex: r"sb_secret_[a-zA-Z0-9_-]{20,}",
            keywords: &["sb_secret_"],
            dashboard_url: "https://supabase.com/dashboard/project/_/settings/api",
            tags: &["env-var", "supabase", "database"],
        },
        // Any JWT matches this shape, so it is gated on Supabase pages.
        crate::pattern! {
            id: "supabase-anon",
            group: Group::Database,
            name: "Supabase Anon Key (JWT)",
            regex: r"eyJ[a-zA-Z0-9_-]+\.eyJ[a-zA-Z0-9_-]+\.[a-zA-Z0-9_-]+",
            keywords: &["eyJ"],
            context: r"(?i)supabase",
            dashboard_url: "https://supabase.com/dashboard/project/_/settings/api",
            tags: &["env-var", "supabase", "database"],
        },
    ],
);
