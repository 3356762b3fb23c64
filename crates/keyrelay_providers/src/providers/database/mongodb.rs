//! MongoDB connection string patterns.

crate::declare_provider!(
    MongoDbProvider,
    id: "database/mongodb",
    name: "MongoDB",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "mongodb",
            group: Group::Database,
            name: "MongoDB Connection String",
            regex: r"mongodb\+srv://[a-zA-Z0-9_-]+:[a-zA-Z0-9_-]+@[a-zA-Z0-9_.-]+",
            keywords: &["mongodb+srv://"],
            dashboard_url: "https://cloud.mongodb.com/",
            tags: &["env-var", "mongodb", "database"],
        },
    ],
);
