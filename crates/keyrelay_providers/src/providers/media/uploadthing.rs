//! UploadThing secret patterns.

crate::declare_provider!(
    UploadThingProvider,
    id: "media/uploadthing",
    name: "UploadThing",
    group: Group::Media,
    patterns: [
        crate::pattern! {
            id: "uploadthing",
            group: Group::Media,
            name: "UploadThing Secret",
            regex: r"sk_live_[a-zA-Z0-9]{32,}",
            keywords: &["sk_live_"],
            dashboard_url: "https://uploadthing.com/dashboard",
            tags: &["env-var", "uploadthing", "media"],
        },
    ],
);
