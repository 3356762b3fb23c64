//! Cloudinary URL patterns.

crate::declare_provider!(
    CloudinaryProvider,
    id: "media/cloudinary",
    name: "Cloudinary",
    group: Group::Media,
    patterns: [
        crate::pattern! {
            id: "cloudinary",
            group: Group::Media,
            name: "Cloudinary URL",
            regex: r"cloudinary://[0-9]+:[a-zA-Z0-9_-]+@[a-zA-Z0-9_-]+",
            keywords: &["cloudinary://"],
            dashboard_url: "https://console.cloudinary.com/settings/api-keys",
            tags: &["env-var", "cloudinary", "media"],
        },
    ],
);
