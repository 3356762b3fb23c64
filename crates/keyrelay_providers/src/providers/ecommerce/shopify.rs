//! Shopify token patterns.

crate::declare_provider!(
    ShopifyProvider,
    id: "ecommerce/shopify",
    name: "Shopify",
    group: Group::Ecommerce,
    patterns: [
        crate::pattern! {
            id: "shopify-admin",
            group: Group::Ecommerce,
            name: "Shopify Admin API Token",
            regex: r"shpat_[a-f0-9]{32}",
            keywords: &["shpat_"],
            dashboard_url: "https://admin.shopify.com/store/",
            tags: &["env-var", "shopify", "ecommerce"],
        },
        crate::pattern! {
            id: "shopify-storefront",
            group: Group::Ecommerce,
            name: "Shopify Storefront Token",
            regex: r"shpss_[a-f0-9]{32}",
            keywords: &["shpss_"],
            dashboard_url: "https://admin.shopify.com/store/",
            tags: &["env-var", "shopify", "ecommerce"],
        },
    ],
);
