//! PayPal credential patterns.

crate::declare_provider!(
    PayPalProvider,
    id: "payments/paypal",
    name: "PayPal",
    group: Group::Payments,
    patterns: [
        crate::pattern! {
            id: "paypal",
            group: Group::Payments,
            name: "PayPal Client ID",
            regex: r"A[a-zA-Z0-9_-]{79}",
            keywords: &[],
            context: r"(?i)paypal",
            dashboard_url: "https://developer.paypal.com/dashboard/applications",
            tags: &["env-var", "paypal", "payments"],
        },
    ],
);
