//! Stripe key patterns.

crate::declare_provider!(
    StripeProvider,
    id: "payments/stripe",
    name: "Stripe",
    group: Group::Payments,
    patterns: [
        crate::pattern! {
            id: "stripe-publishable-live",
            group: Group::Payments,
            name: "Stripe Live Publishable Key",
            regex: r"pk_live_[a-zA-Z0-9]{24,}",
            keywords: &["pk_live_"],
            dashboard_url: "https://dashboard.stripe.com/apikeys",
            tags: &["env-var", "stripe", "payments"],
        },
        crate::pattern! {
            id: "stripe-publishable-test",
            group: Group::Payments,
            name: "Stripe Test Publishable Key",
            regex: r"pk_test_[a-zA-Z0-9]{24,}",
            keywords: &["pk_test_"],
            dashboard_url: "https://dashboard.stripe.com/test/apikeys",
            tags: &["env-var", "stripe", "payments"],
        },
        crate::pattern! {
            id: "stripe-live",
            group: Group::Payments,
            name: "Stripe Live Secret Key",
            regex: r"sk_live_[a-zA-Z0-9]{24,}",
            keywords: &["sk_live_"],
            dashboard_url: "https://dashboard.stripe.com/apikeys",
            tags: &["env-var", "stripe", "payments"],
        },
        crate::pattern! {
            id: "stripe-test",
            group: Group::Payments,
            name: "Stripe Test Secret Key",
            regex: r"sk_test_[a-zA-Z0-9]{24,}",
            keywords: &["sk_test_"],
            dashboard_url: "https://dashboard.stripe.com/test/apikeys",
            tags: &["env-var", "stripe", "payments"],
        },
        crate::pattern! {
            id: "stripe-webhook",
            group: Group::Payments,
            name: "Stripe Webhook Secret",
            regex: r"whsec_[a-zA-Z0-9]{32,}",
            keywords: &["whsec_"],
            dashboard_url: "https://dashboard.stripe.com/webhooks",
            tags: &["env-var", "stripe", "payments"],
        },
    ],
);
