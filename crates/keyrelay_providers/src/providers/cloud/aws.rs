//! AWS credential patterns.

crate::declare_provider!(
    AwsProvider,
    id: "cloud/aws",
    name: "AWS",
    group: Group::Cloud,
    patterns: [
        crate::pattern! {
            id: "aws-access-key",
            group: Group::Cloud,
            name: "AWS Access Key ID",
            regex: r"AKIA[0-9A-Z]{16}",
            keywords: &["AKIA"],
            dashboard_url: "https://console.aws.amazon.com/iam/home#/security_credentials",
            tags: &["env-var", "aws", "cloud"],
        },
        crate::pattern! {
            id: "aws-secret-key",
            group: Group::Cloud,
            name: "AWS Secret Access Key",
            regex: r"[a-zA-Z0-9+/]{40}",
            keywords: &[],
            context: r"(?i)aws|amazon",
            dashboard_url: "https://console.aws.amazon.com/iam/home#/security_credentials",
            tags: &["env-var", "aws", "cloud"],
        },
    ],
);
