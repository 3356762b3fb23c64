//! Provider trait for pattern definitions.

use crate::pattern::PatternDef;

/// A provider of API key detection patterns.
///
/// Each provider contributes one or more `PatternDef` entries for a single
/// service, in the order they should be evaluated.
pub trait Provider: Send + Sync {
    /// Returns the unique identifier for this provider (e.g. `"vcs/github"`).
    fn id(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"GitHub"`).
    fn name(&self) -> &'static str;

    /// Returns the static slice of pattern definitions this provider contributes.
    fn patterns(&self) -> &'static [PatternDef];
}

/// Generates a `Provider` implementation for a unit struct.
///
/// Emits basic tests asserting the provider has patterns and they all
/// belong to the declared group.
#[macro_export]
macro_rules! declare_provider {
    (
        $struct_name:ident,
        id: $id:expr,
        name: $display_name:expr,
        group: $group:expr,
        patterns: [$($pattern:expr),+ $(,)?] $(,)?
    ) => {
        use $crate::pattern::{Group, PatternDef};
        use $crate::provider::Provider;

        static PATTERNS: &[PatternDef] = &[$($pattern),+];

        #[doc = concat!("API key detection provider for ", $display_name, ".")]
        pub struct $struct_name;

        impl Provider for $struct_name {
            fn id(&self) -> &'static str {
                $id
            }

            fn name(&self) -> &'static str {
                $display_name
            }

            fn patterns(&self) -> &'static [PatternDef] {
                PATTERNS
            }
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[test]
            fn provider_has_patterns() {
                assert!(!$struct_name.patterns().is_empty());
            }

            #[test]
            fn all_patterns_have_correct_group() {
                for pattern in $struct_name.patterns() {
                    assert_eq!(pattern.group, $group);
                }
            }
        }
    };
}
