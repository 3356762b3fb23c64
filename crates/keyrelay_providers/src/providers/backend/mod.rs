//! Backend-as-a-service providers.

mod convex;
mod firebase;

pub use convex::ConvexProvider;
pub use firebase::FirebaseProvider;
