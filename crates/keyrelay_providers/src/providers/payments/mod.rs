//! Payment processor providers.

mod lemonsqueezy;
mod paypal;
mod square;
mod stripe;

pub use lemonsqueezy::LemonSqueezyProvider;
pub use paypal::PayPalProvider;
pub use square::SquareProvider;
pub use stripe::StripeProvider;
