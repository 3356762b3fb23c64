//! Email delivery service providers.

mod mailchimp;
mod mailgun;
mod postmark;
mod resend;
mod sendgrid;

pub use mailchimp::MailchimpProvider;
pub use mailgun::MailgunProvider;
pub use postmark::PostmarkProvider;
pub use resend::ResendProvider;
pub use sendgrid::SendGridProvider;
