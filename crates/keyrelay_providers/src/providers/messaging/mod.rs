//! Messaging and communication platform providers.

mod discord;
mod slack;
mod telegram;
mod twilio;

pub use discord::DiscordProvider;
pub use slack::SlackProvider;
pub use telegram::TelegramProvider;
pub use twilio::TwilioProvider;
