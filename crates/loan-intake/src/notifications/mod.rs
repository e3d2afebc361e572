//! Chat notification plumbing: mutable credentials, the sink seam, and timed dispatch.

pub mod dispatcher;
pub mod router;
pub mod settings;
pub mod sink;
pub mod telegram;

pub use dispatcher::{DeliveryOutcome, NotificationDispatcher};
pub use router::settings_router;
pub use settings::{NotificationSettings, NotificationSettingsStore};
pub use sink::{NotificationError, NotificationSink};
pub use telegram::TelegramSink;
