//! # sofia-notify
//!
//! Escalation of unanswered questions to a human.
//!
//! When an answer is unsatisfactory the user may leave a contact address.
//! [`EscalationManager`] checks the address with [`validate_email`] and
//! forwards the address plus the originating question through a
//! [`Notifier`]. Delivery is best effort: failures come back as values, are
//! never retried, and never affect the answer already shown.

mod email;
pub mod error;
mod escalation;
mod pushover;

pub use email::validate_email;
pub use error::{EscalationError, NotifyError};
pub use escalation::{EscalationManager, Notification};
pub use pushover::PushoverNotifier;

use std::future::Future;

/// An outward push-message channel.
pub trait Notifier: Send + Sync {
    /// Deliver one notification. `Ok(false)` means the channel answered but
    /// did not accept it.
    fn send(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<bool, NotifyError>> + Send;
}
