// ABOUTME: Toast notification queue - transient messages that remove themselves after a delay
// Raised by API actions, rendered by the toast overlay through a snapshot subscription

pub mod manager;
pub mod notification;
pub mod scheduler;

pub use manager::{Listener, Subscription, ToastManager};
pub use notification::{Toast, ToastId, ToastKind, DEFAULT_DURATION};
pub use scheduler::{Scheduler, Task, TaskHandle, TokioScheduler};
