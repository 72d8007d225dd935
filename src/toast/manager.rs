// ABOUTME: Toast queue with subscribers and timed auto-removal
// Owns the active toast list, notifies subscribers with snapshots on every change

use super::notification::{Toast, ToastId, ToastKind, DEFAULT_DURATION};
use super::scheduler::{Scheduler, TaskHandle, TokioScheduler, Unscheduled};
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};
use std::time::Duration;
use tracing::{debug, trace};

/// Callback invoked with a snapshot of the active toasts, oldest first.
pub type Listener = Arc<dyn Fn(Vec<Toast>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubscriberId(u64);

struct Entry {
    toast: Toast,
    expiry: Box<dyn TaskHandle>,
}

#[derive(Default)]
struct State {
    next_toast: u64,
    next_subscriber: u64,
    active: Vec<Entry>,
    subscribers: Vec<(SubscriberId, Listener)>,
}

impl State {
    fn snapshot(&self) -> Vec<Toast> {
        self.active.iter().map(|entry| entry.toast.clone()).collect()
    }

    fn listeners(&self) -> Vec<Listener> {
        self.subscribers.iter().map(|(_, listener)| listener.clone()).collect()
    }
}

struct Delivery {
    snapshot: Vec<Toast>,
    listeners: Vec<Listener>,
}

#[derive(Default)]
struct Outbox {
    pending: VecDeque<Delivery>,
    /// Thread currently delivering, if any.
    drainer: Option<ThreadId>,
}

struct Inner {
    state: Mutex<State>,
    outbox: Mutex<Outbox>,
    /// Signalled whenever a drainer finishes.
    idle: Condvar,
    scheduler: Arc<dyn Scheduler>,
    default_duration: Duration,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases drain ownership even if a listener panics.
struct DrainGuard<'a>(&'a Inner);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        lock(&self.0.outbox).drainer = None;
        self.0.idle.notify_all();
    }
}

impl Inner {
    /// Queues a notification for every current subscriber.
    ///
    /// Must be called while `state` is still locked so that deliveries are
    /// queued in the same order as the changes that produced them.
    fn enqueue(&self, state: &State) {
        if state.subscribers.is_empty() {
            return;
        }
        lock(&self.outbox).pending.push_back(Delivery {
            snapshot: state.snapshot(),
            listeners: state.listeners(),
        });
    }

    /// Delivers queued notifications with no lock held.
    ///
    /// Only one thread drains at a time. A listener that calls back into the
    /// manager queues its change and returns; the draining thread delivers it
    /// after the current delivery finishes. Any other thread waits until the
    /// active drainer is done, so its own change has been delivered by the
    /// time it returns.
    fn drain(&self) {
        let me = thread::current().id();
        {
            let mut outbox = lock(&self.outbox);
            loop {
                let owner = outbox.drainer;
                match owner {
                    None => break,
                    Some(owner) if owner == me => return,
                    Some(_) => {
                        outbox = self.idle.wait(outbox).unwrap_or_else(PoisonError::into_inner);
                    }
                }
            }
            if outbox.pending.is_empty() {
                return;
            }
            outbox.drainer = Some(me);
        }
        let _guard = DrainGuard(self);

        loop {
            let next = lock(&self.outbox).pending.pop_front();
            let Some(delivery) = next else { break };
            for listener in &delivery.listeners {
                listener(delivery.snapshot.clone());
            }
        }
    }

    /// Stores the expiry handle for `id`, or cancels it if the toast is
    /// already gone.
    fn attach_expiry(&self, id: ToastId, expiry: Box<dyn TaskHandle>) {
        let orphan = {
            let mut state = lock(&self.state);
            match state.active.iter_mut().find(|entry| entry.toast.id() == id) {
                Some(entry) => {
                    entry.expiry = expiry;
                    None
                }
                None => Some(expiry),
            }
        };
        if let Some(expiry) = orphan {
            expiry.cancel();
        }
    }

    fn remove(&self, id: ToastId, cancel: bool) -> bool {
        let removed = {
            let mut state = lock(&self.state);
            let Some(pos) = state.active.iter().position(|entry| entry.toast.id() == id) else {
                return false;
            };
            let entry = state.active.remove(pos);
            self.enqueue(&state);
            entry
        };

        if cancel {
            removed.expiry.cancel();
        }
        self.drain();
        true
    }
}

/// Handle returned by [`ToastManager::subscribe`].
///
/// Dropping it leaves the listener registered; call
/// [`Subscription::unsubscribe`] to stop receiving snapshots.
pub struct Subscription {
    id: SubscriberId,
    inner: Weak<Inner>,
}

impl Subscription {
    /// Removes the listener. Snapshots already being delivered may still arrive.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner.state).subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id.0).finish()
    }
}

/// Process-wide toast queue.
///
/// Cloning yields another handle to the same queue. Create one at startup and
/// pass it to whatever needs to raise or render toasts.
#[derive(Clone)]
pub struct ToastManager {
    inner: Arc<Inner>,
}

impl ToastManager {
    /// Creates a manager that auto-removes toasts on the tokio runtime after
    /// [`DEFAULT_DURATION`] unless told otherwise.
    pub fn new() -> Self {
        Self::with_scheduler(Arc::new(TokioScheduler::new()), DEFAULT_DURATION)
    }

    /// Creates a manager with a custom scheduler and default lifetime.
    ///
    /// A zero `default_duration` falls back to [`DEFAULT_DURATION`].
    pub fn with_scheduler(scheduler: Arc<dyn Scheduler>, default_duration: Duration) -> Self {
        let default_duration = if default_duration.is_zero() {
            DEFAULT_DURATION
        } else {
            default_duration
        };
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::default()),
                outbox: Mutex::new(Outbox::default()),
                idle: Condvar::new(),
                scheduler,
                default_duration,
            }),
        }
    }

    pub fn default_duration(&self) -> Duration {
        self.inner.default_duration
    }

    /// Registers `listener` to receive a snapshot after every change.
    ///
    /// All listeners are called once per change, before the call that made the
    /// change returns. The current state is not replayed on subscribe.
    ///
    /// A listener may call back into the manager, but must not wait on another
    /// thread that is itself changing the queue.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Vec<Toast>) + Send + Sync + 'static,
    {
        let mut state = lock(&self.inner.state);
        let id = SubscriberId(state.next_subscriber);
        state.next_subscriber += 1;
        state.subscribers.push((id, Arc::new(listener)));
        debug!("Toast subscriber {} registered", id.0);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn success(&self, message: impl Into<String>, duration: impl Into<Option<Duration>>) -> ToastId {
        self.push(ToastKind::Success, message, duration)
    }

    pub fn error(&self, message: impl Into<String>, duration: impl Into<Option<Duration>>) -> ToastId {
        self.push(ToastKind::Error, message, duration)
    }

    pub fn warning(&self, message: impl Into<String>, duration: impl Into<Option<Duration>>) -> ToastId {
        self.push(ToastKind::Warning, message, duration)
    }

    pub fn info(&self, message: impl Into<String>, duration: impl Into<Option<Duration>>) -> ToastId {
        self.push(ToastKind::Info, message, duration)
    }

    /// Appends a toast, notifies subscribers and schedules its removal.
    ///
    /// `None` or a zero duration uses the manager's default lifetime.
    pub fn push(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: impl Into<Option<Duration>>,
    ) -> ToastId {
        let duration = duration
            .into()
            .filter(|d| !d.is_zero())
            .unwrap_or(self.inner.default_duration);

        let id = {
            let mut state = lock(&self.inner.state);
            let id = ToastId::from_raw(state.next_toast);
            state.next_toast += 1;

            state.active.push(Entry {
                toast: Toast::new(id, kind, message.into(), duration),
                expiry: Box::new(Unscheduled),
            });
            self.inner.enqueue(&state);
            id
        };

        let weak = Arc::downgrade(&self.inner);
        let expiry = self.inner.scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if inner.remove(id, false) {
                        trace!("Toast {} expired", id);
                    }
                }
            }),
        );
        self.inner.attach_expiry(id, expiry);

        debug!("Toast {} ({}) added for {:?}", id, kind, duration);
        self.inner.drain();
        id
    }

    /// Removes a toast and cancels its pending auto-removal.
    ///
    /// Returns `false`, without notifying anyone, if the toast is not active.
    pub fn remove_toast(&self, id: ToastId) -> bool {
        let removed = self.inner.remove(id, true);
        if removed {
            debug!("Toast {} dismissed", id);
        }
        removed
    }

    /// Removes every toast and notifies subscribers once.
    pub fn clear(&self) {
        let cleared = {
            let mut state = lock(&self.inner.state);
            let cleared = std::mem::take(&mut state.active);
            self.inner.enqueue(&state);
            cleared
        };

        for entry in &cleared {
            entry.expiry.cancel();
        }
        debug!("Cleared {} toasts", cleared.len());
        self.inner.drain();
    }

    /// Copy of the active toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        lock(&self.inner.state).snapshot()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        lock(&self.inner.state)
            .active
            .iter()
            .find(|entry| entry.toast.id() == id)
            .map(|entry| entry.toast.clone())
    }

    pub fn len(&self) -> usize {
        lock(&self.inner.state).active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.state).subscribers.len()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.inner.state);
        f.debug_struct("ToastManager")
            .field("active", &state.active.len())
            .field("subscribers", &state.subscribers.len())
            .field("default_duration", &self.inner.default_duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::scheduler::{MockScheduler, MockTaskHandle, Task, Unscheduled};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex as StdMutex;

    /// Scheduler that keeps tasks so tests can fire them by hand.
    #[derive(Default)]
    struct ManualScheduler {
        tasks: StdMutex<Vec<(Duration, Option<Task>)>>,
    }

    impl ManualScheduler {
        fn fire(&self, index: usize) {
            let task = self.tasks.lock().unwrap()[index].1.take();
            if let Some(task) = task {
                task();
            }
        }

        fn delays(&self) -> Vec<Duration> {
            self.tasks.lock().unwrap().iter().map(|(d, _)| *d).collect()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> Box<dyn TaskHandle> {
            self.tasks.lock().unwrap().push((delay, Some(task)));
            Box::new(Unscheduled)
        }
    }

    /// Scheduler that runs every task before `schedule` returns.
    struct InlineScheduler;

    impl Scheduler for InlineScheduler {
        fn schedule(&self, _delay: Duration, task: Task) -> Box<dyn TaskHandle> {
            task();
            Box::new(Unscheduled)
        }
    }

    fn recorder(manager: &ToastManager) -> (Subscription, Arc<StdMutex<Vec<Vec<Toast>>>>) {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();
        let sub = manager.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot));
        (sub, seen)
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let scheduler = Arc::new(ManualScheduler::default());
        let manager = ToastManager::with_scheduler(scheduler, DEFAULT_DURATION);

        let a = manager.info("a", None);
        let b = manager.info("b", None);
        manager.remove_toast(a);
        let c = manager.info("c", None);

        assert!(a < b && b < c);
    }

    #[test]
    fn default_and_custom_durations_are_scheduled() {
        let scheduler = Arc::new(ManualScheduler::default());
        let manager = ToastManager::with_scheduler(scheduler.clone(), Duration::from_millis(750));

        manager.success("default", None);
        manager.warning("custom", Duration::from_secs(2));
        manager.error("zero", Duration::ZERO);

        assert_eq!(
            scheduler.delays(),
            vec![
                Duration::from_millis(750),
                Duration::from_secs(2),
                Duration::from_millis(750),
            ]
        );
    }

    #[test]
    fn zero_default_duration_falls_back() {
        let manager = ToastManager::with_scheduler(Arc::new(ManualScheduler::default()), Duration::ZERO);
        assert_eq!(manager.default_duration(), DEFAULT_DURATION);
    }

    #[test]
    fn expiry_after_manual_removal_is_a_no_op() {
        let scheduler = Arc::new(ManualScheduler::default());
        let manager = ToastManager::with_scheduler(scheduler.clone(), DEFAULT_DURATION);
        let (_sub, seen) = recorder(&manager);

        let id = manager.error("X", None);
        assert!(manager.remove_toast(id));
        scheduler.fire(0);

        assert!(manager.is_empty());
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn expiry_removes_only_its_toast() {
        let scheduler = Arc::new(ManualScheduler::default());
        let manager = ToastManager::with_scheduler(scheduler.clone(), DEFAULT_DURATION);

        manager.info("first", None);
        let second = manager.info("second", None);
        manager.info("third", None);

        scheduler.fire(0);

        let messages: Vec<String> = manager.snapshot().iter().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["second".to_string(), "third".to_string()]);
        assert!(manager.get(second).is_some());
    }

    #[test]
    fn manual_removal_cancels_pending_expiry() {
        let mut scheduler = MockScheduler::new();
        scheduler.expect_schedule().times(1).returning(|_, _| {
            let mut handle = MockTaskHandle::new();
            handle.expect_cancel().times(1).return_const(());
            Box::new(handle)
        });
        let manager = ToastManager::with_scheduler(Arc::new(scheduler), DEFAULT_DURATION);

        let id = manager.success("saved", None);
        assert!(manager.remove_toast(id));
        assert!(!manager.remove_toast(id));
    }

    #[test]
    fn clear_cancels_every_pending_expiry() {
        let mut scheduler = MockScheduler::new();
        scheduler.expect_schedule().times(3).returning(|_, _| {
            let mut handle = MockTaskHandle::new();
            handle.expect_cancel().times(1).return_const(());
            Box::new(handle)
        });
        let manager = ToastManager::with_scheduler(Arc::new(scheduler), DEFAULT_DURATION);

        manager.info("a", None);
        manager.info("b", None);
        manager.info("c", None);
        manager.clear();

        assert!(manager.is_empty());
    }

    #[test]
    fn listener_may_call_back_into_manager() {
        let scheduler = Arc::new(ManualScheduler::default());
        let manager = ToastManager::with_scheduler(scheduler, DEFAULT_DURATION);
        let (_sub, seen) = recorder(&manager);

        let reentrant = manager.clone();
        let _dismisser = manager.subscribe(move |snapshot| {
            if let Some(toast) = snapshot.iter().find(|t| t.kind() == ToastKind::Error) {
                reentrant.remove_toast(toast.id());
            }
        });

        manager.error("boom", None);

        assert!(manager.is_empty());
        let lens: Vec<usize> = seen.lock().unwrap().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![1, 0]);
    }

    #[test]
    fn scheduler_running_task_inline_removes_toast() {
        let manager = ToastManager::with_scheduler(Arc::new(InlineScheduler), DEFAULT_DURATION);
        let (_sub, seen) = recorder(&manager);

        manager.warning("gone at once", None);

        assert!(manager.is_empty());
        let lens: Vec<usize> = seen.lock().unwrap().iter().map(Vec::len).collect();
        assert_eq!(lens, vec![1, 0]);
    }

    #[test]
    fn expiry_handle_is_cancelled_when_toast_is_already_gone() {
        let mut scheduler = MockScheduler::new();
        scheduler.expect_schedule().times(1).returning(|_, task| {
            task();
            let mut handle = MockTaskHandle::new();
            handle.expect_cancel().times(1).return_const(());
            Box::new(handle)
        });
        let manager = ToastManager::with_scheduler(Arc::new(scheduler), DEFAULT_DURATION);

        manager.info("short lived", None);

        assert!(manager.is_empty());
    }

    #[test]
    fn subscription_outliving_manager_unsubscribes_quietly() {
        let manager = ToastManager::with_scheduler(Arc::new(ManualScheduler::default()), DEFAULT_DURATION);
        let sub = manager.subscribe(|_| {});
        drop(manager);
        sub.unsubscribe();
    }
}
