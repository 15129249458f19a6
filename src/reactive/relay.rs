//! Single-writer broadcast cell holding the latest value of a stream.
//!
//! A [`Relay`] remembers the last [`Signal`] it carried and replays it to every
//! new observer, then forwards each subsequent publish. A relay can be failed
//! once; the failure is terminal and is replayed to late subscribers.
//!
//! Observers are called after the relay's state lock is released, so an
//! observer may read the relay it observes or drop its own subscription.
//! Delivery is serialized by a separate lock: every observer sees signals in
//! publish order, and the replay on subscribe never interleaves with a publish.

use super::subscription::Subscription;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One emission of a relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T> {
    /// A new snapshot.
    Next(T),
    /// The stream terminated with an error; nothing follows.
    Failed(String),
}

/// Callback invoked for every signal.
///
/// Observers run on the publishing thread. They may call [`Relay::value`],
/// [`Relay::failure`] and [`Relay::observer_count`] on the relay they observe,
/// but must not publish to, fail or subscribe on it.
pub type Observer<T> = Box<dyn Fn(&Signal<T>) + Send>;

type SharedObserver<T> = Arc<Mutex<Observer<T>>>;

struct RelayState<T> {
    latest: Option<Signal<T>>,
    observers: Vec<(u64, SharedObserver<T>)>,
    next_id: u64,
}

impl<T> RelayState<T> {
    fn is_failed(&self) -> bool {
        matches!(self.latest, Some(Signal::Failed(_)))
    }

    fn snapshot(&self) -> Vec<SharedObserver<T>> {
        self.observers.iter().map(|(_, observer)| Arc::clone(observer)).collect()
    }
}

struct RelayInner<T> {
    state: Mutex<RelayState<T>>,
    // Held for a whole delivery round, never while `state` is wanted by an observer.
    delivery: Mutex<()>,
}

/// Broadcast cell holding the latest value and notifying observers.
///
/// Cloning a relay clones the handle; all clones share the same value and
/// observers.
///
/// # Example
///
/// ```rust
/// use catalogs::reactive::{Relay, Signal};
///
/// let relay = Relay::with_value(1);
/// let (_subscription, rx) = relay.subscribe_channel();
/// relay.publish(2);
///
/// assert_eq!(rx.try_recv(), Ok(Signal::Next(1)));
/// assert_eq!(rx.try_recv(), Ok(Signal::Next(2)));
/// ```
pub struct Relay<T> {
    inner: Arc<RelayInner<T>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn notify<T>(observers: &[SharedObserver<T>], signal: &Signal<T>) {
    for observer in observers {
        let observer = lock(observer);
        (*observer)(signal);
    }
}

impl<T: Clone + Send + 'static> Relay<T> {
    /// Creates a relay with no value; observers receive nothing until the
    /// first publish.
    #[must_use]
    pub fn new() -> Self {
        Self::from_signal(None)
    }

    /// Creates a relay seeded with `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self::from_signal(Some(Signal::Next(value)))
    }

    fn from_signal(latest: Option<Signal<T>>) -> Self {
        Self {
            inner: Arc::new(RelayInner {
                state: Mutex::new(RelayState {
                    latest,
                    observers: Vec::new(),
                    next_id: 0,
                }),
                delivery: Mutex::new(()),
            }),
        }
    }

    /// Stores `value` and forwards it to every observer.
    ///
    /// Ignored once the relay has failed.
    pub fn publish(&self, value: T) {
        let _delivery = lock(&self.inner.delivery);
        let signal = Signal::Next(value);
        let observers = {
            let mut state = lock(&self.inner.state);
            if state.is_failed() {
                tracing::trace!("publish ignored on failed relay");
                return;
            }
            state.latest = Some(signal.clone());
            state.snapshot()
        };
        notify(&observers, &signal);
    }

    /// Terminates the relay with an error.
    ///
    /// Observers receive [`Signal::Failed`] and are released. Only the first
    /// failure is kept.
    pub fn fail(&self, message: impl Into<String>) {
        let _delivery = lock(&self.inner.delivery);
        let signal = Signal::Failed(message.into());
        let observers = {
            let mut state = lock(&self.inner.state);
            if state.is_failed() {
                return;
            }
            state.latest = Some(signal.clone());
            std::mem::take(&mut state.observers)
        };
        let observers: Vec<_> = observers.into_iter().map(|(_, observer)| observer).collect();
        notify(&observers, &signal);
    }

    /// Returns a clone of the latest value, if any.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        match &lock(&self.inner.state).latest {
            Some(Signal::Next(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Returns the failure message if the relay has terminated.
    #[must_use]
    pub fn failure(&self) -> Option<String> {
        match &lock(&self.inner.state).latest {
            Some(Signal::Failed(message)) => Some(message.clone()),
            _ => None,
        }
    }

    /// Registers an observer and replays the latest signal to it.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped. Subscribing to a failed relay replays the failure and returns
    /// an inert subscription.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Signal<T>) + Send + 'static,
    {
        let boxed: Observer<T> = Box::new(observer);
        let observer = Arc::new(Mutex::new(boxed));

        let _delivery = lock(&self.inner.delivery);
        let (latest, id) = {
            let mut state = lock(&self.inner.state);
            let latest = state.latest.clone();
            if state.is_failed() {
                (latest, None)
            } else {
                let id = state.next_id;
                state.next_id += 1;
                state.observers.push((id, Arc::clone(&observer)));
                (latest, Some(id))
            }
        };

        if let Some(latest) = &latest {
            notify(std::slice::from_ref(&observer), latest);
        }

        let Some(id) = id else {
            return Subscription::empty();
        };
        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner.state).observers.retain(|(observer_id, _)| *observer_id != id);
            }
        })
    }

    /// Subscribes with a channel-backed observer.
    ///
    /// Signals are delivered to the returned receiver in publish order; the
    /// receiver disconnects once the subscription is dropped or the relay fails.
    pub fn subscribe_channel(&self) -> (Subscription, Receiver<Signal<T>>) {
        let (tx, rx) = mpsc::channel();
        let subscription = self.subscribe(move |signal| {
            let _ = tx.send(signal.clone());
        });
        (subscription, rx)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        lock(&self.inner.state).observers.len()
    }
}

impl<T: Clone + Send + 'static> Default for Relay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Relay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TryRecvError;
    use std::time::Duration;

    #[test]
    fn empty_relay_replays_nothing() {
        let relay: Relay<u32> = Relay::new();
        let (_sub, rx) = relay.subscribe_channel();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        relay.publish(3);
        assert_eq!(rx.try_recv(), Ok(Signal::Next(3)));
        assert_eq!(relay.value(), Some(3));
    }

    #[test]
    fn late_subscriber_sees_only_latest() {
        let relay = Relay::with_value("a".to_string());
        relay.publish("b".to_string());

        let (_sub, rx) = relay.subscribe_channel();
        assert_eq!(rx.try_recv(), Ok(Signal::Next("b".to_string())));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let relay = Relay::with_value(0);
        let (sub, rx) = relay.subscribe_channel();
        assert_eq!(relay.observer_count(), 1);

        drop(sub);
        assert_eq!(relay.observer_count(), 0);
        relay.publish(1);

        assert_eq!(rx.try_recv(), Ok(Signal::Next(0)));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn failure_is_terminal_and_replayed() {
        let relay = Relay::with_value(1);
        let (_sub, rx) = relay.subscribe_channel();
        relay.fail("boom");
        relay.publish(2);
        relay.fail("second");

        assert_eq!(rx.try_recv(), Ok(Signal::Next(1)));
        assert_eq!(rx.try_recv(), Ok(Signal::Failed("boom".to_string())));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
        assert_eq!(relay.value(), None);
        assert_eq!(relay.failure().as_deref(), Some("boom"));

        let (_late, late_rx) = relay.subscribe_channel();
        assert_eq!(late_rx.try_recv(), Ok(Signal::Failed("boom".to_string())));
        assert_eq!(relay.observer_count(), 0);
    }

    #[test]
    fn observer_can_read_its_relay() {
        let relay = Relay::with_value(0);
        let reader = relay.clone();
        let (tx, rx) = mpsc::channel();
        let _sub = relay.subscribe(move |_signal: &Signal<i32>| {
            let _ = tx.send((reader.value(), reader.observer_count()));
        });

        let publisher = relay.clone();
        let handle = std::thread::spawn(move || publisher.publish(1));

        let timeout = Duration::from_secs(2);
        assert_eq!(rx.recv_timeout(timeout), Ok((Some(0), 1)));
        assert_eq!(rx.recv_timeout(timeout), Ok((Some(1), 1)));
        handle.join().unwrap();
    }

    #[test]
    fn observer_can_read_failure_and_unsubscribe_itself() {
        let relay: Relay<i32> = Relay::new();
        let reader = relay.clone();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::default();
        let own = Arc::clone(&slot);
        let (tx, rx) = mpsc::channel();
        let sub = relay.subscribe(move |signal: &Signal<i32>| {
            let _ = tx.send((signal.clone(), reader.failure()));
            if let Some(sub) = lock(&own).take() {
                sub.unsubscribe();
            }
        });
        *lock(&slot) = Some(sub);

        relay.publish(7);
        assert_eq!(rx.try_recv(), Ok((Signal::Next(7), None)));
        assert_eq!(relay.observer_count(), 0);

        relay.fail("gone");
        assert_eq!(relay.failure().as_deref(), Some("gone"));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn clones_share_state() {
        let relay = Relay::with_value(1);
        let other = relay.clone();
        other.publish(5);
        assert_eq!(relay.value(), Some(5));
    }
}
