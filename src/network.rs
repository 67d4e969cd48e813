//! Network connectivity signal
//!
//! A broadcast boolean over a `tokio::sync::watch` channel. Producers
//! (platform reachability probes, test harnesses) flip the flag;
//! consumers poll [`NetworkMonitor::is_online`] or subscribe for change
//! notifications. The repository layer uses it to short-circuit to the
//! cache-fallback path without waiting for a socket timeout.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable handle to a shared connectivity flag
#[derive(Debug, Clone)]
pub struct NetworkMonitor {
    tx: Arc<watch::Sender<bool>>,
}

impl NetworkMonitor {
    /// Create a monitor with the given initial connectivity
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self { tx: Arc::new(tx) }
    }

    /// Current connectivity
    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Update connectivity, waking subscribers on change
    pub fn set_online(&self, online: bool) {
        self.tx.send_if_modified(|current| {
            let changed = *current != online;
            *current = online;
            changed
        });
    }

    /// Subscribe to connectivity changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for NetworkMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert!(NetworkMonitor::new(true).is_online());
        assert!(!NetworkMonitor::new(false).is_online());
        assert!(NetworkMonitor::default().is_online());
    }

    #[test]
    fn test_set_online_is_visible_to_clones() {
        let monitor = NetworkMonitor::new(true);
        let clone = monitor.clone();

        monitor.set_online(false);
        assert!(!clone.is_online());

        clone.set_online(true);
        assert!(monitor.is_online());
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let monitor = NetworkMonitor::new(true);
        let mut rx = monitor.subscribe();

        monitor.set_online(false);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
    }

    #[tokio::test]
    async fn test_redundant_updates_do_not_wake_subscribers() {
        let monitor = NetworkMonitor::new(true);
        let mut rx = monitor.subscribe();

        monitor.set_online(true);
        assert!(!rx.has_changed().unwrap());
    }
}
