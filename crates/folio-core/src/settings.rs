//! Shared UI settings
//!
//! No ambient global mutation: settings live behind a watch channel.
//! Components hold a [`SharedSettings`] handle, writers go through
//! [`update`], and observers subscribe to see every change.
//!
//! [`update`]: SharedSettings::update

use tokio::sync::watch;

/// User-tunable settings shared across views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Active theme name, resolved by the frontend's theme registry
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "midnight".to_string(),
        }
    }
}

/// Handle to the settings channel. Cloning shares the same underlying
/// state; there is no other copy to drift from.
#[derive(Debug, Clone)]
pub struct SharedSettings {
    tx: watch::Sender<Settings>,
}

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        let (tx, _rx) = watch::channel(settings);
        Self { tx }
    }

    /// Snapshot of the current settings
    pub fn get(&self) -> Settings {
        self.tx.borrow().clone()
    }

    /// Observe every subsequent settings change
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }

    /// Apply a mutation and notify all observers
    pub fn update(&self, f: impl FnOnce(&mut Settings)) {
        self.tx.send_modify(f);
    }
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_notifies_observers() {
        let settings = SharedSettings::default();
        let mut rx = settings.subscribe();

        settings.update(|s| s.theme = "paper".to_string());

        assert!(rx.changed().await.is_ok());
        assert_eq!(rx.borrow().theme, "paper");
        assert_eq!(settings.get().theme, "paper");
    }

    #[test]
    fn test_clones_share_state() {
        let settings = SharedSettings::default();
        let other = settings.clone();
        other.update(|s| s.theme = "forest".to_string());
        assert_eq!(settings.get().theme, "forest");
    }
}
