//! Looping typing animation
//!
//! A tagged-variant state machine cycles each phrase through
//! Typing -> Holding -> Deleting, then advances to the next phrase and
//! starts over, forever. The machine itself is pure: [`TypingMachine::delay`]
//! says how long until the next transition and [`TypingMachine::step`]
//! applies it, so tests can drive the whole cycle without a clock.
//! [`TypingAnimation`] is the async driver that owns the single pending
//! timer and publishes the displayed text over a watch channel.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Timing configuration for the animation
#[derive(Debug, Clone)]
pub struct TypingConfig {
    /// Phrases cycled through, in order. Constant for the animation's
    /// lifetime.
    pub phrases: Vec<String>,
    /// Delay per appended character
    pub typing_speed: Duration,
    /// Delay per removed character
    pub deleting_speed: Duration,
    /// Hold time at the full phrase
    pub pause_duration: Duration,
}

impl TypingConfig {
    /// Config with the default timings (100ms type, 50ms delete, 2s hold)
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            typing_speed: Duration::from_millis(100),
            deleting_speed: Duration::from_millis(50),
            pause_duration: Duration::from_millis(2000),
        }
    }
}

/// Which leg of the cycle the machine is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypingPhase {
    /// Appending characters of the current phrase
    Typing,
    /// Full phrase held on screen
    Holding,
    /// Removing trailing characters
    Deleting,
}

/// The typing animation state machine.
///
/// The displayed text is always a whole-character prefix of the current
/// phrase. There is no terminal state; the cycle wraps over the phrase
/// list indefinitely.
#[derive(Debug, Clone)]
pub struct TypingMachine {
    config: TypingConfig,
    phrase_index: usize,
    displayed: String,
    phase: TypingPhase,
}

impl TypingMachine {
    pub fn new(config: TypingConfig) -> Self {
        let mut machine = Self {
            config,
            phrase_index: 0,
            displayed: String::new(),
            phase: TypingPhase::Typing,
        };
        machine.enter_typing();
        machine
    }

    /// Currently displayed prefix of the active phrase
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    fn target(&self) -> &str {
        self.config
            .phrases
            .get(self.phrase_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Begin typing the current phrase. An empty phrase completes with
    /// zero iterations and goes straight to the hold.
    fn enter_typing(&mut self) {
        self.phase = if self.target().is_empty() {
            TypingPhase::Holding
        } else {
            TypingPhase::Typing
        };
    }

    /// Time until the next transition fires
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => self.config.typing_speed,
            TypingPhase::Holding => self.config.pause_duration,
            TypingPhase::Deleting => self.config.deleting_speed,
        }
    }

    /// Apply the next transition: one appended character, one removed
    /// character, or the end of the hold. Each call performs exactly one
    /// transition and leaves the next one scheduled via [`delay`].
    ///
    /// [`delay`]: TypingMachine::delay
    pub fn step(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                // `displayed` is a prefix of the target, so the byte index
                // always lands on a char boundary
                if let Some(next) = self.target()[self.displayed.len()..].chars().next() {
                    self.displayed.push(next);
                }
                if self.displayed.len() >= self.target().len() {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Deleting;
            }
            TypingPhase::Deleting => {
                self.displayed.pop();
                if self.displayed.is_empty() {
                    let count = self.config.phrases.len().max(1);
                    self.phrase_index = (self.phrase_index + 1) % count;
                    self.enter_typing();
                }
            }
        }
    }
}

/// Handle to a running typing animation.
///
/// Owns the driver task. Exactly one timer is pending at any instant (the
/// sleep for the next transition); dropping the handle aborts the task,
/// which cancels that timer synchronously so nothing publishes after
/// teardown.
#[derive(Debug)]
pub struct TypingAnimation {
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl TypingAnimation {
    /// Spawn the driver task for `config`
    pub fn spawn(config: TypingConfig) -> Self {
        let mut machine = TypingMachine::new(config);
        let (tx, rx) = watch::channel(machine.displayed().to_string());
        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(machine.delay()).await;
                machine.step();
                if tx.send(machine.displayed().to_string()).is_err() {
                    // every receiver is gone
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Observe displayed-text updates
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }

    /// Latest displayed text
    pub fn text(&self) -> String {
        self.rx.borrow().clone()
    }
}

impl Drop for TypingAnimation {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("typing animation stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TypingConfig {
        TypingConfig {
            phrases: vec!["Hi".to_string(), "Bye".to_string()],
            typing_speed: Duration::from_millis(10),
            deleting_speed: Duration::from_millis(5),
            pause_duration: Duration::from_millis(20),
        }
    }

    /// Drive the pure machine and record (delay-before-step, text-after)
    fn trace(machine: &mut TypingMachine, steps: usize) -> Vec<(u64, String)> {
        (0..steps)
            .map(|_| {
                let delay = machine.delay().as_millis() as u64;
                machine.step();
                (delay, machine.displayed().to_string())
            })
            .collect()
    }

    #[test]
    fn test_full_cycle_is_deterministic() {
        let mut machine = TypingMachine::new(test_config());
        assert_eq!(machine.displayed(), "");
        let expected: Vec<(u64, String)> = [
            (10, "H"),
            (10, "Hi"),
            (20, "Hi"), // hold ends, deleting begins
            (5, "H"),
            (5, ""), // wrapped to the next phrase
            (10, "B"),
            (10, "By"),
            (10, "Bye"),
            (20, "Bye"),
            (5, "By"),
            (5, "B"),
            (5, ""), // wrapped back to phrase 0
            (10, "H"),
        ]
        .into_iter()
        .map(|(d, s)| (d, s.to_string()))
        .collect();
        assert_eq!(trace(&mut machine, expected.len()), expected);
    }

    #[test]
    fn test_two_machines_trace_identically() {
        let mut a = TypingMachine::new(test_config());
        let mut b = TypingMachine::new(test_config());
        assert_eq!(trace(&mut a, 40), trace(&mut b, 40));
    }

    #[test]
    fn test_unicode_phrases_extend_by_whole_characters() {
        let mut machine = TypingMachine::new(TypingConfig::new(vec!["héllo ✨".to_string()]));
        let mut seen = Vec::new();
        for _ in 0..7 {
            machine.step();
            seen.push(machine.displayed().to_string());
        }
        assert_eq!(seen, vec!["h", "hé", "hél", "héll", "héllo", "héllo ", "héllo ✨"]);
        // Deleting also removes whole characters
        machine.step(); // hold -> deleting
        machine.step();
        assert_eq!(machine.displayed(), "héllo ");
    }

    #[test]
    fn test_empty_phrase_skips_straight_to_hold() {
        let config = TypingConfig::new(vec![String::new(), "ab".to_string()]);
        let mut machine = TypingMachine::new(config.clone());
        // Zero typing iterations: the machine starts in the hold
        assert_eq!(machine.delay(), config.pause_duration);
        machine.step(); // hold -> deleting
        machine.step(); // nothing to delete, advance to "ab"
        assert_eq!(machine.displayed(), "");
        machine.step();
        assert_eq!(machine.displayed(), "a");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut machine = TypingMachine::new(TypingConfig::new(Vec::new()));
        for _ in 0..10 {
            machine.step();
            assert_eq!(machine.displayed(), "");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_publishes_the_cycle() {
        let animation = TypingAnimation::spawn(test_config());
        let mut rx = animation.subscribe();
        let mut seen = Vec::new();
        for _ in 0..8 {
            rx.changed().await.unwrap();
            seen.push(rx.borrow_and_update().clone());
        }
        assert_eq!(seen, vec!["H", "Hi", "Hi", "H", "", "B", "By", "Bye"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_pending_timer() {
        let animation = TypingAnimation::spawn(test_config());
        let mut rx = animation.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "H");

        drop(animation);

        // The driver task is aborted: the sender side is gone and no
        // further value is ever published
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), "H");
    }
}
