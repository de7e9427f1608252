//! Key event debouncing.
//!
//! Raw scan samples are noisy: contacts chatter for a few milliseconds and a
//! held key shows up in every sample. [`Debouncer`] turns the sample stream
//! into discrete press events, and [`KeyEventDebouncer`] runs it against a
//! [`KeySource`] at a fixed cadence. The sleeps between samples are awaited,
//! so the executor idles the core while nothing is being scanned.
//!
//! State machine (one-shot policy):
//! ```text
//!   Idle       --Some(k)-->  Pressed(k)   emit k
//!   Idle       --None---->   Idle
//!   Pressed(k) --Some(_)-->  Pressed(k)
//!   Pressed(k) --None---->   Idle
//! ```
//! A key must be seen released before the next press is reported, so a key
//! held for any number of ticks produces exactly one event.
//!
//! Under the repeat policy every `Some(k)` sample reports `k` and becomes the
//! held key, so rolling from one key to another reports the new one.

use embedded_hal_async::delay::DelayNs;

use crate::config::{POLL_INTERVAL_MS, RELEASE_POLL_INTERVAL_MS, REPEAT_POLL_INTERVAL_MS};
use crate::error::Error;
use crate::handler::KeyHandler;
use crate::keymap::Key;
use crate::scanner::KeySource;

/// Whether the debouncer currently considers a key down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// No key held.
    Idle,
    /// This key was reported and no release has been seen since.
    Pressed(Key),
}

/// How held keys are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
    /// One event per press-and-release, fast release polling.
    OneShot,
    /// An event for whichever key is down on every tick, at a coarse fixed
    /// cadence.
    Repeat,
}

/// The debounce state machine, free of any timing or I/O.
#[derive(Clone, Debug)]
pub struct Debouncer {
    state: DebounceState,
    policy: DebouncePolicy,
}

impl Debouncer {
    pub const fn new(policy: DebouncePolicy) -> Self {
        Self {
            state: DebounceState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Feed one scan sample. Returns the key to report, if any.
    pub fn feed(&mut self, sample: Option<Key>) -> Option<Key> {
        match (self.state, sample) {
            (_, None) => {
                if let DebounceState::Pressed(key) = self.state {
                    debug!("Keypad: {} released", key);
                }
                self.state = DebounceState::Idle;
                None
            }
            (DebounceState::Idle, Some(key)) => {
                self.state = DebounceState::Pressed(key);
                Some(key)
            }
            (DebounceState::Pressed(_), Some(key)) => match self.policy {
                DebouncePolicy::OneShot => None,
                DebouncePolicy::Repeat => {
                    self.state = DebounceState::Pressed(key);
                    Some(key)
                }
            },
        }
    }

    /// How long to sleep before taking the next sample.
    pub fn interval_ms(&self) -> u32 {
        match (self.policy, self.state) {
            (DebouncePolicy::Repeat, _) => REPEAT_POLL_INTERVAL_MS,
            (DebouncePolicy::OneShot, DebounceState::Idle) => POLL_INTERVAL_MS,
            (DebouncePolicy::OneShot, DebounceState::Pressed(_)) => RELEASE_POLL_INTERVAL_MS,
        }
    }
}

/// Polls a key source forever and hands each press to a [`KeyHandler`].
pub struct KeyEventDebouncer<S, D> {
    source: S,
    delay: D,
    debouncer: Debouncer,
}

impl<S, D> KeyEventDebouncer<S, D>
where
    S: KeySource,
    D: DelayNs,
{
    pub fn new(source: S, delay: D, policy: DebouncePolicy) -> Self {
        Self {
            source,
            delay,
            debouncer: Debouncer::new(policy),
        }
    }

    pub fn state(&self) -> DebounceState {
        self.debouncer.state()
    }

    /// Run one tick: sample, dispatch any press, then sleep.
    ///
    /// The sleep happens even when sampling or the handler fails so that a
    /// persistent fault cannot turn the loop into a busy spin.
    pub async fn poll<H: KeyHandler>(&mut self, handler: &mut H) -> Result<Option<Key>, Error> {
        let res = self.step(handler).await;
        self.delay.delay_ms(self.debouncer.interval_ms()).await;
        res
    }

    /// Poll forever. Errors are logged and the next tick proceeds.
    pub async fn run<H: KeyHandler>(&mut self, handler: &mut H) -> ! {
        info!("Keypad: polling ({})", self.debouncer.policy());
        loop {
            if let Err(e) = self.poll(handler).await {
                warn!("Keypad: {}", e);
            }
        }
    }

    async fn step<H: KeyHandler>(&mut self, handler: &mut H) -> Result<Option<Key>, Error> {
        let sample = self.source.scan()?;
        let event = self.debouncer.feed(sample);
        if let Some(key) = event {
            debug!("Keypad: {} pressed", key);
            handler.on_press(key).await?;
        }
        Ok(event)
    }
}
