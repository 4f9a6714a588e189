use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum BlinkEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Source of input events for the game loop
pub trait BlinkEventSource {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<BlinkEvent, RecvTimeoutError>;
}

/// Events arriving over a channel. The terminal reader thread feeds one of
/// these in production; tests feed it by hand.
pub struct ChannelEventSource {
    rx: Receiver<BlinkEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<BlinkEvent>) -> Self {
        Self { rx }
    }

    /// Spawn the crossterm reader thread. Keys, mouse presses and resizes
    /// are forwarded; focus and paste events are dropped.
    pub fn crossterm() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => BlinkEvent::Key(key),
                Ok(CtEvent::Mouse(mouse)) => BlinkEvent::Mouse(mouse),
                Ok(CtEvent::Resize(w, h)) => BlinkEvent::Resize(w, h),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self::new(rx)
    }
}

impl BlinkEventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<BlinkEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Hands the loop one event at a time, or a `Tick` once the tick interval
/// passes quietly, so the round timer keeps getting polled.
pub struct Runner<E: BlinkEventSource> {
    source: E,
    tick: Duration,
}

impl<E: BlinkEventSource> Runner<E> {
    pub fn new(source: E, tick: Duration) -> Self {
        Self { source, tick }
    }

    pub fn step(&self) -> BlinkEvent {
        match self.source.recv_timeout(self.tick) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => BlinkEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => {
                // no more input will come; keep ticking at the normal pace
                // instead of spinning on a dead channel
                std::thread::sleep(self.tick);
                BlinkEvent::Tick
            }
        }
    }
}
