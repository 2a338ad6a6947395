//! Preloader - Load-screen phase machine
//!
//! The load screen sits over the page until the load event, then fades and
//! is removed on a fixed schedule: fading starts half a second after load,
//! removal half a second after that.

use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, flush_sync, signal};

use crate::events::EventBus;
use crate::timer::TimerQueue;

const FADE_DELAY: Duration = Duration::from_millis(500);
const REMOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    Visible,
    Fading,
    Removed,
}

pub struct Preloader {
    phase: Signal<PreloaderPhase>,
    timers: TimerQueue,
}

impl Preloader {
    pub fn new(timers: TimerQueue) -> Rc<Self> {
        Rc::new(Self {
            phase: signal(PreloaderPhase::Visible),
            timers,
        })
    }

    /// Arm the fade schedule on the bus load event.
    pub fn attach(self: &Rc<Self>, bus: &EventBus) {
        let preloader = self.clone();
        bus.on_load(move || preloader.on_load());
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase.get()
    }

    /// Reactive handle on the phase.
    pub fn phase_signal(&self) -> Signal<PreloaderPhase> {
        self.phase.clone()
    }

    fn on_load(self: &Rc<Self>) {
        let preloader = self.clone();
        self.timers.schedule(FADE_DELAY, move |queue| {
            preloader.phase.set(PreloaderPhase::Fading);
            flush_sync();
            let preloader = preloader.clone();
            queue.schedule(REMOVE_DELAY, move |_| {
                preloader.phase.set(PreloaderPhase::Removed);
                flush_sync();
            });
        });
    }
}
