//! Typewriter Task - Timer-driven animation loop
//!
//! Wires a [`Typewriter`] machine to a [`TimerQueue`]: each tick steps the
//! machine, writes the new text through the surface, and reschedules itself
//! at the delay the machine returned. The first tick runs immediately on
//! spawn so the text never starts blank for a whole delay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::surface::TextSurface;
use crate::timer::TimerQueue;
use crate::typewriter::Typewriter;

/// Handle on a running typewriter loop.
#[derive(Clone)]
pub struct TypewriterHandle {
    machine: Rc<RefCell<Typewriter>>,
    cancelled: Rc<Cell<bool>>,
}

impl TypewriterHandle {
    /// Stop the loop. The tick already scheduled becomes a no-op.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Swap the role list on the running machine.
    pub fn set_roles(&self, roles: Vec<String>) {
        self.machine.borrow_mut().set_roles(roles);
    }

    /// Text currently shown.
    pub fn text(&self) -> String {
        self.machine.borrow().text()
    }
}

/// Start the animation loop. Runs the first tick before returning.
pub fn spawn(
    machine: Typewriter,
    timers: &TimerQueue,
    surface: Rc<dyn TextSurface>,
) -> TypewriterHandle {
    let machine = Rc::new(RefCell::new(machine));
    let cancelled = Rc::new(Cell::new(false));

    run_tick(&machine, timers, &surface, &cancelled);

    TypewriterHandle { machine, cancelled }
}

fn run_tick(
    machine: &Rc<RefCell<Typewriter>>,
    timers: &TimerQueue,
    surface: &Rc<dyn TextSurface>,
    cancelled: &Rc<Cell<bool>>,
) {
    if cancelled.get() {
        return;
    }

    let delay = machine.borrow_mut().step();
    surface.set_text(&machine.borrow().text());

    let machine = machine.clone();
    let surface = surface.clone();
    let cancelled = cancelled.clone();
    timers.schedule(delay, move |queue| {
        run_tick(&machine, queue, &surface, &cancelled);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::typewriter::TypewriterConfig;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup(roles: &[&str]) -> (TimerQueue, Rc<RecordingSurface>, TypewriterHandle) {
        let timers = TimerQueue::default();
        let surface = RecordingSurface::new();
        let machine = Typewriter::new(
            roles.iter().map(|r| r.to_string()).collect(),
            TypewriterConfig::default(),
        );
        let handle = spawn(machine, &timers, surface.clone());
        (timers, surface, handle)
    }

    #[test]
    fn test_first_tick_runs_on_spawn() {
        let (_timers, surface, _handle) = setup(&["Dev"]);
        assert_eq!(surface.last_text(), Some("D".to_string()));
    }

    #[test]
    fn test_timeline_through_one_word() {
        let (timers, surface, _handle) = setup(&["A", "BB"]);

        // Spawn typed "A" and paused. Nothing moves before the pause ends.
        timers.advance(ms(1999));
        assert_eq!(surface.last_text(), Some("A".to_string()));

        timers.advance(ms(1)); // delete to "", advance to "BB"
        assert_eq!(surface.last_text(), Some("".to_string()));

        timers.advance(ms(500)); // "B"
        assert_eq!(surface.last_text(), Some("B".to_string()));

        timers.advance(ms(100)); // "BB", pause begins
        assert_eq!(surface.last_text(), Some("BB".to_string()));

        timers.advance(ms(2000)); // "B"
        assert_eq!(surface.last_text(), Some("B".to_string()));

        timers.advance(ms(50)); // "", wrap to "A"
        assert_eq!(surface.last_text(), Some("".to_string()));
    }

    #[test]
    fn test_cancel_stops_future_ticks() {
        let (timers, surface, handle) = setup(&["Dev"]);

        handle.cancel();
        let writes_before = surface.write_count();
        timers.advance(ms(10_000));

        assert_eq!(surface.write_count(), writes_before);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_role_swap_through_handle() {
        let (timers, surface, handle) = setup(&["A"]);

        handle.set_roles(vec!["Z".to_string()]);
        // "A" finishes its pause and deletes, then the swap lands.
        timers.advance(ms(2000)); // "" plus advance onto the new list
        timers.advance(ms(500)); // "Z"

        assert_eq!(surface.last_text(), Some("Z".to_string()));
        assert_eq!(handle.text(), "Z");
    }
}
