use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Something that can run a callback once after a delay.
///
/// Dropping the returned timer should stop it from firing where the platform
/// allows; [`Deferred`] guards against late callbacks either way.
pub trait TimerHost {
    type Timer;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer;
}

/// Single-shot delayed action owned by one component.
///
/// Scheduling again replaces the pending action. Cancelling (or dropping the
/// owner) turns any timer that still fires into a no-op.
pub struct Deferred<T: TimerHost> {
    host: T,
    armed: Rc<Cell<Option<u64>>>,
    next_id: u64,
    timer: Option<T::Timer>,
}

impl<T: TimerHost> Deferred<T> {
    pub fn new(host: T) -> Self {
        Self {
            host,
            armed: Rc::new(Cell::new(None)),
            next_id: 0,
            timer: None,
        }
    }

    pub fn schedule(&mut self, delay: Duration, action: impl FnOnce() + 'static) {
        self.cancel();
        self.next_id += 1;
        let id = self.next_id;
        self.armed.set(Some(id));
        let armed = Rc::clone(&self.armed);
        let timer = self.host.start(
            delay,
            Box::new(move || {
                if armed.get() != Some(id) {
                    return;
                }
                armed.set(None);
                action();
            }),
        );
        self.timer = Some(timer);
    }

    pub fn cancel(&mut self) {
        if self.armed.take().is_some() {
            tracing::debug!("deferred.cancelled");
        }
        self.timer = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get().is_some()
    }
}

impl<T: TimerHost> Drop for Deferred<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

#[cfg(target_arch = "wasm32")]
impl TimerHost for BrowserTimers {
    type Timer = gloo_timers::callback::Timeout;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, callback)
    }
}

/// Runs callbacks immediately. Used where no browser event loop exists.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineTimers;

#[cfg(not(target_arch = "wasm32"))]
impl TimerHost for InlineTimers {
    type Timer = ();

    fn start(&self, _delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer {
        callback();
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformTimers = BrowserTimers;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTimers = InlineTimers;

#[cfg(test)]
pub mod testing {
    use super::TimerHost;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct Entry {
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        entries: Vec<Entry>,
    }

    /// Fake clock for tests: callbacks fire only when `advance` passes their due time.
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualTimers {
        pub fn advance(&self, by: Duration) {
            let target = self.queue.borrow().now + by;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let position = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| entry.due)
                        .map(|(index, _)| index);
                    match position {
                        Some(index) => {
                            let entry = queue.entries.remove(index);
                            queue.now = entry.due;
                            Some(entry.callback)
                        }
                        None => {
                            queue.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
        }

        pub fn scheduled(&self) -> usize {
            self.queue.borrow().entries.len()
        }
    }

    impl TimerHost for ManualTimers {
        type Timer = ();

        fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer {
            let mut queue = self.queue.borrow_mut();
            let due = queue.now + delay;
            queue.entries.push(Entry { due, callback });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualTimers;
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |label: &'static str| {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(label)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn fires_once_after_delay() {
        let timers = ManualTimers::default();
        let mut deferred = Deferred::new(timers.clone());
        let (log, make) = recorder();

        deferred.schedule(Duration::from_millis(100), make("scroll"));
        timers.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());
        assert!(deferred.is_pending());

        timers.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["scroll"]);
        assert!(!deferred.is_pending());
    }

    #[test]
    fn rescheduling_supersedes_the_pending_action() {
        let timers = ManualTimers::default();
        let mut deferred = Deferred::new(timers.clone());
        let (log, make) = recorder();

        deferred.schedule(Duration::from_millis(300), make("first"));
        deferred.schedule(Duration::from_millis(100), make("second"));
        timers.advance(Duration::from_millis(500));

        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn cancel_turns_late_timer_into_noop() {
        let timers = ManualTimers::default();
        let mut deferred = Deferred::new(timers.clone());
        let (log, make) = recorder();

        deferred.schedule(Duration::from_millis(100), make("scroll"));
        deferred.cancel();
        assert_eq!(timers.scheduled(), 1);
        timers.advance(Duration::from_millis(200));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn dropping_owner_cancels() {
        let timers = ManualTimers::default();
        let (log, make) = recorder();
        {
            let mut deferred = Deferred::new(timers.clone());
            deferred.schedule(Duration::from_millis(50), make("scroll"));
        }
        timers.advance(Duration::from_millis(100));
        assert!(log.borrow().is_empty());
    }
}
