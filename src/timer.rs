//! Host timers behind a trait, with a deterministic clock for tests.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("host refused timer registration: {0}")]
    Registration(String),
    #[error("repeating timer period must be non-zero")]
    ZeroPeriod,
}

pub trait TimerHandle {
    /// Cancelling an already fired or cancelled timer is a no-op.
    fn cancel(&self);
}

pub trait Scheduler {
    type Handle: TimerHandle;

    fn every<F>(&self, period: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: FnMut() + 'static;

    fn after<F>(&self, delay: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: FnOnce() + 'static;

    fn every_guarded<F>(
        &self,
        period: Duration,
        callback: F,
    ) -> Result<TimerGuard<Self::Handle>, TimerError>
    where
        F: FnMut() + 'static,
    {
        self.every(period, callback).map(TimerGuard::new)
    }

    fn after_guarded<F>(
        &self,
        delay: Duration,
        callback: F,
    ) -> Result<TimerGuard<Self::Handle>, TimerError>
    where
        F: FnOnce() + 'static,
    {
        self.after(delay, callback).map(TimerGuard::new)
    }
}

pub trait Sleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Owns a registered timer and cancels it when dropped.
#[derive(Debug)]
pub struct TimerGuard<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> TimerGuard<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: TimerHandle> Drop for TimerGuard<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A self-rescheduling sequence of one-shot timers.
pub struct TimeoutChain<H: TimerHandle> {
    slot: Rc<RefCell<Option<TimerGuard<H>>>>,
}

impl<H: TimerHandle> TimeoutChain<H> {
    pub fn cancel(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().as_ref().is_some_and(TimerGuard::is_armed)
    }
}

pub fn chain_timeouts<S, F>(
    scheduler: &S,
    first_delay: Duration,
    step: F,
) -> Result<TimeoutChain<S::Handle>, TimerError>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
    F: FnMut() -> Option<Duration> + 'static,
{
    let slot = Rc::new(RefCell::new(None));
    let guard = arm_link(scheduler.clone(), Rc::downgrade(&slot), first_delay, step)?;
    *slot.borrow_mut() = Some(guard);
    Ok(TimeoutChain { slot })
}

fn arm_link<S, F>(
    scheduler: S,
    slot: Weak<RefCell<Option<TimerGuard<S::Handle>>>>,
    delay: Duration,
    mut step: F,
) -> Result<TimerGuard<S::Handle>, TimerError>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
    F: FnMut() -> Option<Duration> + 'static,
{
    let next_scheduler = scheduler.clone();
    scheduler.after_guarded(delay, move || {
        let Some(strong) = slot.upgrade() else {
            return;
        };
        let Some(next) = step() else {
            strong.borrow_mut().take();
            return;
        };
        match arm_link(next_scheduler, slot, next, step) {
            Ok(guard) => *strong.borrow_mut() = Some(guard),
            Err(e) => {
                log::warn!("timeout chain stopped: {e}");
                strong.borrow_mut().take();
            }
        }
    })
}

enum Callback {
    Repeating(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due: Duration,
    period: Option<Duration>,
    // taken out while the callback runs
    callback: Option<Callback>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Deterministic single-threaded clock. Time only moves on [`ManualClock::advance`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualHandle {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    fn register(
        &self,
        delay: Duration,
        period: Option<Duration>,
        callback: Callback,
    ) -> ManualHandle {
        let mut st = self.state.borrow_mut();
        let id = st.next_id;
        st.next_id += 1;
        let due = st.now + delay;
        st.entries.push(Entry {
            id,
            due,
            period,
            callback: Some(callback),
        });
        ManualHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let (id, callback) = {
                let mut st = self.state.borrow_mut();
                let next = st
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target && e.callback.is_some())
                    .min_by_key(|(_, e)| (e.due, e.id))
                    .map(|(i, _)| i);
                let Some(i) = next else {
                    st.now = target;
                    break;
                };
                st.now = st.entries[i].due;
                match st.entries[i].period {
                    Some(period) => {
                        let entry = &mut st.entries[i];
                        entry.due += period;
                        (entry.id, entry.callback.take())
                    }
                    None => {
                        let entry = st.entries.remove(i);
                        (entry.id, entry.callback)
                    }
                }
            };
            match callback {
                Some(Callback::Repeating(mut f)) => {
                    f();
                    let mut st = self.state.borrow_mut();
                    // the callback may have cancelled its own timer
                    if let Some(entry) = st.entries.iter_mut().find(|e| e.id == id) {
                        entry.callback = Some(Callback::Repeating(f));
                    }
                }
                Some(Callback::Once(f)) => f(),
                None => {}
            }
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn every<F>(&self, period: Duration, callback: F) -> Result<ManualHandle, TimerError>
    where
        F: FnMut() + 'static,
    {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        Ok(self.register(period, Some(period), Callback::Repeating(Box::new(callback))))
    }

    fn after<F>(&self, delay: Duration, callback: F) -> Result<ManualHandle, TimerError>
    where
        F: FnOnce() + 'static,
    {
        Ok(self.register(delay, None, Callback::Once(Box::new(callback))))
    }
}
