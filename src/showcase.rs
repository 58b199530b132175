use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::timer::{Scheduler, TimerError, TimerGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub repository: &'static str,
    pub demo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseItem {
    pub id: u32,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub color: &'static str,
    pub media: &'static str,
    pub links: ProjectLinks,
    pub highlights: &'static [&'static str],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("showcase needs at least one item")]
    EmptyCatalog,
    #[error("duplicate showcase item id: {0}")]
    DuplicateId(u32),
    #[error("selection {index} out of range for {len} items")]
    InvalidSelection { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseEvent {
    Tick,
    Select(usize),
    HoverEnter,
    HoverExit,
}

#[derive(Debug, Clone)]
pub struct Showcase {
    items: Arc<[ShowcaseItem]>,
    active: usize,
    suspended: bool,
}

impl Showcase {
    pub fn new(items: impl Into<Arc<[ShowcaseItem]>>) -> Result<Self, ShowcaseError> {
        let items = items.into();
        if items.is_empty() {
            return Err(ShowcaseError::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(ShowcaseError::DuplicateId(dup.id));
        }
        Ok(Self {
            items,
            active: 0,
            suspended: false,
        })
    }

    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item(&self) -> &ShowcaseItem {
        &self.items[self.active]
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn apply(&mut self, event: ShowcaseEvent) -> Result<(), ShowcaseError> {
        match event {
            ShowcaseEvent::Tick => {
                self.tick();
                Ok(())
            }
            ShowcaseEvent::Select(index) => self.select(index),
            ShowcaseEvent::HoverEnter => {
                self.suspended = true;
                Ok(())
            }
            ShowcaseEvent::HoverExit => {
                self.suspended = false;
                Ok(())
            }
        }
    }

    /// Advances to the next item, wrapping at the end. Ignored while suspended.
    pub fn tick(&mut self) {
        if self.suspended {
            return;
        }
        self.active = (self.active + 1) % self.items.len();
    }

    pub fn select(&mut self, index: usize) -> Result<(), ShowcaseError> {
        if index >= self.items.len() {
            return Err(ShowcaseError::InvalidSelection {
                index,
                len: self.items.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn hover_enter(&mut self) {
        self.suspended = true;
    }

    pub fn hover_exit(&mut self) {
        self.suspended = false;
    }
}

/// Starts the single auto-advance interval for a mounted showcase.
pub fn start_auto_advance<S, F>(
    scheduler: &S,
    interval: Duration,
    on_tick: F,
) -> Result<TimerGuard<S::Handle>, TimerError>
where
    S: Scheduler,
    F: FnMut() + 'static,
{
    log::debug!("showcase auto-advance every {interval:?}");
    scheduler.every_guarded(interval, on_tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::timer::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn item(id: u32) -> ShowcaseItem {
        ShowcaseItem {
            id,
            title: "Item",
            tagline: "",
            description: "",
            tech: &[],
            color: "#000000",
            media: "",
            links: ProjectLinks {
                repository: "#",
                demo: "#",
            },
            highlights: &[],
        }
    }

    fn showcase_of(n: u32) -> Showcase {
        Showcase::new((1..=n).map(item).collect::<Vec<_>>()).expect("valid catalog")
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        assert_eq!(
            Showcase::new(Vec::<ShowcaseItem>::new()).err(),
            Some(ShowcaseError::EmptyCatalog)
        );
        assert_eq!(
            Showcase::new(vec![item(1), item(2), item(1)]).err(),
            Some(ShowcaseError::DuplicateId(1))
        );
    }

    #[test]
    fn test_initial_state() {
        let showcase = Showcase::new(PROJECTS).unwrap();
        assert_eq!(showcase.active_index(), 0);
        assert!(!showcase.is_suspended());
        assert_eq!(showcase.active_item().title, "Portfolio Website");
    }

    #[test]
    fn test_ticks_cycle_through_items() {
        for n in 1..=5 {
            let mut showcase = showcase_of(n);
            let visited = (0..n * 3)
                .map(|_| {
                    showcase.tick();
                    showcase.active_index()
                })
                .collect::<Vec<_>>();
            let expected = (1..=n * 3).map(|i| (i % n) as usize).collect::<Vec<_>>();
            assert_eq!(visited, expected, "cycle for {n} items");
            assert!(visited.iter().all(|&i| i < n as usize));
        }
    }

    #[test]
    fn test_single_item_tick_is_noop() {
        let mut showcase = showcase_of(1);
        showcase.tick();
        showcase.tick();
        assert_eq!(showcase.active_index(), 0);
    }

    #[test]
    fn test_tick_ignored_while_suspended() {
        let mut showcase = showcase_of(4);
        showcase.tick();
        showcase.apply(ShowcaseEvent::HoverEnter).unwrap();
        for _ in 0..10 {
            showcase.apply(ShowcaseEvent::Tick).unwrap();
        }
        assert_eq!(showcase.active_index(), 1);

        showcase.apply(ShowcaseEvent::HoverExit).unwrap();
        // no catch-up tick on exit
        assert_eq!(showcase.active_index(), 1);
        showcase.apply(ShowcaseEvent::Tick).unwrap();
        assert_eq!(showcase.active_index(), 2);
    }

    #[test]
    fn test_select_regardless_of_suspension() {
        let mut showcase = showcase_of(4);
        showcase.select(3).unwrap();
        assert_eq!(showcase.active_index(), 3);

        showcase.hover_enter();
        showcase.apply(ShowcaseEvent::Select(2)).unwrap();
        assert_eq!(showcase.active_index(), 2);
        assert!(showcase.is_suspended());
    }

    #[test]
    fn test_invalid_select_leaves_state_unchanged() {
        let mut showcase = showcase_of(4);
        showcase.select(1).unwrap();
        showcase.hover_enter();

        let err = showcase.apply(ShowcaseEvent::Select(4)).unwrap_err();
        assert_eq!(err, ShowcaseError::InvalidSelection { index: 4, len: 4 });
        assert!(showcase.select(usize::MAX).is_err());
        assert_eq!(showcase.active_index(), 1);
        assert!(showcase.is_suspended());
    }

    #[test]
    fn test_auto_advance_timeline() {
        let clock = ManualClock::new();
        let showcase = Rc::new(RefCell::new(showcase_of(4)));
        let state = showcase.clone();
        let _timer = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            state.borrow_mut().tick()
        })
        .unwrap();

        clock.advance_ms(12_500);
        assert_eq!(showcase.borrow().active_index(), 2);
        clock.advance_ms(2_500);
        assert_eq!(showcase.borrow().active_index(), 3);
    }

    #[test]
    fn test_hover_suspends_across_intervals() {
        let clock = ManualClock::new();
        let showcase = Rc::new(RefCell::new(showcase_of(4)));
        let state = showcase.clone();
        let _timer = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            state.borrow_mut().tick()
        })
        .unwrap();

        clock.advance_ms(5_000);
        showcase.borrow_mut().hover_enter();
        clock.advance_ms(60_000);
        assert_eq!(showcase.borrow().active_index(), 1);

        // exit mid-interval: next change waits for the scheduled boundary
        clock.advance_ms(1_000);
        showcase.borrow_mut().hover_exit();
        clock.advance_ms(3_999);
        assert_eq!(showcase.borrow().active_index(), 1);
        clock.advance_ms(1);
        assert_eq!(showcase.borrow().active_index(), 2);
    }

    #[test]
    fn test_select_does_not_reschedule_ticks() {
        let clock = ManualClock::new();
        let showcase = Rc::new(RefCell::new(showcase_of(4)));
        let state = showcase.clone();
        let _timer = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            state.borrow_mut().tick()
        })
        .unwrap();

        clock.advance_ms(4_000);
        showcase.borrow_mut().select(2).unwrap();
        clock.advance_ms(1_000);
        assert_eq!(showcase.borrow().active_index(), 3);
    }

    #[test]
    fn test_no_mutation_after_unmount() {
        let clock = ManualClock::new();
        let mutations = Rc::new(Cell::new(0u32));
        let showcase = Rc::new(RefCell::new(showcase_of(4)));

        let state = showcase.clone();
        let spy = mutations.clone();
        let timer = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            spy.set(spy.get() + 1);
            state.borrow_mut().tick();
        })
        .unwrap();
        assert_eq!(clock.pending(), 1);

        clock.advance_ms(10_000);
        assert_eq!(mutations.get(), 2);

        drop(timer);
        clock.advance_ms(60_000);
        assert_eq!(mutations.get(), 2);
        assert_eq!(showcase.borrow().active_index(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_remount_creates_fresh_timer() {
        let clock = ManualClock::new();
        let ticks = Rc::new(Cell::new(0u32));

        let t = ticks.clone();
        let first = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            t.set(t.get() + 1)
        })
        .unwrap();
        clock.advance_ms(3_000);
        drop(first);

        let t = ticks.clone();
        let _second = start_auto_advance(&clock, Duration::from_millis(5000), move || {
            t.set(t.get() + 1)
        })
        .unwrap();
        assert_eq!(clock.pending(), 1);
        clock.advance_ms(4_999);
        assert_eq!(ticks.get(), 0);
        clock.advance_ms(1);
        assert_eq!(ticks.get(), 1);
    }
}
