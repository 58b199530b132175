use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use wasm_bindgen::JsValue;

use crate::timer::{Scheduler, Sleep, TimerError, TimerHandle};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[derive(Debug, Clone, Copy)]
pub enum BrowserHandle {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl TimerHandle for BrowserHandle {
    fn cancel(&self) {
        match self {
            Self::Interval(handle) => handle.clear(),
            Self::Timeout(handle) => handle.clear(),
        }
    }
}

fn registration_error(err: JsValue) -> TimerError {
    TimerError::Registration(format!("{err:?}"))
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn every<F>(&self, period: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: FnMut() + 'static,
    {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod);
        }
        let callback = RefCell::new(callback);
        set_interval_with_handle(move || (callback.borrow_mut())(), period)
            .map(BrowserHandle::Interval)
            .map_err(registration_error)
    }

    fn after<F>(&self, delay: Duration, callback: F) -> Result<Self::Handle, TimerError>
    where
        F: FnOnce() + 'static,
    {
        set_timeout_with_handle(callback, delay)
            .map(BrowserHandle::Timeout)
            .map_err(registration_error)
    }
}

impl Sleep for BrowserScheduler {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        let (tx, rx) = oneshot::channel::<()>();
        let registered = set_timeout_with_handle(
            move || {
                let _ = tx.send(());
            },
            duration,
        )
        .map_err(registration_error);
        async move {
            match registered {
                Ok(_) => {
                    let _ = rx.await;
                }
                Err(err) => log::warn!("{err}; not waiting"),
            }
        }
    }
}
