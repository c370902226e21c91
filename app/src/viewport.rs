//! Browser capabilities the header depends on.
//!
//! [`ViewportObserver`] and [`Scroller`] keep the header logic independent of a
//! real document. The browser implementations wrap `IntersectionObserver` and
//! `window.scrollTo`.

use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior, ScrollToOptions};

/// Watches a single target whose identity was fixed at construction.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportObserver {
    fn observe(&self);
    fn disconnect(&self);
}

#[cfg_attr(test, mockall::automock)]
pub trait Scroller {
    fn scroll_to_top(&self);
}

/// Keeps an observer attached for as long as the guard lives.
///
/// Dropping the guard detaches the observer, then drops it along with any
/// callback it owns.
#[derive(Debug)]
pub struct ObservationGuard<O: ViewportObserver> {
    observer: O,
}

impl<O: ViewportObserver> ObservationGuard<O> {
    pub fn attach(observer: O) -> Self {
        observer.observe();
        Self { observer }
    }
}

impl<O: ViewportObserver> Drop for ObservationGuard<O> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attaches an observer to `sentinel` if it is mounted.
///
/// An absent sentinel is not an error: nothing is built and `Ok(None)` comes
/// back, leaving setup to the next run once the element exists.
///
/// # Errors
///
/// Returns whatever `build` fails with.
pub fn observe_sentinel<S, O, E, F>(sentinel: Option<S>, build: F) -> Result<Option<ObservationGuard<O>>, E>
where
    O: ViewportObserver,
    F: FnOnce(S) -> Result<O, E>,
{
    sentinel
        .map(build)
        .transpose()
        .map(|observer| observer.map(ObservationGuard::attach))
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `IntersectionObserver` bound to one element.
pub struct BrowserViewport {
    observer: IntersectionObserver,
    target: Element,
    _callback: IntersectionCallback,
}

impl BrowserViewport {
    /// Creates an observer that reports `is_intersecting` for `target`.
    ///
    /// # Errors
    ///
    /// Fails when the host has no `IntersectionObserver`.
    pub fn new<F>(target: Element, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = IntersectionCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        });
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;

        Ok(Self {
            observer,
            target,
            _callback: callback,
        })
    }
}

impl ViewportObserver for BrowserViewport {
    fn observe(&self) {
        self.observer.observe(&self.target);
    }

    fn disconnect(&self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

/// Smooth-scrolls the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroller;

impl Scroller for BrowserScroller {
    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn test_guard_observes_once_and_detaches_on_drop() {
        let mut seq = Sequence::new();
        let mut observer = MockViewportObserver::new();
        observer
            .expect_observe()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        observer
            .expect_disconnect()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let guard = ObservationGuard::attach(observer);
        drop(guard);
    }

    #[test]
    fn test_absent_sentinel_defers_setup() {
        let result = observe_sentinel(None::<()>, |()| -> Result<MockViewportObserver, ()> {
            panic!("no observer should be built without a sentinel")
        });
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_present_sentinel_attaches() {
        let guard = observe_sentinel(Some("sentinel"), |target| {
            assert_eq!(target, "sentinel");
            let mut observer = MockViewportObserver::new();
            observer.expect_observe().times(1).return_const(());
            observer.expect_disconnect().times(1).return_const(());
            Ok::<_, ()>(observer)
        })
        .expect("observer builds");

        assert!(guard.is_some());
    }

    #[test]
    fn test_build_failure_is_returned() {
        let result = observe_sentinel(Some(()), |()| Err::<MockViewportObserver, _>("unsupported"));
        assert!(matches!(result, Err("unsupported")));
    }
}
