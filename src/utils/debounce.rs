use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Wraps `callback` in a window resize listener that only fires after
/// `delay_ms` of inactivity, so a chart is re-rendered once per drag instead
/// of on every intermediate resize event.
///
/// The returned `EventListener` must be kept alive for the component's
/// lifetime; dropping it removes the listener and cancels any pending run.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().unwrap(), "resize", move |_| {
        let cb = callback.clone();
        let timeout = Timeout::new(delay_ms, move || cb());
        // Replacing the stored handle drops and thereby cancels the previous one
        *pending.borrow_mut() = Some(timeout);
    })
}
