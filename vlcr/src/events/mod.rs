//! Bridge from libVLC's native event managers to Rust listeners
//!
//! One native callback is attached per event manager, for every event type
//! of its kind, while at least one listener is registered. The callback
//! decodes the event and hands it to a snapshot of the listener list, so
//! listeners may add or remove listeners (including themselves) while an
//! event is being delivered.
//!
//! Listeners run on libVLC threads. A listener must not call back into the
//! object raising the event; use [`crate::MediaPlayer::submit`] for that.

mod types;

pub use types::{
    MediaEvent, MediaListEvent, MediaListPlayerEvent, MediaPlayerEvent, RendererDiscovererEvent,
};

use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::os::raw::{c_int, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use vlcr_sys::types::{libvlc_callback_t, libvlc_event_manager_t, libvlc_event_t};
use vlcr_sys::NativeApi;

/// A kind of native event that can be decoded from `libvlc_event_t`.
pub trait NativeEvent: Sized + Send + Sync + 'static {
    /// Native event types attached for this kind
    const EVENT_TYPES: &'static [c_int];

    /// Decodes a native event, `None` for types this kind does not model.
    fn from_native(event: &libvlc_event_t) -> Option<Self>;
}

/// Receives events of type `E`. Implemented for any `Fn(&E)` closure.
pub trait EventListener<E>: Send + Sync {
    fn on_event(&self, event: &E);
}

impl<E, F> EventListener<E> for F
where
    F: Fn(&E) + Send + Sync,
{
    fn on_event(&self, event: &E) {
        self(event)
    }
}

/// Identifies a registered listener for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Attaches and detaches the native callback on an event manager.
pub(crate) trait EventRegistrar: Send + Sync {
    /// Returns false when libVLC refused the registration.
    unsafe fn attach(&self, event_type: c_int, callback: libvlc_callback_t, data: *mut c_void)
        -> bool;
    unsafe fn detach(&self, event_type: c_int, callback: libvlc_callback_t, data: *mut c_void);
}

/// Registrar backed by a real `libvlc_event_manager_t`.
pub(crate) struct NativeRegistrar {
    api: &'static NativeApi,
    manager: *mut libvlc_event_manager_t,
}

// SAFETY: libVLC event managers are internally locked
unsafe impl Send for NativeRegistrar {}
unsafe impl Sync for NativeRegistrar {}

impl EventRegistrar for NativeRegistrar {
    unsafe fn attach(
        &self,
        event_type: c_int,
        callback: libvlc_callback_t,
        data: *mut c_void,
    ) -> bool {
        if self.manager.is_null() {
            return false;
        }
        matches!(
            self.api
                .libvlc_event_attach(self.manager, event_type, callback, data),
            Ok(0)
        )
    }

    unsafe fn detach(&self, event_type: c_int, callback: libvlc_callback_t, data: *mut c_void) {
        if !self.manager.is_null() {
            let _ = self
                .api
                .libvlc_event_detach(self.manager, event_type, callback, data);
        }
    }
}

type ListenerList<E> = Vec<(ListenerHandle, Arc<dyn EventListener<E>>)>;

/// Listener list shared with the native callback.
struct Dispatcher<E> {
    listeners: RwLock<Arc<ListenerList<E>>>,
}

impl<E: NativeEvent> Dispatcher<E> {
    fn new() -> Self {
        Self {
            listeners: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Returns the listener count after insertion.
    fn insert(&self, handle: ListenerHandle, listener: Arc<dyn EventListener<E>>) -> usize {
        let mut guard = self.listeners.write();
        let mut next = (**guard).clone();
        next.push((handle, listener));
        let len = next.len();
        *guard = Arc::new(next);
        len
    }

    /// Returns whether the handle was found and the count after removal.
    fn remove(&self, handle: ListenerHandle) -> (bool, usize) {
        let mut guard = self.listeners.write();
        if !guard.iter().any(|(h, _)| *h == handle) {
            return (false, guard.len());
        }
        let next: ListenerList<E> = guard.iter().filter(|(h, _)| *h != handle).cloned().collect();
        let len = next.len();
        *guard = Arc::new(next);
        (true, len)
    }

    fn clear(&self) {
        *self.listeners.write() = Arc::new(Vec::new());
    }

    fn len(&self) -> usize {
        self.listeners.read().len()
    }

    fn raise(&self, event: &E) {
        let snapshot = Arc::clone(&self.listeners.read());
        for (handle, listener) in snapshot.iter() {
            let delivered = catch_unwind(AssertUnwindSafe(|| listener.on_event(event)));
            if delivered.is_err() {
                tracing::error!(listener = handle.0, "Event listener panicked");
            }
        }
    }
}

thread_local! {
    /// Dispatchers this thread is delivering for, innermost last.
    static DISPATCHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// True while this thread is delivering an event through `data`. libVLC
/// holds that event manager's lock for the whole delivery.
fn in_dispatch(data: *mut c_void) -> bool {
    DISPATCHING.with(|stack| stack.borrow().contains(&(data as usize)))
}

unsafe extern "C" fn dispatch<E: NativeEvent>(event: *const libvlc_event_t, data: *mut c_void) {
    let (Some(event), Some(dispatcher)) = (event.as_ref(), (data as *const Dispatcher<E>).as_ref())
    else {
        return;
    };
    if let Some(decoded) = E::from_native(event) {
        DISPATCHING.with(|stack| stack.borrow_mut().push(data as usize));
        dispatcher.raise(&decoded);
        DISPATCHING.with(|stack| stack.borrow_mut().pop());
    } else {
        tracing::trace!(event_type = event.type_, "Ignoring unmodelled native event");
    }
}

struct Registration {
    next_id: u64,
    attached: Vec<c_int>,
}

/// Listener registry for one native event manager.
pub struct NativeEventManager<E: NativeEvent> {
    registrar: Box<dyn EventRegistrar>,
    dispatcher: Arc<Dispatcher<E>>,
    state: Mutex<Registration>,
}

impl<E: NativeEvent> NativeEventManager<E> {
    pub(crate) fn new(registrar: Box<dyn EventRegistrar>) -> Self {
        Self {
            registrar,
            dispatcher: Arc::new(Dispatcher::new()),
            state: Mutex::new(Registration {
                next_id: 0,
                attached: Vec::new(),
            }),
        }
    }

    pub(crate) fn native(api: &'static NativeApi, manager: *mut libvlc_event_manager_t) -> Self {
        Self::new(Box::new(NativeRegistrar { api, manager }))
    }

    /// Registers a listener. The native callback is attached with the first
    /// listener.
    pub fn add_listener<L>(&self, listener: L) -> ListenerHandle
    where
        L: EventListener<E> + 'static,
    {
        let mut state = self.state.lock();
        state.next_id += 1;
        let handle = ListenerHandle(state.next_id);
        self.dispatcher.insert(handle, Arc::new(listener));
        if state.attached.is_empty() {
            self.attach(&mut state);
        }
        handle
    }

    /// Unregisters a listener, returning false if it was not registered.
    /// The native callback is detached with the last listener, unless the
    /// removal happens inside an event delivery; it then stays attached with
    /// no listeners until the next removal or release.
    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        let mut state = self.state.lock();
        let (removed, remaining) = self.dispatcher.remove(handle);
        if removed && remaining == 0 && !in_dispatch(self.data()) {
            self.detach(&mut state);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.dispatcher.len()
    }

    /// Returns true while the native callback is attached.
    pub fn is_attached(&self) -> bool {
        !self.state.lock().attached.is_empty()
    }

    /// Drops every listener and detaches from the native event manager.
    /// Called from one of this manager's own listeners, the detach is
    /// deferred like in `remove_listener`.
    pub fn release(&self) {
        let mut state = self.state.lock();
        self.dispatcher.clear();
        if !in_dispatch(self.data()) {
            self.detach(&mut state);
        }
    }

    fn data(&self) -> *mut c_void {
        Arc::as_ptr(&self.dispatcher) as *mut c_void
    }

    fn attach(&self, state: &mut Registration) {
        for &event_type in E::EVENT_TYPES {
            // SAFETY: the dispatcher outlives the registration, detach runs
            // before it is dropped
            let ok = unsafe {
                self.registrar
                    .attach(event_type, Some(dispatch::<E>), self.data())
            };
            if ok {
                state.attached.push(event_type);
            } else {
                tracing::warn!(event_type, "libVLC refused event registration");
            }
        }
        tracing::debug!(
            count = state.attached.len(),
            kind = std::any::type_name::<E>(),
            "Attached native event callback"
        );
    }

    fn detach(&self, state: &mut Registration) {
        if state.attached.is_empty() {
            return;
        }
        for event_type in state.attached.drain(..) {
            unsafe {
                self.registrar
                    .detach(event_type, Some(dispatch::<E>), self.data())
            };
        }
        tracing::debug!(
            kind = std::any::type_name::<E>(),
            "Detached native event callback"
        );
    }
}

impl<E: NativeEvent> Drop for NativeEventManager<E> {
    fn drop(&mut self) {
        self.release();
        if self.is_attached() {
            // Dropped from one of its own listeners: libVLC still holds the
            // callback, so the empty dispatcher must stay valid.
            tracing::warn!(
                kind = std::any::type_name::<E>(),
                "Event manager dropped during its own event delivery"
            );
            std::mem::forget(Arc::clone(&self.dispatcher));
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Registrar double that records registrations and lets tests fire
    //! events through the real trampoline.

    use super::*;
    use std::ptr;
    use vlcr_sys::types::{libvlc_event_u, libvlc_event_t};

    #[derive(Default)]
    pub(crate) struct Registry {
        pub(crate) attached: Vec<c_int>,
        pub(crate) attach_calls: usize,
        pub(crate) detach_calls: usize,
        callback: Option<(unsafe extern "C" fn(*const libvlc_event_t, *mut c_void), usize)>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct FakeRegistrar(pub(crate) Arc<Mutex<Registry>>);

    impl EventRegistrar for FakeRegistrar {
        unsafe fn attach(
            &self,
            event_type: c_int,
            callback: libvlc_callback_t,
            data: *mut c_void,
        ) -> bool {
            let mut reg = self.0.lock();
            reg.attach_calls += 1;
            reg.attached.push(event_type);
            reg.callback = callback.map(|cb| (cb, data as usize));
            true
        }

        unsafe fn detach(&self, event_type: c_int, _: libvlc_callback_t, _: *mut c_void) {
            let mut reg = self.0.lock();
            reg.detach_calls += 1;
            reg.attached.retain(|t| *t != event_type);
        }
    }

    impl FakeRegistrar {
        /// Delivers an event with an empty payload, if the type is attached.
        pub(crate) fn fire(&self, type_: c_int) {
            self.fire_with(
                type_,
                libvlc_event_u {
                    _size: [ptr::null_mut(); 2],
                },
            );
        }

        /// Delivers an event carrying `u`, if the type is attached.
        pub(crate) fn fire_with(&self, type_: c_int, u: libvlc_event_u) {
            let callback = self.0.lock().callback;
            let event = libvlc_event_t {
                type_,
                p_obj: ptr::null_mut(),
                u,
            };
            let attached = self.0.lock().attached.contains(&type_);
            if let (Some((cb, data)), true) = (callback, attached) {
                unsafe { cb(&event, data as *mut c_void) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeRegistrar;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vlcr_sys::types::*;

    fn manager() -> (NativeEventManager<MediaPlayerEvent>, FakeRegistrar) {
        let registrar = FakeRegistrar::default();
        (
            NativeEventManager::new(Box::new(registrar.clone())),
            registrar,
        )
    }

    #[test]
    fn test_attach_on_first_listener_only() {
        let (events, registrar) = manager();
        assert!(!events.is_attached());

        let a = events.add_listener(|_: &MediaPlayerEvent| {});
        let b = events.add_listener(|_: &MediaPlayerEvent| {});
        assert!(events.is_attached());
        assert_eq!(
            registrar.0.lock().attach_calls,
            MediaPlayerEvent::EVENT_TYPES.len()
        );

        assert!(events.remove_listener(a));
        assert!(events.is_attached());
        assert!(events.remove_listener(b));
        assert!(!events.is_attached());
        assert!(registrar.0.lock().attached.is_empty());
    }

    #[test]
    fn test_remove_unknown_listener() {
        let (events, registrar) = manager();
        let handle = events.add_listener(|_: &MediaPlayerEvent| {});
        assert!(events.remove_listener(handle));
        assert!(!events.remove_listener(handle));
        assert_eq!(
            registrar.0.lock().detach_calls,
            MediaPlayerEvent::EVENT_TYPES.len()
        );
    }

    #[test]
    fn test_events_reach_listeners() {
        let (events, registrar) = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        events.add_listener(move |e: &MediaPlayerEvent| sink.lock().push(e.clone()));

        registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
        registrar.fire(LIBVLC_MEDIA_PLAYER_STOPPED);

        assert_eq!(
            *seen.lock(),
            vec![MediaPlayerEvent::Playing, MediaPlayerEvent::Stopped]
        );
    }

    #[test]
    fn test_panicking_listener_does_not_stop_delivery() {
        let (events, registrar) = manager();
        let count = Arc::new(AtomicUsize::new(0));
        events.add_listener(|_: &MediaPlayerEvent| panic!("listener failure"));
        let counter = Arc::clone(&count);
        events.add_listener(move |_: &MediaPlayerEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        registrar.fire(LIBVLC_MEDIA_PLAYER_PAUSED);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_can_remove_itself() {
        let (events, registrar) = manager();
        let events = Arc::new(events);
        let count = Arc::new(AtomicUsize::new(0));
        let handle_slot = Arc::new(Mutex::new(None));

        let counter = Arc::clone(&count);
        let slot = Arc::clone(&handle_slot);
        let weak = Arc::downgrade(&events);
        let handle = events.add_listener(move |_: &MediaPlayerEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
            if let (Some(events), Some(handle)) = (weak.upgrade(), slot.lock().take()) {
                events.remove_listener(handle);
            }
        });
        *handle_slot.lock() = Some(handle);

        registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
        registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(events.listener_count(), 0);
        // detach is deferred while delivering
        assert!(events.is_attached());
        events.release();
        assert!(!events.is_attached());
    }

    #[test]
    fn test_other_manager_detaches_during_delivery() {
        let (a, a_registrar) = manager();
        let (b, b_registrar) = manager();
        let b = Arc::new(b);
        let b_handle = b.add_listener(|_: &MediaPlayerEvent| {});

        let other = Arc::clone(&b);
        a.add_listener(move |_: &MediaPlayerEvent| {
            other.remove_listener(b_handle);
        });
        a_registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);

        assert!(!b.is_attached());
        assert!(b_registrar.0.lock().attached.is_empty());
        assert!(a.is_attached());
    }

    #[test]
    fn test_release_during_own_delivery_is_deferred() {
        let (events, registrar) = manager();
        let events = Arc::new(events);
        let weak = Arc::downgrade(&events);
        events.add_listener(move |_: &MediaPlayerEvent| {
            if let Some(events) = weak.upgrade() {
                events.release();
            }
        });

        registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
        assert_eq!(events.listener_count(), 0);
        assert!(events.is_attached());
        assert_eq!(registrar.0.lock().detach_calls, 0);

        events.release();
        assert!(!events.is_attached());
    }

    #[test]
    fn test_drop_during_own_delivery_keeps_dispatcher() {
        let (events, registrar) = manager();
        let slot = Arc::new(Mutex::new(None));
        let owner = Arc::clone(&slot);
        events.add_listener(move |_: &MediaPlayerEvent| {
            drop(owner.lock().take());
        });
        *slot.lock() = Some(events);

        registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
        assert!(slot.lock().is_none());
        // still registered, later events reach an empty dispatcher
        assert!(!registrar.0.lock().attached.is_empty());
        registrar.fire(LIBVLC_MEDIA_PLAYER_STOPPED);
    }

    #[test]
    fn test_release_detaches() {
        let (events, registrar) = manager();
        events.add_listener(|_: &MediaPlayerEvent| {});
        events.release();
        assert_eq!(events.listener_count(), 0);
        assert!(registrar.0.lock().attached.is_empty());
    }

    #[test]
    fn test_drop_detaches() {
        let (events, registrar) = manager();
        events.add_listener(|_: &MediaPlayerEvent| {});
        drop(events);
        assert!(registrar.0.lock().attached.is_empty());
    }
}
