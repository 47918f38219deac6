use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::dom::slot::MountSlot;
use crate::dom::view::DashboardView;
use crate::error::{DashboardError, DashboardResult};
use crate::report::{BrowserNotifier, Notifier, Reporter, TracingReporter};

thread_local! {
    static MOUNTED: RefCell<MountSlot<MountedDashboard>> = const { RefCell::new(MountSlot::new()) };
}

/// An installed click listener, removed again on drop.
struct Listener {
    target: Element,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &Element,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> DashboardResult<Self> {
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(DashboardError::from_js)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Listeners installed by [`bind`]. Dropping it detaches them all.
pub struct MountedDashboard {
    listeners: Vec<Listener>,
    controller: Rc<RefCell<DashboardController>>,
}

impl MountedDashboard {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.controller.borrow().sidebar().is_expanded()
    }

    pub fn active_segment(&self) -> Option<String> {
        self.controller
            .borrow()
            .periods()
            .active()
            .map(|s| s.id.clone())
    }
}

/// JS handle to the dashboard mounted by `mountDashboard`.
///
/// The listeners belong to this module, not to the handle: letting the handle
/// be collected leaves the page wired. `dispose()` is the only teardown, and
/// a later `mountDashboard` call replaces the current mount.
#[wasm_bindgen]
pub struct DashboardBindings {
    generation: u32,
}

impl DashboardBindings {
    fn with_mount<R>(&self, f: impl FnOnce(&MountedDashboard) -> R) -> Option<R> {
        MOUNTED.with(|slot| slot.borrow().get(self.generation).map(f))
    }
}

#[wasm_bindgen]
impl DashboardBindings {
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.with_mount(|_| ()).is_some()
    }

    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.with_mount(MountedDashboard::listener_count).unwrap_or(0)
    }

    #[wasm_bindgen(js_name = sidebarExpanded)]
    pub fn sidebar_expanded(&self) -> bool {
        self.with_mount(MountedDashboard::sidebar_expanded)
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = activeSegment)]
    pub fn active_segment(&self) -> Option<String> {
        self.with_mount(MountedDashboard::active_segment).flatten()
    }

    /// Detach every listener of this mount. No-op once replaced or disposed.
    pub fn dispose(&self) {
        let mounted = MOUNTED.with(|slot| slot.borrow_mut().take(self.generation));
        if mounted.is_some() {
            tracing::debug!(generation = self.generation, "Dashboard bindings disposed");
        }
    }
}

/// Wire the three dashboard behaviours onto `view`.
///
/// Each behaviour is installed only when its elements are present. The
/// initial sidebar and segment state is read back from the markup.
pub fn bind(
    view: &DashboardView,
    config: &DashboardConfig,
    reporter: Rc<dyn Reporter>,
    notifier: Rc<dyn Notifier>,
) -> DashboardResult<MountedDashboard> {
    let controller = Rc::new(RefCell::new(DashboardController::from_parts(
        view.read_sidebar(config),
        view.read_segments(config),
        config.notification_message.clone(),
        reporter,
        notifier,
    )));

    let mut listeners = Vec::new();

    if let (Some(sidebar), Some(toggle)) = (view.sidebar(), view.sidebar_toggle()) {
        let controller = Rc::clone(&controller);
        let sidebar = sidebar.clone();
        let button = toggle.clone();
        let expanded_class = config.classes.expanded.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let (expanded, aria) = {
                let mut controller = controller.borrow_mut();
                let expanded = controller.toggle_sidebar();
                (expanded, controller.sidebar().aria_expanded())
            };
            let applied = sidebar
                .class_list()
                .toggle_with_force(&expanded_class, expanded)
                .and_then(|_| button.set_attribute("aria-expanded", aria));
            if let Err(err) = applied {
                tracing::warn!(error = %DashboardError::from_js(err), "Failed to update sidebar");
            }
        });
        listeners.push(Listener::attach(toggle, "click", callback)?);
    }

    if let Some(group) = view.segment_group() {
        let controller = Rc::clone(&controller);
        let view = view.clone();
        let config = config.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let target = view.segment_at(&target, &config);

            let mut controller = controller.borrow_mut();
            if controller.select_segment(target).is_none() {
                return;
            }
            let flags = controller.periods().active_flags();
            for (el, active) in view.segments().iter().zip(flags) {
                if let Err(err) = el
                    .class_list()
                    .toggle_with_force(&config.classes.active, active)
                {
                    tracing::warn!(error = %DashboardError::from_js(err), "Failed to mark segment");
                }
            }
        });
        listeners.push(Listener::attach(group, "click", callback)?);
    }

    if let Some(button) = view.notification_button() {
        let controller = Rc::clone(&controller);
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.borrow().open_notifications();
        });
        listeners.push(Listener::attach(button, "click", callback)?);
    }

    tracing::debug!(listeners = listeners.len(), "Dashboard bindings installed");

    Ok(MountedDashboard {
        listeners,
        controller,
    })
}

/// Attach the dashboard behaviour to the current page.
///
/// Call once the document has been parsed (e.g. from `DOMContentLoaded`).
/// `config` is an optional object overriding fields of the default
/// configuration. Mounting again replaces the previous mount.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config: JsValue) -> Result<DashboardBindings, JsValue> {
    console_error_panic_hook::set_once();
    let _ = dioxus::logger::init(tracing::Level::INFO);

    let config: DashboardConfig = if config.is_undefined() || config.is_null() {
        DashboardConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?
    };
    config.validate()?;

    let document = web_sys::window()
        .ok_or(DashboardError::NoWindow)?
        .document()
        .ok_or(DashboardError::NoDocument)?;
    let view = DashboardView::query(&document, &config)?;

    let mounted = bind(
        &view,
        &config,
        Rc::new(TracingReporter),
        Rc::new(BrowserNotifier),
    )?;
    let (generation, previous) = MOUNTED.with(|slot| slot.borrow_mut().replace(mounted));
    // Detach the old listeners outside the slot borrow
    drop(previous);

    Ok(DashboardBindings { generation })
}
