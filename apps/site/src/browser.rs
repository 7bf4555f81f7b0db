//! Browser binding: drives [`PageController`] from the live DOM.
//!
//! ```javascript,ignore
//! import init, { hydrate } from "/pkg/portfolio.js";
//! await init();
//! const page = hydrate();
//! window.addEventListener("pagehide", () => page.dispose(), { once: true });
//! ```
//!
//! Every listener, observer and subscription acquired here is held by the
//! returned [`PageHandle`]. Only `dispose()` releases them; a handle that is
//! merely garbage-collected on the JS side keeps its listeners attached.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::content::sections::SectionRegistry;
use crate::view::navigation::{NavigationOutcome, Viewport};
use crate::view::page::{classes, menu_icon, PageController, PageEvent};
use crate::view::subscription::Subscription;
use crate::view::visibility::IntersectionEvent;

const NAV_ID: &str = "site-nav";
const MENU_ID: &str = "mobile-menu";
const MENU_TOGGLE_ID: &str = "menu-toggle";
const NAV_TARGET_ATTR: &str = "data-nav-target";

struct DomViewport {
    document: Document,
}

impl Viewport for DomViewport {
    fn scroll_to_section(&mut self, section_id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(section_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

struct Shared {
    page: RefCell<PageController>,
    document: Document,
}

impl Shared {
    fn dispatch(&self, event: PageEvent<'_>) -> Option<NavigationOutcome> {
        let mut viewport = DomViewport {
            document: self.document.clone(),
        };
        match self.page.try_borrow_mut() {
            Ok(mut page) => page.handle(event, &mut viewport),
            Err(_) => {
                tracing::debug!(?event, "page busy; event dropped");
                None
            }
        }
    }
}

/// Live page binding returned to JavaScript.
#[wasm_bindgen]
pub struct PageHandle {
    shared: Rc<Shared>,
    bindings: Vec<Subscription>,
}

#[wasm_bindgen]
impl PageHandle {
    /// Removes every listener and disconnects the observer. Letting the JS
    /// object be collected without calling this leaves them attached.
    pub fn dispose(self) {
        tracing::debug!(bindings = self.bindings.len(), "page handle disposed");
    }

    #[wasm_bindgen(js_name = menuOpen)]
    pub fn menu_open(&self) -> bool {
        self.shared.page.borrow().view().menu_open
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.shared.page.borrow().view().active_section.to_string()
    }

    #[wasm_bindgen(js_name = revealedSections)]
    pub fn revealed_sections(&self) -> Vec<JsValue> {
        self.shared
            .page
            .borrow()
            .view()
            .revealed
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }
}

/// Binds the home page. Missing optional elements (menu button, nav) are
/// skipped rather than treated as errors.
#[wasm_bindgen]
pub fn hydrate() -> Result<PageHandle, JsValue> {
    install_console_diagnostics();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let shared = Rc::new(Shared {
        page: RefCell::new(PageController::new(SectionRegistry::default())),
        document: document.clone(),
    });

    let mut bindings = Vec::new();
    bindings.extend(bind_presentation(&shared, &document)?);
    bindings.push(bind_scroll(&shared, &window)?);
    bindings.push(bind_reveal_observer(&shared, &document)?);
    bindings.extend(bind_controls(&shared, &document)?);

    if let Some(root) = document.document_element() {
        root.class_list().add_1(classes::HYDRATED)?;
    }

    // A reload can restore a mid-page scroll position; sync the nav chrome to it.
    shared.dispatch(PageEvent::Scrolled {
        offset: window.scroll_y().unwrap_or(0.0),
    });

    tracing::debug!(bindings = bindings.len(), "page hydrated");
    Ok(PageHandle { shared, bindings })
}

/// Routes panics and `tracing` events to the browser console. Safe to call
/// more than once; only the first call installs anything.
fn install_console_diagnostics() {
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_ok() {
        tracing::debug!("console tracing installed");
    }
}

/// Adds an event listener and returns the guard that removes it.
fn listen(
    target: &EventTarget,
    event_type: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Subscription, JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;

    let target = target.clone();
    Ok(Subscription::new(move || {
        let _ = target
            .remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}

fn bind_scroll(shared: &Rc<Shared>, window: &Window) -> Result<Subscription, JsValue> {
    let shared = shared.clone();
    let source = window.clone();
    listen(window, "scroll", move |_| {
        let offset = source.scroll_y().unwrap_or(0.0);
        shared.dispatch(PageEvent::Scrolled { offset });
    })
}

fn bind_reveal_observer(shared: &Rc<Shared>, document: &Document) -> Result<Subscription, JsValue> {
    let (options, targets): (_, Vec<&'static str>) = {
        let page = shared.page.borrow();
        let visibility = page.visibility();
        (visibility.options(), visibility.observed_sections().collect())
    };

    let handler = shared.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let section_id = entry.target().id();
                handler.dispatch(PageEvent::Intersection(IntersectionEvent {
                    section_id: &section_id,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                }));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    for id in targets {
        match document.get_element_by_id(id) {
            Some(element) => observer.observe(&element),
            None => tracing::debug!(section = id, "section not in document; not observed"),
        }
    }

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

fn bind_controls(shared: &Rc<Shared>, document: &Document) -> Result<Vec<Subscription>, JsValue> {
    let mut bindings = Vec::new();

    if let Some(button) = document.get_element_by_id(MENU_TOGGLE_ID) {
        let shared = shared.clone();
        bindings.push(listen(&button, "click", move |_| {
            shared.dispatch(PageEvent::MenuToggled);
        })?);
    }

    for element in nav_targets(document, &format!("[{NAV_TARGET_ATTR}]"))? {
        let Some(target) = element.get_attribute(NAV_TARGET_ATTR) else {
            continue;
        };
        let shared = shared.clone();
        bindings.push(listen(&element, "click", move |event: Event| {
            event.prevent_default();
            shared.dispatch(PageEvent::NavigateRequested {
                section_id: &target,
            });
        })?);
    }

    Ok(bindings)
}

/// Subscribes the DOM class toggles to the controller's published state.
fn bind_presentation(shared: &Rc<Shared>, document: &Document) -> Result<Vec<Subscription>, JsValue> {
    let page = shared.page.borrow();
    let mut bindings = Vec::new();

    if let Some(nav) = document.get_element_by_id(NAV_ID) {
        bindings.push(page.scroll().subscribe(move |state| {
            let _ = nav
                .class_list()
                .toggle_with_force(classes::NAV_SOLID, state.scrolled_past_threshold);
        }));
    }

    let reveal_document = document.clone();
    bindings.push(page.visibility().subscribe(move |id| {
        if let Some(section) = reveal_document.get_element_by_id(id) {
            let _ = section.class_list().add_1(classes::REVEALED);
        }
    }));

    let menu = document.get_element_by_id(MENU_ID);
    let toggle = document.get_element_by_id(MENU_TOGGLE_ID);
    let links = nav_targets(document, &format!(".{}[{NAV_TARGET_ATTR}]", classes::NAV_LINK))?;
    bindings.push(page.navigation().subscribe(move |state| {
        if let Some(menu) = &menu {
            let _ = menu
                .class_list()
                .toggle_with_force(classes::MENU_OPEN, state.menu.open);
        }
        if let Some(toggle) = &toggle {
            toggle.set_text_content(Some(menu_icon(state.menu.open)));
            let _ = toggle.set_attribute("aria-expanded", if state.menu.open { "true" } else { "false" });
        }
        for link in &links {
            let active = link.get_attribute(NAV_TARGET_ATTR).as_deref() == Some(state.active_section);
            let _ = link
                .class_list()
                .toggle_with_force(classes::NAV_LINK_ACTIVE, active);
        }
    }));

    Ok(bindings)
}

fn nav_targets(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_fixture() -> Document {
        let window = web_sys::window().unwrap();
        window.scroll_to_with_x_and_y(0.0, 0.0);
        let document = window.document().unwrap();
        let body = document.body().unwrap();
        body.set_inner_html(
            r#"<nav id="site-nav" class="site-nav">
                 <a class="nav-link" href="#projects" data-nav-target="projects">Projects</a>
                 <button id="menu-toggle"></button>
                 <div id="mobile-menu" class="mobile-menu"></div>
               </nav>
               <section id="about" class="reveal" style="height: 400px"></section>
               <section id="projects" class="reveal" style="height: 400px"></section>
               <div style="height: 5000px"></div>"#,
        );
        document
    }

    fn scroll_window_to(y: f64) {
        let window = web_sys::window().unwrap();
        window.scroll_to_with_x_and_y(0.0, y);
        window
            .dispatch_event(&Event::new("scroll").unwrap())
            .unwrap();
    }

    async fn next_frame() {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    fn click(document: &Document, selector: &str) {
        let element: HtmlElement = document
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        element.click();
    }

    #[wasm_bindgen_test]
    fn test_menu_toggle_and_navigate() {
        let document = mount_fixture();
        let handle = hydrate().unwrap();

        click(&document, "#menu-toggle");
        assert!(handle.menu_open());
        let menu = document.get_element_by_id(MENU_ID).unwrap();
        assert!(menu.class_list().contains(classes::MENU_OPEN));

        click(&document, "[data-nav-target=projects]");
        assert!(!handle.menu_open());
        assert_eq!(handle.active_section(), "projects");
        assert!(!menu.class_list().contains(classes::MENU_OPEN));
    }

    #[wasm_bindgen_test]
    fn test_dispose_releases_listeners() {
        let document = mount_fixture();
        let handle = hydrate().unwrap();
        handle.dispose();

        click(&document, "#menu-toggle");
        let menu = document.get_element_by_id(MENU_ID).unwrap();
        assert!(!menu.class_list().contains(classes::MENU_OPEN));
    }

    #[wasm_bindgen_test]
    fn test_scroll_listener_released_on_dispose() {
        let document = mount_fixture();
        let nav = document.get_element_by_id(NAV_ID).unwrap();
        let handle = hydrate().unwrap();

        scroll_window_to(200.0);
        assert!(nav.class_list().contains(classes::NAV_SOLID));

        handle.dispose();
        scroll_window_to(0.0);
        assert!(nav.class_list().contains(classes::NAV_SOLID));
    }

    #[wasm_bindgen_test]
    async fn test_visible_section_is_revealed() {
        let document = mount_fixture();
        let about = document.get_element_by_id("about").unwrap();
        let handle = hydrate().unwrap();

        // Observer callbacks land after a rendering step; give them a few frames.
        for _ in 0..10 {
            if about.class_list().contains(classes::REVEALED) {
                break;
            }
            next_frame().await;
        }

        assert!(about.class_list().contains(classes::REVEALED));
        assert!(handle.revealed_sections().contains(&JsValue::from_str("about")));
        handle.dispose();
    }

    #[wasm_bindgen_test]
    fn test_console_diagnostics_install_once() {
        install_console_diagnostics();
        install_console_diagnostics();
        assert!(tracing::dispatcher::has_been_set());
    }
}
