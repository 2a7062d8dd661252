use crate::config::{MenuConfig, Selectors};
use crate::core::menu::{LayoutMode, MenuMachine, MenuTrigger, ResponsiveLayout};
use crate::dom::{self, Listener};
use crate::site::Effect;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The markup the menu controller drives.
enum Surface {
    /// Dedicated full-screen menu with its own toggle and close buttons.
    Overlay(web::HtmlElement),
    /// Plain navbar that grows a generated hamburger at the breakpoint.
    Navbar(web::HtmlElement),
}

impl Surface {
    fn element(&self) -> &web::HtmlElement {
        match self {
            Surface::Overlay(el) | Surface::Navbar(el) => el,
        }
    }
}

struct Hamburger {
    button: web::Element,
    created: bool,
    _click: Listener,
}

struct MenuShared {
    document: web::Document,
    surface: Surface,
    config: MenuConfig,
    machine: MenuMachine,
    layout: ResponsiveLayout,
    hamburger: Option<Hamburger>,
}

impl MenuShared {
    fn open_class(&self) -> &str {
        match self.surface {
            Surface::Overlay(_) => &self.config.overlay_open_class,
            Surface::Navbar(_) => &self.config.navbar_open_class,
        }
    }

    fn dispatch(&mut self, trigger: MenuTrigger) {
        let Some(state) = self.machine.handle(trigger) else {
            return;
        };
        let classes = self.surface.element().class_list();
        if state.locks_scroll() {
            _ = classes.add_1(self.open_class());
        } else {
            _ = classes.remove_1(self.open_class());
        }
        dom::set_scroll_lock(&self.document, state.locks_scroll());
        log::debug!("[menu] {:?} -> {:?}", trigger, state);
    }
}

fn build_hamburger(
    document: &web::Document,
    navbar: &web::HtmlElement,
    config: &MenuConfig,
    shared: Weak<RefCell<MenuShared>>,
) -> Option<Hamburger> {
    let existing = document
        .query_selector(&format!(".{}", config.toggle_class))
        .ok()
        .flatten();
    let created = existing.is_none();
    let button = match existing {
        Some(el) => el,
        None => {
            let el = document.create_element("button").ok()?;
            el.set_class_name(&config.toggle_class);
            el.set_text_content(Some(&config.toggle_text));
            _ = el.set_attribute("aria-label", &config.toggle_label);
            navbar.append_child(&el).ok()?;
            el
        }
    };
    let click = Listener::new(button.as_ref(), "click", move |_ev| {
        if let Some(shared) = shared.upgrade() {
            shared.borrow_mut().dispatch(MenuTrigger::Toggle);
        }
    });
    Some(Hamburger {
        button,
        created,
        _click: click,
    })
}

/// Re-measure the viewport and bring the markup in line with the layout.
/// Safe to call any number of times.
fn apply_layout(shared: &Rc<RefCell<MenuShared>>, width: f64) {
    let mut guard = shared.borrow_mut();
    let menu = &mut *guard;
    if menu.layout.measure(width) == Some(LayoutMode::Wide) {
        menu.dispatch(MenuTrigger::LeftCompact);
    }
    let Surface::Navbar(navbar) = &menu.surface else {
        return;
    };
    let classes = navbar.class_list();
    match menu.layout.mode() {
        LayoutMode::Compact => {
            _ = classes.add_1(&menu.config.compact_class);
            if menu.hamburger.is_none() {
                menu.hamburger = build_hamburger(
                    &menu.document,
                    navbar,
                    &menu.config,
                    Rc::downgrade(shared),
                );
            }
        }
        LayoutMode::Wide => {
            _ = classes.remove_2(&menu.config.compact_class, &menu.config.navbar_open_class);
            if let Some(h) = menu.hamburger.take() {
                h.button.remove();
            }
        }
    }
}

fn trigger_on(
    target: &web::EventTarget,
    event: &'static str,
    shared: &Rc<RefCell<MenuShared>>,
    trigger: MenuTrigger,
) -> Listener {
    let shared = shared.clone();
    Listener::new(target, event, move |_ev| {
        shared.borrow_mut().dispatch(trigger);
    })
}

/// Mobile navigation: one open/closed state machine over whichever menu
/// markup the page provides.
pub struct MobileMenu {
    shared: Rc<RefCell<MenuShared>>,
    listeners: Vec<Listener>,
}

impl MobileMenu {
    pub fn start(
        document: &web::Document,
        selectors: &Selectors,
        config: &MenuConfig,
    ) -> Option<Self> {
        let surface = if let Some(menu) = dom::query_one(document, &selectors.overlay_menu) {
            Surface::Overlay(menu)
        } else if let Some(navbar) = dom::query_one(document, &selectors.navbar) {
            Surface::Navbar(navbar)
        } else {
            log::debug!("[menu] no navigation markup found");
            return None;
        };
        let kind = match surface {
            Surface::Overlay(_) => "overlay",
            Surface::Navbar(_) => "navbar",
        };

        let shared = Rc::new(RefCell::new(MenuShared {
            document: document.clone(),
            surface,
            config: config.clone(),
            machine: MenuMachine::new(),
            layout: ResponsiveLayout::new(config.breakpoint_px),
            hamburger: None,
        }));
        let mut listeners = Vec::new();

        let overlay = match &shared.borrow().surface {
            Surface::Overlay(menu) => Some(menu.clone()),
            Surface::Navbar(_) => None,
        };
        let link_selector = match overlay {
            Some(menu) => {
                if let Some(toggle) = dom::query_one(document, &selectors.overlay_toggle) {
                    listeners.push(trigger_on(
                        toggle.as_ref(),
                        "click",
                        &shared,
                        MenuTrigger::Toggle,
                    ));
                }
                if let Some(close) = dom::query_one(document, &selectors.overlay_close) {
                    listeners.push(trigger_on(
                        close.as_ref(),
                        "click",
                        &shared,
                        MenuTrigger::Close,
                    ));
                }
                let backdrop_shared = shared.clone();
                let menu_target: web::EventTarget = menu.clone().unchecked_into();
                listeners.push(Listener::new(menu.as_ref(), "click", move |ev| {
                    if ev.target().as_ref() == Some(&menu_target) {
                        backdrop_shared.borrow_mut().dispatch(MenuTrigger::Backdrop);
                    }
                }));
                &selectors.overlay_link
            }
            None => &selectors.navbar_link,
        };
        for link in dom::query_all(document, link_selector) {
            listeners.push(trigger_on(
                link.as_ref(),
                "click",
                &shared,
                MenuTrigger::LinkClick,
            ));
        }

        let escape_shared = shared.clone();
        listeners.push(Listener::new(document.as_ref(), "keydown", move |ev| {
            let is_escape = ev
                .dyn_ref::<web::KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if is_escape {
                escape_shared.borrow_mut().dispatch(MenuTrigger::Escape);
            }
        }));

        if let Some(window) = web::window() {
            let resize_shared = shared.clone();
            listeners.push(Listener::new(window.as_ref(), "resize", move |_ev| {
                if let Some(width) = dom::viewport_width() {
                    apply_layout(&resize_shared, width);
                }
            }));
        }
        if let Some(width) = dom::viewport_width() {
            apply_layout(&shared, width);
        }

        log::info!(
            "[menu] surface={} breakpoint={}px listeners={}",
            kind,
            config.breakpoint_px,
            listeners.len()
        );
        Some(Self { shared, listeners })
    }
}

impl Effect for MobileMenu {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn stop(&mut self) {
        self.listeners.clear();
        let mut menu = self.shared.borrow_mut();
        menu.dispatch(MenuTrigger::Close);
        if let Some(h) = menu.hamburger.take() {
            if h.created {
                h.button.remove();
            }
        }
    }
}
