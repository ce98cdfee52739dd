use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_raf_fn_with_options,
    use_resize_observer, use_window, use_window_scroll, UseEventListenerOptions,
    UseRafFnCallbackArgs, UseRafFnOptions,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, FocusEvent, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, TouchEvent,
    WheelEvent,
};

use crate::content;
use crate::motion;
use crate::page::SectionId;
use crate::scroll::{ScrollKey, SectionLocator, VirtualScroll};

const SMOOTH_CLASS: &str = "has-scroll-smooth";
const LINE_HEIGHT: f64 = 16.0;

/// Shared scroll position of the page.
///
/// Before the smooth scroller is active (and wherever it can't be) the offset follows
/// the window's native scroll position.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    offset: RwSignal<f64>,
    layout: RwSignal<u64>,
    controller: StoredValue<Option<VirtualScroll>, LocalStorage>,
}

impl ScrollContext {
    fn new() -> Self {
        Self {
            offset: RwSignal::new(0.0),
            layout: RwSignal::new(0),
            controller: StoredValue::new_local(None),
        }
    }

    /// Current vertical offset (tracked).
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Changes every time measured positions may have gone stale (tracked).
    pub fn layout_epoch(&self) -> u64 {
        self.layout.get()
    }

    pub fn is_smooth(&self) -> bool {
        self.controller
            .try_with_value(|c| c.as_ref().is_some_and(|c| !c.is_destroyed()))
            .unwrap_or(false)
    }

    fn invalidate_layout(&self) {
        self.layout.update(|n| *n += 1);
    }

    /// Runs `f` on the live controller, if there is one.
    fn with_controller<T>(&self, f: impl FnOnce(&mut VirtualScroll) -> T) -> Option<T> {
        self.controller
            .try_update_value(|c| c.as_mut().filter(|c| !c.is_destroyed()).map(f))
            .flatten()
    }

    /// Brings a section into view. Unknown sections are ignored.
    pub fn jump_to(&self, section: SectionId) {
        self.jump_to_id(section.as_str());
    }

    pub fn jump_to_id(&self, id: &str) {
        let sections = DocumentSections {
            offset: self.offset.get_untracked(),
        };
        if let Some(found) = self.with_controller(|c| c.jump_to(&sections, id)) {
            if !found {
                log::debug!("ignoring jump to unknown section {id:?}");
            }
            return;
        }
        match sections.section_top(id) {
            Some(top) => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window().scroll_to_with_scroll_to_options(&options);
            }
            None => log::debug!("ignoring jump to unknown section {id:?}"),
        }
    }
}

struct DocumentSections {
    offset: f64,
}

impl SectionLocator for DocumentSections {
    fn section_top(&self, id: &str) -> Option<f64> {
        let el = document().get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + self.offset)
    }
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}

// keys typed into form fields belong to the field
fn is_editable(target: Option<web_sys::EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        || el
            .dyn_ref::<HtmlElement>()
            .is_some_and(HtmlElement::is_content_editable)
}

fn set_smooth_class(on: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let _ = if on {
        classes.add_1(SMOOTH_CLASS)
    } else {
        classes.remove_1(SMOOTH_CLASS)
    };
}

/// Provides the page's [`ScrollContext`] and hands scrolling over to a
/// [`VirtualScroll`] once `container` is mounted. If it never mounts, native scrolling
/// stays in charge.
pub fn provide_smooth_scroll(container: NodeRef<html::Div>) -> ScrollContext {
    let ctx = ScrollContext::new();
    provide_context(ctx);

    let (_, native_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = native_y.get();
        if !ctx.is_smooth() {
            ctx.offset.set(y);
        }
    });

    let render = move |y: f64| {
        if let Some(el) = container.get_untracked() {
            let _ = HtmlElement::style(&el)
                .set_property("transform", &format!("translate3d(0px, {}px, 0px)", -y));
        }
        ctx.offset.set(y);
    };

    let frames = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = motion::settings().frame_delta(args.delta);
            if let Some(y) = ctx.with_controller(|c| c.tick(dt)).flatten() {
                render(y);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    let remeasure = move || {
        let Some(el) = container.get_untracked() else {
            ctx.invalidate_layout();
            return;
        };
        let height = el.scroll_height() as f64;
        let changed = ctx.with_controller(|c| c.resize(height, viewport_height()));
        if changed != Some(false) {
            ctx.invalidate_layout();
        }
    };

    let resume = frames.resume;
    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        if ctx.is_smooth() {
            return;
        }
        set_smooth_class(true);
        window().scroll_to_with_x_and_y(0.0, 0.0);
        let mut controller = VirtualScroll::new(content::settings().smooth_scroll);
        controller.resize(el.scroll_height() as f64, viewport_height());
        ctx.controller.set_value(Some(controller));
        render(0.0);
        ctx.invalidate_layout();
        resume();
        log::debug!("smooth scrolling enabled");
        // deep links like /#projects
        let hash = window().location().hash().unwrap_or_default();
        if let Some(section) = SectionId::parse(hash.trim_start_matches('#')) {
            ctx.jump_to(section);
        }
    });

    let _ = use_resize_observer(container, move |_, _| remeasure());
    let _ = use_event_listener(use_window(), ev::resize, move |_| remeasure());

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |e: WheelEvent| {
            let delta = match e.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => e.delta_y() * LINE_HEIGHT,
                WheelEvent::DOM_DELTA_PAGE => e.delta_y() * viewport_height(),
                _ => e.delta_y(),
            };
            if ctx.with_controller(|c| c.wheel(delta)).is_some() {
                e.prevent_default();
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let last_touch = StoredValue::new_local(None::<f64>);
    let _ = use_event_listener(use_window(), ev::touchstart, move |e: TouchEvent| {
        let y = e.touches().get(0).map(|t| t.client_y() as f64);
        last_touch.set_value(y);
    });
    let _ = use_event_listener_with_options(
        use_window(),
        ev::touchmove,
        move |e: TouchEvent| {
            let Some(y) = e.touches().get(0).map(|t| t.client_y() as f64) else {
                return;
            };
            let Some(last) = last_touch.get_value() else {
                last_touch.set_value(Some(y));
                return;
            };
            last_touch.set_value(Some(y));
            if ctx.with_controller(|c| c.touch(last - y)).is_some() {
                e.prevent_default();
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(use_window(), ev::keydown, move |e: KeyboardEvent| {
        if e.default_prevented() || e.ctrl_key() || e.alt_key() || e.meta_key() {
            return;
        }
        if is_editable(e.target()) {
            return;
        }
        let Some(key) = ScrollKey::from_key(&e.key(), e.shift_key()) else {
            return;
        };
        if ctx.with_controller(|c| c.key(key)).is_some() {
            e.prevent_default();
        }
    });

    // Tabbing to an off-screen field scrolls the (hidden) native viewport instead of
    // the virtual one: fold that back into the controller.
    let _ = use_event_listener(use_window(), ev::focusin, move |e: FocusEvent| {
        let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let native_y = window().scroll_y().unwrap_or(0.0);
        let rect = el.get_bounding_client_rect();
        let top = rect.top() + ctx.offset.get_untracked() + native_y;
        let revealed = ctx.with_controller(|c| c.reveal(top, rect.height()));
        if revealed.is_some() && native_y != 0.0 {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    on_cleanup(move || {
        let was_smooth = ctx
            .controller
            .try_update_value(|c| {
                c.as_mut().is_some_and(|c| {
                    c.destroy();
                    true
                })
            })
            .unwrap_or(false);
        if was_smooth {
            set_smooth_class(false);
            log::debug!("smooth scrolling released");
        }
    });

    ctx
}
