//! Runs [`Timeline`]s against real elements.
//!
//! A [`Scene`] maps [`TargetId`]s to elements; an [`Animation`] owns a scene, a
//! timeline and a frame loop that is only running while the timeline is playing.
//! Everything is torn down with the owning component.
//!
//! Animations never write an element's style directly from their own timeline: each
//! one is a layer in the shared [`StyleBook`], and the element gets the composition of
//! all layers touching it.

use leptos::prelude::*;
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::motion::{
    self, Action, LayerId, LayerStack, Props, ScrollTrigger, TargetId, Timeline, TimelineEvent,
    ToggleActions, TriggerBand,
};

use super::smooth_scroll::{use_scroll, viewport_height};

/// Elements animated by one timeline, indexed by [`TargetId`].
#[derive(Default)]
pub struct Scene {
    elements: Vec<HtmlElement>,
}

impl Scene {
    pub fn add(&mut self, el: impl Into<HtmlElement>) -> TargetId {
        self.elements.push(el.into());
        TargetId(self.elements.len() - 1)
    }

    pub fn add_all(&mut self, els: Vec<HtmlElement>) -> Vec<TargetId> {
        els.into_iter().map(|el| self.add(el)).collect()
    }

    fn render(&self, timeline: &Timeline, book: StyleBook, layer: LayerId) {
        book.0.try_update_value(|stack| {
            for (id, props) in timeline.styles() {
                if let Some(el) = self.elements.get(id.0) {
                    let shown = stack.set(el.clone(), layer, props);
                    apply_style(el, &shown);
                }
            }
        });
    }
}

/// Per-element style layers shared by every animation on the page.
#[derive(Clone, Copy)]
pub struct StyleBook(StoredValue<LayerStack<HtmlElement>, LocalStorage>);

pub fn provide_style_book() {
    provide_context(StyleBook(StoredValue::new_local(LayerStack::new())));
}

fn use_style_book() -> StyleBook {
    use_context::<StyleBook>().unwrap_or_else(|| {
        log::debug!("no style book provided, animations will not layer");
        StyleBook(StoredValue::new_local(LayerStack::new()))
    })
}

pub fn apply_style(el: &HtmlElement, props: &Props) {
    let style = el.style();
    for (name, value) in props.css() {
        let _ = style.set_property(name, &value);
    }
}

/// Descendants of `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Direct element children of `root`.
pub fn children_of(root: &Element) -> Vec<HtmlElement> {
    let children = root.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

struct Player {
    scene: Scene,
    timeline: Timeline,
}

impl Player {
    fn render(&self, book: StyleBook, layer: LayerId) {
        self.scene.render(&self.timeline, book, layer);
    }
}

#[derive(Clone, Copy)]
pub struct Animation {
    player: StoredValue<Option<Player>, LocalStorage>,
    resume: StoredValue<Option<Box<dyn Fn()>>, LocalStorage>,
    book: StyleBook,
    layer: LayerId,
}

/// An animation slot driven by the frame loop. Nothing plays until a timeline is
/// installed. `on_event` fires when the timeline reaches either end.
pub fn use_animation(on_event: impl Fn(TimelineEvent) + 'static) -> Animation {
    let player = StoredValue::new_local(None::<Player>);
    let pause = StoredValue::new_local(None::<Box<dyn Fn()>>);
    let resume = StoredValue::new_local(None::<Box<dyn Fn()>>);
    let book = use_style_book();
    let layer = LayerId::next();

    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = motion::settings().frame_delta(args.delta);
            let step = player
                .try_update_value(|p| {
                    p.as_mut().map(|p| {
                        let event = p.timeline.advance(dt);
                        p.render(book, layer);
                        (event, p.timeline.is_active())
                    })
                })
                .flatten();
            let (event, active) = step.unwrap_or((None, false));
            if !active {
                pause.with_value(|f| f.as_ref().map(|f| f()));
            }
            if let Some(event) = event {
                on_event(event);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    let (stop, start): (Box<dyn Fn()>, Box<dyn Fn()>) = (Box::new(raf.pause), Box::new(raf.resume));
    pause.set_value(Some(stop));
    resume.set_value(Some(start));

    on_cleanup(move || {
        player.try_update_value(|p| {
            if let Some(p) = p.as_mut() {
                p.timeline.kill();
            }
        });
        book.0.try_update_value(|stack| stack.remove(layer));
    });

    Animation {
        player,
        resume,
        book,
        layer,
    }
}

impl Animation {
    /// Takes ownership of the scene and timeline and renders the timeline's start.
    pub fn install(&self, scene: Scene, timeline: Timeline) {
        let player = Player { scene, timeline };
        player.render(self.book, self.layer);
        self.player.set_value(Some(player));
    }

    pub fn is_installed(&self) -> bool {
        self.player.with_value(Option::is_some)
    }

    pub fn apply(&self, action: Action) {
        let active = self
            .player
            .try_update_value(|p| {
                p.as_mut().is_some_and(|p| {
                    p.timeline.apply(action);
                    p.render(self.book, self.layer);
                    p.timeline.is_active()
                })
            })
            .unwrap_or(false);
        if active {
            self.resume.with_value(|f| f.as_ref().map(|f| f()));
        }
    }

    pub fn play(&self) {
        self.apply(Action::Play);
    }

    pub fn reverse(&self) {
        self.apply(Action::Reverse);
    }

    pub fn restart(&self) {
        self.apply(Action::Restart);
    }
}

/// Builds a timeline as soon as `build` can find its elements, then plays it.
pub fn use_mount_animation(
    build: impl Fn(&mut Scene) -> Option<Timeline> + 'static,
    on_event: impl Fn(TimelineEvent) + 'static,
) -> Animation {
    let animation = use_animation(on_event);
    Effect::new(move |_| {
        if animation.is_installed() {
            return;
        }
        let mut scene = Scene::default();
        if let Some(timeline) = build(&mut scene) {
            animation.install(scene, timeline);
            animation.play();
        }
    });
    animation
}

struct Reveal {
    el: HtmlElement,
    trigger: ScrollTrigger,
    measured_at: Option<u64>,
}

impl Reveal {
    fn actions_for(&mut self, offset: f64, epoch: u64) -> Vec<Action> {
        if self.measured_at != Some(epoch) {
            let rect = self.el.get_bounding_client_rect();
            self.trigger.refresh(&motion::Layout {
                top: rect.top() + offset,
                height: rect.height(),
                viewport_height: viewport_height(),
            });
            self.measured_at = Some(epoch);
        }
        self.trigger.actions_for(offset)
    }
}

/// Scroll-triggered entrance. `build` returns the trigger element and the timeline;
/// returning `None` (nothing to animate) leaves the section alone.
///
/// Plays on the way down and reverses once scrolled back above the start.
pub fn use_scroll_reveal(
    band: TriggerBand,
    build: impl Fn(&mut Scene) -> Option<(HtmlElement, Timeline)> + 'static,
) -> Animation {
    let scroll = use_scroll();
    let animation = use_animation(|_| {});
    let reveal = StoredValue::new_local(None::<Reveal>);

    Effect::new(move |_| {
        let epoch = scroll.layout_epoch();
        let offset = scroll.offset();
        if !animation.is_installed() {
            let mut scene = Scene::default();
            let Some((el, timeline)) = build(&mut scene) else {
                return;
            };
            animation.install(scene, timeline);
            reveal.set_value(Some(Reveal {
                el,
                trigger: ScrollTrigger::new(band, ToggleActions::REVEAL),
                measured_at: None,
            }));
        }
        let actions = reveal
            .try_update_value(|r| r.as_mut().map(|r| r.actions_for(offset, epoch)))
            .flatten()
            .unwrap_or_default();
        for action in actions {
            animation.apply(action);
        }
    });
    animation
}

/// A short tween played on demand: hover, focus, a pulse after an action.
#[derive(Clone, Copy)]
pub struct Interaction {
    animation: Animation,
    target: StoredValue<Box<dyn Fn() -> Option<HtmlElement>>, LocalStorage>,
    build: fn(TargetId) -> Timeline,
}

pub fn use_interaction(
    target: impl Fn() -> Option<HtmlElement> + 'static,
    build: fn(TargetId) -> Timeline,
) -> Interaction {
    let target: Box<dyn Fn() -> Option<HtmlElement>> = Box::new(target);
    Interaction {
        animation: use_animation(|_| {}),
        target: StoredValue::new_local(target),
        build,
    }
}

impl Interaction {
    fn ready(&self) -> bool {
        if self.animation.is_installed() {
            return true;
        }
        let Some(el) = self.target.with_value(|t| t()) else {
            return false;
        };
        let mut scene = Scene::default();
        let id = scene.add(el);
        self.animation.install(scene, (self.build)(id));
        true
    }

    pub fn enter(&self) {
        if self.ready() {
            self.animation.play();
        }
    }

    pub fn leave(&self) {
        if self.ready() {
            self.animation.reverse();
        }
    }

    /// Plays the tween from the start.
    pub fn pulse(&self) {
        if self.ready() {
            self.animation.restart();
        }
    }
}
