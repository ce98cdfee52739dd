//! A small tweening engine: eased property tweens, timelines with GSAP-style relative
//! positioning, and scroll triggers with toggle actions.
//!
//! Nothing in here touches the DOM. Timelines produce [`Props`] per [`TargetId`] and
//! the app layer writes them to elements.

mod ease;
mod engine;
mod layers;
mod props;
mod timeline;
mod trigger;
mod tween;

pub use ease::Ease;
pub use engine::{register, settings, EngineSettings};
pub use layers::{LayerId, LayerStack};
pub use props::{Prop, Props};
pub use timeline::{Direction, PlayState, Position, TargetId, Timeline, TimelineEvent};
#[cfg(test)]
pub use trigger::ParseActionsError;
pub use trigger::{Action, Anchor, Edge, Layout, ScrollTrigger, Toggle, ToggleActions, TriggerBand};
pub use tween::{Repeat, Tween, TweenSpec};
