//! Timelines and trigger bands for every animated part of the page.
//!
//! Builders take the [`TargetId`]s the caller assigned to its elements and return a
//! ready-to-play [`Timeline`]; they never look at the DOM.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::motion::{
    Anchor, Ease, Edge, Position, Props, Repeat, TargetId, Timeline, TriggerBand, TweenSpec,
};

const BACK: Ease = Ease::BackOut(1.7);

pub const ABOUT_SECTION_BAND: TriggerBand =
    TriggerBand::new(Anchor::new(Edge::Top, 80.0), Anchor::new(Edge::Bottom, 20.0));
pub const ABOUT_DETAIL_BAND: TriggerBand = TriggerBand::starting_at(Anchor::new(Edge::Top, 85.0));
pub const SKILLS_BAND: TriggerBand = TriggerBand::starting_at(Anchor::new(Edge::Top, 90.0));
pub const PROJECTS_BAND: TriggerBand =
    TriggerBand::new(Anchor::new(Edge::Top, 80.0), Anchor::new(Edge::Bottom, 20.0));
pub const CONTACT_BAND: TriggerBand =
    TriggerBand::new(Anchor::new(Edge::Top, 80.0), Anchor::new(Edge::Bottom, 20.0));
pub const FOOTER_BAND: TriggerBand = TriggerBand::starting_at(Anchor::new(Edge::Top, 90.0));

pub const PARTICLE_COUNT: u32 = 20;

fn hidden_blurred(y: f64) -> Props {
    Props::new().opacity(0.0).y(y).blur(10.0)
}

fn shown_sharp() -> Props {
    Props::new().opacity(1.0).y(0.0).blur(0.0)
}

/// Splash: text reveal, progress bar, glow pulse, fade out.
pub fn preloader(text: TargetId, bar: TargetId, root: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.set(bar, Props::new().width_percent(0.0))
        .from_to(
            text,
            Props::new().opacity(0.0).y(30.0).scale(0.8).blur(10.0),
            Props::new().opacity(1.0).y(0.0).scale(1.0).blur(0.0),
            TweenSpec::new(1.0).ease(Ease::Power2Out),
            Position::End,
        )
        .to(
            bar,
            Props::new().width_percent(100.0),
            TweenSpec::new(2.5).ease(Ease::Power2Out),
            Position::Overlap(0.5),
        )
        .to(
            text,
            Props::new().glow(1.0),
            TweenSpec::new(0.5)
                .ease(Ease::Power2InOut)
                .repeat(Repeat::Times(3))
                .yoyo(true),
            Position::Overlap(1.0),
        )
        .to(
            root,
            Props::new().opacity(0.0).scale(0.9),
            TweenSpec::new(1.0).ease(Ease::Power2InOut),
            Position::End,
        );
    tl
}

pub fn hero_intro(headline: TargetId, subtitle: TargetId, cta: TargetId, scene: TargetId) -> Timeline {
    let spec = |d| TweenSpec::new(d).ease(Ease::Power2Out);
    let mut tl = Timeline::with_delay(0.5);
    tl.set_each(&[headline, subtitle, cta, scene], hidden_blurred(50.0))
        .to(headline, shown_sharp(), spec(1.0), Position::End)
        .to(subtitle, shown_sharp(), spec(0.8), Position::Overlap(0.5))
        .to(cta, shown_sharp(), spec(0.8), Position::Overlap(0.3))
        .to(scene, shown_sharp(), spec(1.0), Position::Overlap(0.8));
    tl
}

/// Endless bobbing of the hero's background orbs.
pub fn floating_orbs(orbs: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    for (i, orb) in orbs.iter().enumerate() {
        let i = i as f64;
        tl.to(
            *orb,
            Props::new().y(-20.0),
            TweenSpec::new(3.0 + 0.5 * i)
                .delay(0.3 * i)
                .ease(Ease::Power1InOut)
                .repeat(Repeat::Forever)
                .yoyo(true),
            Position::At(0.0),
        );
    }
    tl
}

pub fn about_section(section: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to(
        section,
        Props::new().opacity(0.0).blur(10.0),
        Props::new().opacity(1.0).blur(0.0),
        TweenSpec::new(1.0),
        Position::End,
    );
    tl
}

pub fn about_portrait(image: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to(
        image,
        Props::new().x(-100.0).opacity(0.0).rotation(-5.0),
        Props::new().x(0.0).opacity(1.0).rotation(0.0),
        TweenSpec::new(1.0).ease(Ease::Power2Out),
        Position::End,
    );
    tl
}

pub fn about_content(children: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to_each(
        children,
        Props::new().x(100.0).opacity(0.0),
        Props::new().x(0.0).opacity(1.0),
        TweenSpec::new(0.8).stagger(0.2).ease(Ease::Power2Out),
        Position::End,
    );
    tl
}

pub fn skill_tiles(tiles: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to_each(
        tiles,
        Props::new().y(50.0).opacity(0.0).scale(0.8),
        Props::new().y(0.0).opacity(1.0).scale(1.0),
        TweenSpec::new(0.6).stagger(0.1).ease(BACK),
        Position::End,
    );
    tl
}

pub fn project_cards(cards: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to_each(
        cards,
        Props::new().opacity(0.0).y(100.0).scale(0.8),
        Props::new().opacity(1.0).y(0.0).scale(1.0),
        TweenSpec::new(0.8).stagger(0.2).ease(BACK),
        Position::End,
    );
    tl
}

/// Form and social row, then the inputs, then the submit button.
pub fn contact(blocks: &[TargetId], inputs: &[TargetId], button: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to_each(
        blocks,
        hidden_blurred(50.0),
        shown_sharp(),
        TweenSpec::new(1.0).stagger(0.2).ease(Ease::Power2Out),
        Position::End,
    )
    .from_to_each(
        inputs,
        Props::new().opacity(0.0).x(-30.0),
        Props::new().opacity(1.0).x(0.0),
        TweenSpec::new(0.5).stagger(0.1).ease(Ease::Power2Out),
        Position::Overlap(0.5),
    )
    .from_to(
        button,
        Props::new().opacity(0.0).scale(0.8),
        Props::new().opacity(1.0).scale(1.0),
        TweenSpec::new(0.5).ease(BACK),
        Position::Overlap(0.3),
    );
    tl
}

pub fn footer(footer: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to(
        footer,
        Props::new().opacity(0.0).y(60.0).blur(10.0),
        shown_sharp(),
        TweenSpec::new(1.0).ease(Ease::Power2Out),
        Position::End,
    );
    tl
}

/// Placement and motion of one footer particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Percent of the footer box.
    pub left: f64,
    pub top: f64,
    pub drift: f64,
    pub duration: f64,
}

/// Seeded by index so the server and the client scatter particles identically.
pub fn particle(index: u32) -> Particle {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(index));
    Particle {
        left: rng.gen_range(0.0..100.0),
        top: rng.gen_range(0.0..100.0),
        drift: rng.gen_range(-10.0..10.0),
        duration: rng.gen_range(4.0..6.0),
    }
}

pub fn particles(particles: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    for (i, p) in particles.iter().enumerate() {
        let Particle { drift, duration, .. } = particle(i as u32);
        tl.to(
            *p,
            Props::new().y(-30.0).x(drift),
            TweenSpec::new(duration)
                .delay(0.2 * i as f64)
                .ease(Ease::Power1InOut)
                .repeat(Repeat::Forever)
                .yoyo(true),
            Position::At(0.0),
        );
    }
    tl
}

pub fn nav_intro(nav: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to(
        nav,
        Props::new().y(-100.0).opacity(0.0),
        Props::new().y(0.0).opacity(1.0),
        TweenSpec::new(1.0).delay(0.5).ease(Ease::Power2Out),
        Position::End,
    );
    tl
}

/// Slide-in of the mobile menu. Played to open, reversed to close.
pub fn mobile_menu(panel: TargetId, items: &[TargetId]) -> Timeline {
    let mut tl = Timeline::new();
    tl.from_to(
        panel,
        Props::new().x_percent(100.0),
        Props::new().x_percent(0.0),
        TweenSpec::new(0.5).ease(Ease::Power2Out),
        Position::At(0.0),
    )
    .from_to_each(
        items,
        Props::new().x(50.0).opacity(0.0),
        Props::new().x(0.0).opacity(1.0),
        TweenSpec::new(0.3).stagger(0.1).delay(0.2),
        Position::At(0.0),
    );
    tl
}

/// One-shot bump on the submit button once delivery finishes.
pub fn submit_pulse(button: TargetId) -> Timeline {
    let mut tl = Timeline::new();
    tl.to(
        button,
        Props::new().scale(1.1),
        TweenSpec::new(0.2)
            .ease(Ease::Power2Out)
            .repeat(Repeat::Times(1))
            .yoyo(true),
        Position::End,
    );
    tl
}

fn lift(target: TargetId, to: Props) -> Timeline {
    let mut tl = Timeline::new();
    tl.to(
        target,
        to,
        TweenSpec::new(0.3).ease(Ease::Power2Out),
        Position::End,
    );
    tl
}

pub fn card_hover(card: TargetId) -> Timeline {
    lift(card, Props::new().y(-10.0).scale(1.02))
}

pub fn cta_hover(cta: TargetId) -> Timeline {
    lift(cta, Props::new().scale(1.05))
}

pub fn input_focus(input: TargetId) -> Timeline {
    lift(input, Props::new().scale(1.02))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{LayerId, LayerStack, Layout, Prop, ScrollTrigger, TimelineEvent, ToggleActions};

    fn ids(n: usize) -> Vec<TargetId> {
        (0..n).map(TargetId).collect()
    }

    fn finish(tl: &mut Timeline) -> Option<TimelineEvent> {
        let mut last = None;
        for _ in 0..100_000 {
            if let Some(e) = tl.advance(1.0 / 60.0) {
                last = Some(e);
            }
            if !tl.is_active() {
                break;
            }
        }
        last
    }

    #[test]
    fn test_preloader_sequence() {
        let (text, bar, root) = (TargetId(0), TargetId(1), TargetId(2));
        let mut tl = preloader(text, bar, root);
        let starts: Vec<f64> = tl.starts().into_iter().map(|s| s.1).collect();
        assert_eq!(starts.len(), 4);
        assert!((starts[1] - 0.5).abs() < 1e-9);
        assert!((starts[2] - 2.0).abs() < 1e-9);
        assert!((starts[3] - 4.0).abs() < 1e-9);
        assert!((tl.duration() - 5.0).abs() < 1e-9);

        assert_eq!(tl.style_of(bar).get(Prop::WidthPercent), Some(0.0));
        assert_eq!(tl.style_of(text).get(Prop::Opacity), Some(0.0));

        tl.play();
        assert_eq!(finish(&mut tl), Some(TimelineEvent::Completed));
        assert_eq!(tl.style_of(bar).get(Prop::WidthPercent), Some(100.0));
        // the glow ends where it started
        assert!(tl.style_of(text).value(Prop::Glow).abs() < 1e-9);
        assert_eq!(tl.style_of(root).get(Prop::Opacity), Some(0.0));
    }

    #[test]
    fn test_hero_offsets() {
        let t = ids(4);
        let tl = hero_intro(t[0], t[1], t[2], t[3]);
        let starts: Vec<f64> = tl.starts().into_iter().map(|s| s.1).collect();
        let expected = [0.5, 1.0, 1.5, 1.5];
        for (s, e) in starts.iter().zip(expected) {
            assert!((s - e).abs() < 1e-9, "{s} != {e}");
        }
    }

    #[test]
    fn test_contact_offsets() {
        let t = ids(6);
        let tl = contact(&t[..2], &t[2..5], t[5]);
        let starts: Vec<f64> = tl.starts().into_iter().map(|s| s.1).collect();
        let expected = [0.0, 0.2, 0.7, 0.8, 0.9, 1.1];
        assert_eq!(starts.len(), expected.len());
        for (s, e) in starts.iter().zip(expected) {
            assert!((s - e).abs() < 1e-9, "{s} != {e}");
        }
        assert!((tl.duration() - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_contact_settles_visible() {
        let t = ids(6);
        let mut tl = contact(&t[..2], &t[2..5], t[5]);
        assert_eq!(tl.style_of(t[0]).get(Prop::Blur), Some(10.0));
        assert_eq!(tl.style_of(t[3]).get(Prop::X), Some(-30.0));
        assert_eq!(tl.style_of(t[5]).get(Prop::Scale), Some(0.8));
        tl.play();
        assert_eq!(finish(&mut tl), Some(TimelineEvent::Completed));
        for id in &t {
            assert_eq!(tl.style_of(*id).get(Prop::Opacity), Some(1.0));
        }
        assert_eq!(tl.style_of(t[0]).get(Prop::Blur), Some(0.0));
        assert_eq!(tl.style_of(t[5]).get(Prop::Scale), Some(1.0));
    }

    #[test]
    fn test_about_timelines() {
        let mut section = about_section(TargetId(0));
        assert_eq!(section.style_of(TargetId(0)).get(Prop::Opacity), Some(0.0));
        section.play();
        finish(&mut section);
        assert_eq!(section.style_of(TargetId(0)).get(Prop::Blur), Some(0.0));

        let mut portrait = about_portrait(TargetId(0));
        assert_eq!(portrait.style_of(TargetId(0)).get(Prop::Rotation), Some(-5.0));
        portrait.play();
        finish(&mut portrait);
        assert_eq!(portrait.style_of(TargetId(0)).get(Prop::Rotation), Some(0.0));
        assert_eq!(portrait.style_of(TargetId(0)).get(Prop::X), Some(0.0));

        let t = ids(3);
        let content = about_content(&t);
        let starts: Vec<f64> = content.starts().into_iter().map(|s| s.1).collect();
        for (s, e) in starts.iter().zip([0.0, 0.2, 0.4]) {
            assert!((s - e).abs() < 1e-9, "{s} != {e}");
        }
        assert!((content.duration() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_footer_and_nav_intro() {
        let mut f = footer(TargetId(0));
        assert_eq!(f.style_of(TargetId(0)).get(Prop::Y), Some(60.0));
        f.play();
        finish(&mut f);
        assert_eq!(f.style_of(TargetId(0)), shown_sharp());

        let mut nav = nav_intro(TargetId(0));
        assert!((nav.starts()[0].1 - 0.5).abs() < 1e-9);
        assert!((nav.duration() - 1.5).abs() < 1e-9);
        assert_eq!(nav.style_of(TargetId(0)).get(Prop::Y), Some(-100.0));
        nav.play();
        assert_eq!(finish(&mut nav), Some(TimelineEvent::Completed));
        assert_eq!(nav.style_of(TargetId(0)).get(Prop::Y), Some(0.0));
        assert_eq!(nav.style_of(TargetId(0)).get(Prop::Opacity), Some(1.0));
    }

    #[test]
    fn test_orbs_never_end() {
        let t = ids(4);
        let tl = floating_orbs(&t);
        assert!(tl.duration().is_infinite());
        let starts: Vec<f64> = tl.starts().into_iter().map(|s| s.1).collect();
        assert!((starts[3] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_lists_are_noops() {
        assert!(project_cards(&[]).is_empty());
        assert!(skill_tiles(&[]).is_empty());
        assert!(particles(&[]).is_empty());
    }

    #[test]
    fn test_menu_open_close_restores() {
        let t = ids(5);
        let mut tl = mobile_menu(t[0], &t[1..]);
        let closed = tl.styles();
        assert_eq!(tl.style_of(t[0]).get(Prop::XPercent), Some(100.0));

        tl.play();
        finish(&mut tl);
        assert_eq!(tl.style_of(t[0]).get(Prop::XPercent), Some(0.0));
        assert_eq!(tl.style_of(t[4]).get(Prop::Opacity), Some(1.0));

        tl.reverse();
        assert_eq!(finish(&mut tl), Some(TimelineEvent::ReverseCompleted));
        assert_eq!(tl.styles(), closed);
    }

    #[test]
    fn test_menu_closed_mid_opening() {
        let t = ids(3);
        let mut tl = mobile_menu(t[0], &t[1..]);
        let closed = tl.styles();
        tl.play();
        tl.advance(0.25);
        tl.reverse();
        finish(&mut tl);
        assert_eq!(tl.styles(), closed);
    }

    #[test]
    fn test_cards_reverse_when_scrolled_back() {
        let cards = ids(6);
        let mut tl = project_cards(&cards);
        let hidden = tl.styles();
        let mut trigger = ScrollTrigger::new(PROJECTS_BAND, ToggleActions::REVEAL);
        trigger.refresh(&Layout {
            top: 3000.0,
            height: 1500.0,
            viewport_height: 1000.0,
        });

        for a in trigger.actions_for(2300.0) {
            tl.apply(a);
        }
        finish(&mut tl);
        for card in &cards {
            assert_eq!(tl.style_of(*card).value(Prop::Y), 0.0);
        }

        for a in trigger.actions_for(500.0) {
            tl.apply(a);
        }
        finish(&mut tl);
        assert_eq!(tl.styles(), hidden);
    }

    #[test]
    fn test_submit_pulse_settles() {
        let mut tl = submit_pulse(TargetId(0));
        assert!((tl.duration() - 0.4).abs() < 1e-9);
        tl.play();
        finish(&mut tl);
        assert_eq!(tl.style_of(TargetId(0)).value(Prop::Scale), 1.0);
    }

    #[test]
    fn test_hover_reverses_to_rest() {
        let mut tl = card_hover(TargetId(0));
        tl.play();
        finish(&mut tl);
        assert_eq!(tl.style_of(TargetId(0)).value(Prop::Y), -10.0);
        tl.reverse();
        finish(&mut tl);
        assert_eq!(tl.style_of(TargetId(0)).value(Prop::Scale), 1.0);
        assert_eq!(tl.style_of(TargetId(0)).value(Prop::Y), 0.0);
    }

    #[test]
    fn test_hover_layers_on_entrance() {
        let t = ids(4);
        let cta = t[2];
        let mut intro = hero_intro(t[0], t[1], cta, t[3]);
        let mut hover = cta_hover(TargetId(0));
        let mut stack = LayerStack::new();
        let (intro_layer, hover_layer) = (LayerId::next(), LayerId::next());

        intro.play();
        intro.advance(1.6);
        stack.set("cta", intro_layer, intro.style_of(cta));
        hover.play();
        hover.advance(0.1);
        let hovered = stack.set("cta", hover_layer, hover.style_of(TargetId(0)));
        assert!(hovered.value(Prop::Y) > 0.0);

        intro.advance(1.0 / 60.0);
        let next = stack.set("cta", intro_layer, intro.style_of(cta));
        assert_eq!(next.get(Prop::Scale), hovered.get(Prop::Scale));
        assert!(next.value(Prop::Scale) > 1.0);
        assert!(next.value(Prop::Y) > 0.0);
        assert!(next.value(Prop::Y) < hovered.value(Prop::Y));

        let transform = next
            .css()
            .into_iter()
            .find(|(name, _)| *name == "transform")
            .map(|(_, v)| v)
            .unwrap_or_default();
        assert!(transform.starts_with("translate3d("), "{transform}");
        assert!(transform.contains("scale("), "{transform}");
    }

    #[test]
    fn test_particles_stay_in_box() {
        for i in 0..PARTICLE_COUNT {
            let p = particle(i);
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((-10.0..10.0).contains(&p.drift));
            assert!((4.0..6.0).contains(&p.duration));
        }
        assert_eq!(particle(7), particle(7));
        assert_ne!(particle(7), particle(8));
    }

    #[test]
    fn test_particle_drift_matches_placement() {
        let t = ids(3);
        let mut tl = particles(&t);
        assert!(tl.duration().is_infinite());
        tl.play();
        // first particle has no delay; at its first peak it sits at its own drift
        let first = particle(0);
        tl.advance(first.duration);
        let x = tl.style_of(t[0]).value(Prop::X);
        assert!((x - first.drift).abs() < 1e-6, "{x} != {}", first.drift);
    }
}
