use leptos::{html, prelude::*};

use crate::content;
use crate::page::SectionId;
use crate::scenes;

use super::animate::{select_all, use_interaction, use_mount_animation};
use super::smooth_scroll::use_scroll;

const ORBS: [&str; 4] = [
    "top-20 left-10 w-4 h-4 bg-primary glow-primary opacity-60",
    "top-40 right-20 w-6 h-6 bg-accent glow-accent opacity-40",
    "bottom-32 left-20 w-3 h-3 bg-primary glow-primary opacity-50",
    "bottom-20 right-10 w-5 h-5 bg-accent glow-accent opacity-30",
];

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let headline = NodeRef::<html::H1>::new();
    let subtitle = NodeRef::<html::P>::new();
    let cta = NodeRef::<html::Button>::new();
    let backdrop = NodeRef::<html::Div>::new();
    let scroll = use_scroll();

    use_mount_animation(
        move |scene| {
            let ids = (
                scene.add(headline.get()?),
                scene.add(subtitle.get()?),
                scene.add(cta.get()?),
                scene.add(backdrop.get()?),
            );
            Some(scenes::hero_intro(ids.0, ids.1, ids.2, ids.3))
        },
        |_| {},
    );

    use_mount_animation(
        move |scene| {
            let orbs = select_all(&*section.get()?, ".glow-orb");
            if orbs.is_empty() {
                return None;
            }
            Some(scenes::floating_orbs(&scene.add_all(orbs)))
        },
        |_| {},
    );

    let hover = use_interaction(move || cta.get().map(Into::into), scenes::cta_hover);
    let profile = content::profile();

    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=section
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div node_ref=backdrop class="absolute inset-0 opacity-60">
                <iframe
                    src=profile.hero_scene.clone()
                    title="3D scene"
                    width="100%"
                    height="100%"
                    class="pointer-events-none border-0"
                ></iframe>
            </div>

            {ORBS
                .iter()
                .map(|class| {
                    view! { <div class=format!("glow-orb absolute rounded-full {class}")></div> }
                })
                .collect_view()}

            <div class="container mx-auto px-6 text-center relative z-10">
                <h1 node_ref=headline class="text-5xl md:text-7xl lg:text-8xl font-bold mb-6 leading-tight">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-primary via-accent to-primary bg-clip-text text-transparent glow-text">
                        {profile.name.clone()}
                    </span>
                    <br />
                    <span class="text-3xl md:text-5xl lg:text-6xl text-muted-foreground font-light">
                        {profile.role.clone()}
                    </span>
                </h1>
                <p
                    node_ref=subtitle
                    class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-3xl mx-auto leading-relaxed"
                >
                    {profile.tagline.clone()}
                </p>
                <button
                    node_ref=cta
                    class="glass-strong px-8 py-4 rounded-full text-lg font-semibold bg-gradient-to-r from-primary to-accent text-white hover:glow-primary transition-colors duration-300 inline-flex items-center gap-3"
                    on:mouseenter=move |_| hover.enter()
                    on:mouseleave=move |_| hover.leave()
                    on:click=move |_| scroll.jump_to(SectionId::Contact)
                >
                    "Hire Me"
                    <i class="ph-light ph-arrow-right text-xl"></i>
                </button>
            </div>
        </section>
    }
}
