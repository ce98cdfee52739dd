use leptos::{html, prelude::*};

use crate::content;
use crate::page::SectionId;
use crate::scenes::{self, PARTICLE_COUNT};

use super::animate::{select_all, use_mount_animation, use_scroll_reveal};
use super::smooth_scroll::use_scroll;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let footer = NodeRef::<html::Footer>::new();
    let scroll = use_scroll();

    use_scroll_reveal(scenes::FOOTER_BAND, move |scene| {
        let el = footer.get()?;
        let id = scene.add(el.clone());
        Some((el.into(), scenes::footer(id)))
    });

    use_mount_animation(
        move |scene| {
            let dots = select_all(&*footer.get()?, ".particle");
            if dots.is_empty() {
                return None;
            }
            Some(scenes::particles(&scene.add_all(dots)))
        },
        |_| {},
    );

    let profile = content::profile();

    view! {
        <footer node_ref=footer class="relative py-16 mt-20 overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                {(0..PARTICLE_COUNT)
                    .map(|i| {
                        let scenes::Particle { left, top, .. } = scenes::particle(i);
                        view! {
                            <div
                                class="particle absolute w-1 h-1 bg-primary/40 rounded-full"
                                style=format!("left: {left:.2}%; top: {top:.2}%;")
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="glass-strong rounded-2xl p-8 text-center">
                    <div class="text-3xl font-bold mb-4 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        {profile.name.clone()}
                    </div>
                    <div class="flex flex-wrap justify-center gap-8 mb-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(move |section| {
                                view! {
                                    <button
                                        class="text-muted-foreground hover:text-primary transition-colors duration-300"
                                        on:click=move |_| scroll.jump_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="border-t border-white/10 pt-8">
                        <p class="text-muted-foreground flex items-center justify-center gap-2">
                            "Made with "
                            <i class="ph-light ph-heart text-red-500"></i>
                            " by "
                            {profile.name.clone()}
                        </p>
                        <p class="text-sm text-muted-foreground/60 mt-2">
                            {format!("© {BUILD_YEAR} All rights reserved.")}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
