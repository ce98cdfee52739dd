use leptos::{ev, html, prelude::*};

use crate::content;
use crate::page::{NavState, SectionId};
use crate::scenes;

use super::animate::{select_all, use_animation, use_mount_animation, Scene};
use super::smooth_scroll::use_scroll;

#[component]
pub fn Navigation() -> impl IntoView {
    let scroll = use_scroll();
    let nav = RwSignal::new(NavState::new(content::settings().nav_scroll_threshold));
    let bar = NodeRef::<html::Nav>::new();
    let panel = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let y = scroll.offset();
        nav.maybe_update(|n| n.on_scroll(&y));
    });

    use_mount_animation(move |scene| Some(scenes::nav_intro(scene.add(bar.get()?))), |_| {});

    let menu = use_animation(|_| {});
    Effect::new(move |_| {
        let Some(panel) = panel.get() else {
            return;
        };
        if menu.is_installed() {
            return;
        }
        let mut scene = Scene::default();
        let items = scene.add_all(select_all(&panel, ".mobile-menu-item"));
        let panel = scene.add(panel);
        menu.install(scene, scenes::mobile_menu(panel, &items));
    });

    let toggle = move |_: ev::MouseEvent| {
        let mut open = false;
        nav.update(|n| open = n.toggle_menu());
        if open {
            menu.play();
        } else {
            menu.reverse();
        }
    };

    let choose = move |section: SectionId| {
        let was_open = nav.with_untracked(|n| n.menu_open);
        let section = nav.try_update(|n| n.choose(section)).unwrap_or(section);
        if was_open {
            menu.reverse();
        }
        scroll.jump_to(section);
    };

    let menu_open = move || nav.with(|n| n.menu_open);
    let profile = content::profile();

    view! {
        <nav
            node_ref=bar
            class="nav-container fixed top-0 left-0 right-0 z-50 px-6 py-4 transition-all duration-500"
            class:glass-morphism=move || nav.with(|n| n.scrolled)
        >
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <button
                    class="text-2xl font-bold bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent"
                    on:click=move |_| choose(SectionId::Home)
                >
                    {profile.initials.clone()}
                </button>

                <div class="hidden md:flex items-center gap-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(move |section| {
                            view! {
                                <button
                                    class="relative text-foreground/80 hover:text-foreground transition-colors duration-300 group"
                                    on:click=move |_| choose(section)
                                >
                                    {section.label()}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-primary to-accent transition-all duration-300 group-hover:w-full"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-2xl text-foreground"
                    aria-label="Open menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=toggle
                >
                    <i class="ph-light ph-list"></i>
                </button>
            </div>
        </nav>

        <div
            node_ref=panel
            class="mobile-menu fixed inset-0 z-[60] bg-black/95 backdrop-blur-lg md:hidden flex flex-col items-center justify-center gap-8"
            style="transform: translateX(100%)"
            aria-hidden=move || (!menu_open()).to_string()
        >
            <button
                class="absolute top-6 right-6 text-3xl text-foreground"
                aria-label="Close menu"
                on:click=toggle
            >
                <i class="ph-light ph-x"></i>
            </button>
            {SectionId::ALL
                .into_iter()
                .map(move |section| {
                    view! {
                        <button
                            class="mobile-menu-item text-3xl font-light text-foreground/80 hover:text-foreground transition-colors"
                            on:click=move |_| choose(section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
