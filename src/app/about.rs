use leptos::{html, prelude::*};

use crate::content;
use crate::page::SectionId;
use crate::scenes;

use super::animate::{children_of, use_scroll_reveal};

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let portrait = NodeRef::<html::Div>::new();
    let details = NodeRef::<html::Div>::new();
    let skills = NodeRef::<html::Div>::new();

    use_scroll_reveal(scenes::ABOUT_SECTION_BAND, move |scene| {
        let el = section.get()?;
        let id = scene.add(el.clone());
        Some((el.into(), scenes::about_section(id)))
    });

    use_scroll_reveal(scenes::ABOUT_DETAIL_BAND, move |scene| {
        let el = portrait.get()?;
        let id = scene.add(el.clone());
        Some((el.into(), scenes::about_portrait(id)))
    });

    use_scroll_reveal(scenes::ABOUT_DETAIL_BAND, move |scene| {
        let el = details.get()?;
        let children = scene.add_all(children_of(&el));
        Some((el.into(), scenes::about_content(&children)))
    });

    use_scroll_reveal(scenes::SKILLS_BAND, move |scene| {
        let el = skills.get()?;
        let tiles = scene.add_all(children_of(&el));
        if tiles.is_empty() {
            return None;
        }
        Some((el.into(), scenes::skill_tiles(&tiles)))
    });

    let profile = content::profile();

    view! {
        <section id=SectionId::About.as_str() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div node_ref=portrait class="relative">
                        <div class="relative w-80 h-80 mx-auto">
                            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-primary/30 to-accent/30 glow-primary"></div>
                            <div class="absolute inset-4 rounded-full overflow-hidden glass-strong">
                                <img
                                    src=profile.portrait.clone()
                                    alt=profile.name.clone()
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="absolute -top-4 -right-4 w-8 h-8 bg-primary rounded-full glow-primary animate-pulse"></div>
                            <div class="absolute -bottom-6 -left-6 w-6 h-6 bg-accent rounded-full glow-accent animate-pulse"></div>
                            <div class="absolute top-1/2 -left-8 w-4 h-4 bg-primary/60 rounded-full animate-pulse"></div>
                        </div>
                    </div>

                    <div node_ref=details class="space-y-8">
                        <div>
                            <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                                "About Me"
                            </h2>
                            {profile
                                .bio
                                .iter()
                                .map(|paragraph| {
                                    view! {
                                        <p class="text-lg text-muted-foreground leading-relaxed mb-6">
                                            {paragraph.clone()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div node_ref=skills class="grid grid-cols-3 gap-6">
                            {content::skills()
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="skill-icon glass p-6 rounded-2xl text-center hover:glow-primary transition-all duration-300">
                                            <i class=format!("ph-light {} text-4xl mb-3 {}", skill.icon, skill.color)></i>
                                            <p class="text-sm font-medium">{skill.name.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
