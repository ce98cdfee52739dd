use leptos::{html, prelude::*};

use crate::content::{self, Project};
use crate::page::SectionId;
use crate::scenes;

use super::animate::{select_all, use_interaction, use_scroll_reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();

    use_scroll_reveal(scenes::PROJECTS_BAND, move |scene| {
        let el = section.get()?;
        let cards = scene.add_all(select_all(&el, ".project-card"));
        if cards.is_empty() {
            return None;
        }
        Some((el.into(), scenes::project_cards(&cards)))
    });

    view! {
        <section id=SectionId::Projects.as_str() node_ref=section class="py-20 relative">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "A showcase of my latest work in web development, featuring cutting-edge technologies and innovative design solutions."
                    </p>
                </div>
                <ProjectGrid projects=content::projects() />
            </div>
        </section>
    }
}

#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .iter()
                .map(|project| view! { <ProjectCard project /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let hover = use_interaction(move || card.get().map(Into::into), scenes::card_hover);

    view! {
        <div
            node_ref=card
            class="project-card glass-strong rounded-2xl overflow-hidden group cursor-pointer"
            on:mouseenter=move |_| hover.enter()
            on:mouseleave=move |_| hover.leave()
        >
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-3 group-hover:text-primary transition-colors">
                    {project.title.as_str()}
                </h3>
                <p class="text-muted-foreground mb-4 leading-relaxed">
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs rounded-full bg-primary/20 text-primary border border-primary/30">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.demo_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-primary hover:text-accent transition-colors"
                    >
                        <i class="ph-light ph-arrow-up-right"></i>
                        "Demo"
                    </a>
                    <a
                        href=project.github_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-muted-foreground hover:text-foreground transition-colors"
                    >
                        <i class="ph-light ph-github-logo"></i>
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(projects: &'static [Project]) -> String {
        Owner::new().with(|| view! { <ProjectGrid projects /> }.to_html())
    }

    #[test]
    fn renders_a_card_per_project() {
        let html = render(content::projects());
        assert_eq!(html.matches("project-card ").count(), content::projects().len());
        for project in content::projects() {
            assert!(html.contains(&project.title));
        }
    }

    #[test]
    fn renders_an_empty_grid_without_projects() {
        let html = render(&[]);
        assert!(!html.contains("project-card"));
        assert!(html.contains("grid"));
    }
}
