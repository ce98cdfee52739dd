use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::page::LoadGate;

use super::about::About;
use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::navigation::Navigation;
use super::preloader::Preloader;
use super::projects::Projects;
use super::smooth_scroll::provide_smooth_scroll;

#[component]
pub fn HomePage() -> impl IntoView {
    let gate = RwSignal::new(LoadGate::default());
    let loaded = Memo::new(move |_| gate.with(LoadGate::is_loaded));
    let container = NodeRef::<html::Div>::new();
    provide_smooth_scroll(container);

    let on_complete = move |_: ()| {
        gate.maybe_update(|g| {
            let first = g.complete();
            if first {
                log::debug!("preloader finished, showing content");
            }
            first
        });
    };

    view! {
        <Title text="Portfolio" />
        <Show
            when=move || loaded.get()
            fallback=move || view! { <Preloader on_complete /> }
        >
            <div class="relative">
                <Navigation />
                <div node_ref=container data-scroll-container="">
                    <main>
                        <Hero />
                        <About />
                        <Projects />
                        <Contact />
                    </main>
                    <Footer />
                </div>
            </div>
        </Show>
    }
}
