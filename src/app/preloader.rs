use leptos::{html, prelude::*};

use crate::content;
use crate::motion::TimelineEvent;
use crate::scenes;

use super::animate::use_mount_animation;

/// Full-screen splash. Calls `on_complete` once its timeline has played through;
/// never if it is unmounted first.
#[component]
pub fn Preloader(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let text = NodeRef::<html::Div>::new();
    let bar = NodeRef::<html::Div>::new();

    use_mount_animation(
        move |scene| {
            let (root, text, bar) = (root.get()?, text.get()?, bar.get()?);
            let text = scene.add(text);
            let bar = scene.add(bar);
            let root = scene.add(root);
            Some(scenes::preloader(text, bar, root))
        },
        move |event| {
            if event == TimelineEvent::Completed {
                on_complete.run(());
            }
        },
    );

    let profile = content::profile();

    view! {
        <div node_ref=root class="preloader">
            <div
                node_ref=text
                class="preloader-text text-6xl md:text-8xl font-bold bg-gradient-to-r from-purple-400 via-blue-500 to-cyan-400 bg-clip-text text-transparent"
            >
                {profile.name.to_uppercase()}
            </div>
            <div class="progress-container">
                <div node_ref=bar class="progress-bar"></div>
            </div>
            <div class="mt-8 text-sm text-white/60 tracking-wider">
                {profile.role.to_uppercase()}
            </div>
        </div>
    }
}
