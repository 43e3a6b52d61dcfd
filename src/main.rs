mod api;
mod components;
mod config;
mod models;
mod scroll;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use config::Config;
use state::ConversationStore;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let config = Config::from_build_env();
    ConversationStore::provide(api::http_transport(&config));

    view! {
        <div class="app-container">
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
