use leptos::prelude::*;

use crate::core::config::load_board_config;
use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_board_config());

    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
