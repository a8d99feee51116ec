use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::features::kanban::{use_board, KanbanBoard};

#[component]
pub fn BoardPage() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let board = use_board(&config);

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <h1>{config.title.clone()}</h1>
            </header>
            <KanbanBoard transition=config.column_transition.clone() board=board />
        </div>
    }
}
