use leptos::prelude::*;

use super::column_container::ColumnContainer;
use crate::core::dnd::{DndProvider, SortableContext};
use crate::core::models::{Column, Id};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanBoard(#[prop(into)] transition: String, board: BoardHook) -> impl IntoView {
    let BoardHook {
        columns,
        tasks,
        announcement,
        create_column,
        delete_column,
        update_column,
        create_task,
        update_task,
        delete_task,
        on_drag_start,
        on_drag_over,
        on_drag_end,
    } = board;

    let column_ids = Memo::new(move |_| columns.with(|columns| columns.iter().map(|c| c.id.clone()).collect::<Vec<Id>>()));

    view! {
        <div class="kanban-board">
            <DndProvider
                transition=transition
                on_drag_start=on_drag_start
                on_drag_over=on_drag_over
                on_drag_end=on_drag_end
            >
                <div class="kanban-columns">
                    <SortableContext items=column_ids>
                        <For
                            each=move || columns.get()
                            key=|column| column.id.clone()
                            children=move |column: Column| {
                                let column_id = column.id.clone();
                                let column = {
                                    let column_id = column_id.clone();
                                    Signal::derive(move || {
                                        columns
                                            .with(|columns| columns.iter().find(|c| c.id == column_id).cloned())
                                            .unwrap_or_else(|| column.clone())
                                    })
                                };
                                // Other columns' edits leave this list untouched
                                let column_tasks = Memo::new(move |_| {
                                    tasks.with(|tasks| {
                                        tasks.iter().filter(|t| t.column_id == column_id).cloned().collect::<Vec<_>>()
                                    })
                                });
                                view! {
                                    <ColumnContainer
                                        column=column
                                        tasks=column_tasks
                                        delete_column=delete_column
                                        update_column=update_column
                                        create_task=create_task
                                        update_task=update_task
                                        delete_task=delete_task
                                    />
                                }
                            }
                        />
                    </SortableContext>
                </div>
            </DndProvider>
            <button class="btn-primary add-column-btn" on:click=move |_| create_column.run(())>
                "+ Add column"
            </button>
            <div class="sr-only" aria-live="assertive" role="status">
                {move || announcement.get()}
            </div>
        </div>
    }
}
