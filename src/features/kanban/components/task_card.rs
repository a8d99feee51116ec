use leptos::ev;
use leptos::html::Textarea;
use leptos::prelude::*;

use crate::core::dnd::use_sortable;
use crate::core::models::{Id, Task};
use crate::features::kanban::models::{ends_content_edit, TaskCardState};

#[component]
pub fn TaskCard(
    #[prop(into)] task: Signal<Task>,
    update_task: Callback<(Id, String)>,
    delete_task: Callback<Id>,
) -> impl IntoView {
    let state = RwSignal::new(TaskCardState::default());
    let task_id = task.with_untracked(|t| t.id.clone());

    let sortable = use_sortable(task, Signal::derive(move || state.with(|s| s.drag_disabled())));
    let is_dragging = sortable.is_dragging;
    let drag_disabled = sortable.disabled;
    let index = sortable.index;
    let edit_mode = Memo::new(move |_| state.with(|s| s.edit_mode));

    let toggle_edit_mode = move || state.update(|s| s.toggle_edit_mode());

    let content = move || {
        if is_dragging.get() {
            return view! {}.into_any();
        }

        if edit_mode.get() {
            let textarea_ref: NodeRef<Textarea> = NodeRef::new();
            Effect::new(move |_| {
                if let Some(textarea) = textarea_ref.get() {
                    let _ = textarea.focus();
                }
            });
            let id = task_id.clone();
            return view! {
                <textarea
                    class="task-content-input"
                    node_ref=textarea_ref
                    placeholder="Task content"
                    prop:value=move || task.with(|t| t.content.clone())
                    on:input=move |ev| update_task.run((id.clone(), event_target_value(&ev)))
                    on:blur=move |_| state.update(|s| s.exit_edit_mode())
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ends_content_edit(&ev.key(), ev.shift_key()) {
                            ev.prevent_default();
                            state.update(|s| s.exit_edit_mode());
                        }
                    }
                ></textarea>
            }
            .into_any();
        }

        let id = task_id.clone();
        view! {
            <p class="task-content">{move || task.with(|t| t.content.clone())}</p>
            <Show when=move || state.with(|s| s.shows_delete_button())>
                {
                    let id = id.clone();
                    view! {
                        <button
                            class="task-delete-btn"
                            title="Delete task"
                            on:click=move |e| {
                                e.stop_propagation();
                                delete_task.run(id.clone());
                            }
                        >"🗑"</button>
                    }
                }
            </Show>
        }
        .into_any()
    };

    view! {
        <div
            node_ref=sortable.node_ref
            class="task-card"
            class:task-placeholder=move || is_dragging.get()
            class:editing=move || edit_mode.get()
            style=sortable.style()
            draggable=sortable.draggable()
            role="button"
            tabindex="0"
            aria-roledescription="sortable"
            aria-disabled=move || drag_disabled.get().to_string()
            aria-pressed=move || is_dragging.get().to_string()
            aria-posinset=move || index.get().map(|i| (i + 1).to_string())
            on:mousedown=sortable.on_handle_mouse_down()
            on:dragstart=sortable.on_drag_start()
            on:dragover=sortable.on_drag_over()
            on:click=move |_| {
                if !edit_mode.get_untracked() && !is_dragging.get_untracked() {
                    toggle_edit_mode();
                }
            }
            on:mouseenter=move |_| state.update(|s| s.pointer_enter())
            on:mouseleave=move |_| state.update(|s| s.pointer_leave())
        >
            {content}
        </div>
    }
}
