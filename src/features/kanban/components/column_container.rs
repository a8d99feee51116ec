use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::core::dnd::{use_sortable, SortableContext};
use crate::core::models::{task_ids, Column, Id, Task};
use crate::features::kanban::models::{ends_title_edit, ColumnHeaderState};

/// Ordered ids of `tasks`, recomputed only when the list itself changes.
pub fn use_task_ids(tasks: Signal<Vec<Task>>) -> Memo<Vec<Id>> {
    Memo::new(move |_| tasks.with(|tasks| task_ids(tasks)))
}

// One call per input event, carrying the whole field rather than a diff
pub fn commit_title(update_column: Callback<(Id, String)>, column_id: &Id, value: String) {
    update_column.run((column_id.clone(), value));
}

pub fn request_task(create_task: Callback<Id>, column_id: &Id) {
    create_task.run(column_id.clone());
}

#[component]
pub fn ColumnContainer(
    #[prop(into)] column: Signal<Column>,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    delete_column: Callback<Id>,
    update_column: Callback<(Id, String)>,
    create_task: Callback<Id>,
    update_task: Callback<(Id, String)>,
    delete_task: Callback<Id>,
) -> impl IntoView {
    let state = RwSignal::new(ColumnHeaderState::default());
    let column_id = column.with_untracked(|c| c.id.clone());
    let tasks_ids = use_task_ids(tasks);

    let sortable = use_sortable(column, Signal::derive(move || state.with(|s| s.drag_disabled())));
    let is_dragging = sortable.is_dragging;
    let drag_disabled = sortable.disabled;
    let index = sortable.index;

    let body = {
        let sortable = sortable.clone();
        move || {
            // Placeholder slot while this column is being carried
            if is_dragging.get() {
                return view! {}.into_any();
            }

            let input_ref: NodeRef<Input> = NodeRef::new();
            Effect::new(move |_| {
                if let Some(input) = input_ref.get() {
                    let _ = input.focus();
                }
            });

            let id_for_delete = column_id.clone();
            let id_for_input = column_id.clone();
            let id_for_create = column_id.clone();

            view! {
                <div
                    class="column-header"
                    on:mousedown=sortable.on_handle_mouse_down()
                    on:click=move |_| state.update(|s| s.enter_edit_mode())
                >
                    <div class="column-title">
                        <span class="task-count">{move || tasks.with(|tasks| tasks.len())}</span>
                        {move || {
                            if state.with(|s| s.edit_mode) {
                                let id = id_for_input.clone();
                                view! {
                                    <input
                                        class="column-title-input"
                                        node_ref=input_ref
                                        prop:value=move || column.with(|c| c.title.clone())
                                        on:input=move |ev| commit_title(update_column, &id, event_target_value(&ev))
                                        on:blur=move |_| state.update(|s| s.exit_edit_mode())
                                        on:keydown=move |ev: ev::KeyboardEvent| {
                                            if ends_title_edit(&ev.key()) {
                                                state.update(|s| s.exit_edit_mode());
                                            }
                                        }
                                    />
                                }.into_any()
                            } else {
                                view! { <span>{move || column.with(|c| c.title.clone())}</span> }.into_any()
                            }
                        }}
                    </div>
                    <button
                        class="column-delete-btn"
                        title="Delete column"
                        on:click=move |e| {
                            e.stop_propagation();
                            delete_column.run(id_for_delete.clone());
                        }
                    >"🗑"</button>
                </div>
                <div class="column-content">
                    <SortableContext items=tasks_ids>
                        <For
                            each=move || tasks.get()
                            key=|task| task.id.clone()
                            children=move |task: Task| {
                                let task_id = task.id.clone();
                                let task = Signal::derive(move || {
                                    tasks
                                        .with(|tasks| tasks.iter().find(|t| t.id == task_id).cloned())
                                        .unwrap_or_else(|| task.clone())
                                });
                                view! { <TaskCard task=task update_task=update_task delete_task=delete_task /> }
                            }
                        />
                    </SortableContext>
                </div>
                <button
                    class="add-task-btn"
                    on:click=move |_| request_task(create_task, &id_for_create)
                >"+ Add task"</button>
            }
            .into_any()
        }
    };

    view! {
        <div
            node_ref=sortable.node_ref
            class="kanban-column"
            class:column-placeholder=move || is_dragging.get()
            style=sortable.style()
            draggable=sortable.draggable()
            role="button"
            tabindex="0"
            aria-roledescription="sortable"
            aria-disabled=move || drag_disabled.get().to_string()
            aria-pressed=move || is_dragging.get().to_string()
            aria-posinset=move || index.get().map(|i| (i + 1).to_string())
            on:dragstart=sortable.on_drag_start()
            on:dragover=sortable.on_drag_over()
        >
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::features::kanban::services::Board;

    fn recording<T: Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (Callback::new(move |args: T| sink.lock().unwrap().push(args)), calls)
    }

    #[test]
    fn id_projection_follows_the_list() {
        let a = Task::new("col".into(), "A".into());
        let b = Task::new("col".into(), "B".into());
        let c = Task::new("col".into(), "C".into());
        let list = RwSignal::new(vec![a.clone(), b.clone(), c.clone()]);
        let ids = use_task_ids(list.into());

        assert_eq!(ids.get_untracked(), vec![a.id.clone(), b.id.clone(), c.id.clone()]);

        list.set(vec![c.clone(), a.clone()]);
        assert_eq!(ids.get_untracked(), vec![c.id, a.id]);
    }

    #[test]
    fn content_edits_keep_the_same_ids() {
        let a = Task::new("col".into(), "A".into());
        let list = RwSignal::new(vec![a.clone()]);
        let ids = use_task_ids(list.into());

        list.update(|tasks| tasks[0].update_content("edited".into()));
        assert_eq!(ids.get_untracked(), vec![a.id]);
    }

    #[test]
    fn ids_recompute_only_when_the_column_list_changes() {
        let board = RwSignal::new(Board::with_columns(["Todo", "Done"]));
        let (todo, done) = board.with_untracked(|b| (b.columns[0].id.clone(), b.columns[1].id.clone()));
        board.update(|b| {
            b.create_task(&todo);
            b.create_task(&done);
        });

        let column_tasks = {
            let todo = todo.clone();
            Memo::new(move |_| board.with(|b| b.tasks_in(&todo)))
        };
        // The memo reads its source once per run, so counting reads counts runs
        let runs = Arc::new(AtomicUsize::new(0));
        let source = {
            let runs = runs.clone();
            Signal::derive(move || {
                runs.fetch_add(1, Ordering::SeqCst);
                column_tasks.get()
            })
        };
        let ids = use_task_ids(source);

        assert_eq!(ids.get_untracked().len(), 1);
        assert_eq!(ids.get_untracked().len(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // Another column's edit leaves this column's list equal
        let other = board.with_untracked(|b| b.tasks_in(&done)[0].id.clone());
        board.update(|b| {
            b.update_task(&other, "elsewhere".into());
        });
        assert_eq!(ids.get_untracked().len(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        board.update(|b| {
            b.create_task(&todo);
        });
        assert_eq!(ids.get_untracked().len(), 2);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn each_keystroke_sends_one_full_title() {
        let (update_column, calls) = recording::<(Id, String)>();
        let column = Column::new("T".into());

        for value in ["To", "Tod", "Todo"] {
            commit_title(update_column, &column.id, value.to_string());
        }

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                (column.id.clone(), "To".to_string()),
                (column.id.clone(), "Tod".to_string()),
                (column.id.clone(), "Todo".to_string()),
            ]
        );
    }

    #[test]
    fn empty_column_still_adds_a_task() {
        let (create_task, calls) = recording::<Id>();
        let column = Column::new("Empty".into());
        let tasks = RwSignal::new(Vec::<Task>::new());

        assert!(use_task_ids(tasks.into()).get_untracked().is_empty());

        request_task(create_task, &column.id);
        assert_eq!(*calls.lock().unwrap(), vec![column.id.clone()]);
    }
}
