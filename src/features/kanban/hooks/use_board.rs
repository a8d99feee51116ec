use leptos::prelude::*;

use crate::core::config::BoardConfig;
use crate::core::dnd::{DragEnd, DragOver, SortableKind, SortablePayload};
use crate::core::models::{Column, Id, Task};
use crate::features::kanban::services::Board;

pub struct BoardHook {
    pub columns: Memo<Vec<Column>>,
    pub tasks: Memo<Vec<Task>>,
    pub announcement: ReadSignal<String>,
    pub create_column: Callback<()>,
    pub delete_column: Callback<Id>,
    pub update_column: Callback<(Id, String)>,
    pub create_task: Callback<Id>,
    pub update_task: Callback<(Id, String)>,
    pub delete_task: Callback<Id>,
    pub on_drag_start: Callback<SortablePayload>,
    pub on_drag_over: Callback<DragOver>,
    pub on_drag_end: Callback<DragEnd>,
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    let board = RwSignal::new(Board::with_columns(config.initial_columns.iter().cloned()));
    let (announcement, set_announcement) = signal(String::new());

    // Column edits must not wake task lists and vice versa
    let columns = Memo::new(move |_| board.with(|b| b.columns.clone()));
    let tasks = Memo::new(move |_| board.with(|b| b.tasks.clone()));

    let create_column = Callback::new(move |_: ()| {
        let id = board.try_update(|b| b.create_column());
        web_sys::console::log_1(&format!("Created column {:?}", id).into());
    });

    let delete_column = Callback::new(move |column_id: Id| {
        board.update(|b| b.delete_column(&column_id));
        web_sys::console::log_1(&format!("Deleted column {}", column_id).into());
    });

    let update_column = Callback::new(move |(column_id, title): (Id, String)| {
        let found = board.try_update(|b| b.update_column(&column_id, title)).unwrap_or(false);
        if !found {
            web_sys::console::error_1(&format!("Column {} not found for title update", column_id).into());
        }
    });

    let create_task = Callback::new(move |column_id: Id| {
        match board.try_update(|b| b.create_task(&column_id)).flatten() {
            Some(task_id) => web_sys::console::log_1(&format!("Created task {} in column {}", task_id, column_id).into()),
            None => web_sys::console::error_1(&format!("Column {} not found for new task", column_id).into()),
        }
    });

    let update_task = Callback::new(move |(task_id, content): (Id, String)| {
        let found = board.try_update(|b| b.update_task(&task_id, content)).unwrap_or(false);
        if !found {
            web_sys::console::error_1(&format!("Task {} not found for content update", task_id).into());
        }
    });

    let delete_task = Callback::new(move |task_id: Id| {
        board.update(|b| b.delete_task(&task_id));
        web_sys::console::log_1(&format!("Deleted task {}", task_id).into());
    });

    let on_drag_start = Callback::new(move |active: SortablePayload| {
        set_announcement.set(format!("Picked up {}.", active.label()));
    });

    // Tasks follow the pointer across lists while the gesture runs
    let on_drag_over = Callback::new(move |DragOver { active, over }: DragOver| {
        if active.kind() != SortableKind::Task {
            return;
        }
        let moved = match over.kind() {
            SortableKind::Task => board.try_update(|b| b.move_task_over_task(active.id(), over.id())),
            SortableKind::Column => board.try_update(|b| b.move_task_to_column(active.id(), over.id())),
        };
        if moved.unwrap_or(false) {
            set_announcement.set(format!("{} is over {}.", capitalize(&active.label()), over.label()));
        }
    });

    // Columns only settle once the drop lands
    let on_drag_end = Callback::new(move |DragEnd { active, over }: DragEnd| {
        let label = capitalize(&active.label());
        let Some(over) = over else {
            set_announcement.set(format!("{} was dropped.", label));
            return;
        };
        if active.kind() == SortableKind::Column {
            board.update(|b| {
                b.move_column(active.id(), over.id());
            });
        }
        set_announcement.set(format!("{} was dropped over {}.", label, over.label()));
    });

    BoardHook {
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
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("task \"a b\""), "Task \"a b\"");
        assert_eq!(capitalize(""), "");
    }
}
