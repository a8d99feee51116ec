use serde::{Deserialize, Serialize};

use crate::core::dnd::array_move;
use crate::core::models::{Column, Id, Task};

/// Authoritative columns and tasks. Task order within a column is the order of
/// `tasks` filtered by column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn with_columns<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: titles.into_iter().map(|title| Column::new(title.into())).collect(),
            tasks: Vec::new(),
        }
    }

    pub fn create_column(&mut self) -> Id {
        let column = Column::new(format!("Column {}", self.columns.len() + 1));
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    // Tasks die with their column
    pub fn delete_column(&mut self, column_id: &str) {
        self.columns.retain(|c| c.id != column_id);
        self.tasks.retain(|t| t.column_id != column_id);
    }

    pub fn update_column(&mut self, column_id: &str, title: String) -> bool {
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(column) => {
                column.update_title(title);
                true
            }
            None => false,
        }
    }

    pub fn create_task(&mut self, column_id: &str) -> Option<Id> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return None;
        }
        let task = Task::new(column_id.to_string(), format!("Task {}", self.tasks.len() + 1));
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    pub fn update_task(&mut self, task_id: &str, content: String) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.update_content(content);
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }

    pub fn tasks_in(&self, column_id: &str) -> Vec<Task> {
        self.tasks.iter().filter(|t| t.column_id == column_id).cloned().collect()
    }

    /// `over` may name a column or a task; a task resolves to its column.
    pub fn move_column(&mut self, active_id: &str, over_id: &str) -> bool {
        let target = match self.tasks.iter().find(|t| t.id == over_id) {
            Some(task) => task.column_id.clone(),
            None => over_id.to_string(),
        };
        let from = self.columns.iter().position(|c| c.id == active_id);
        let to = self.columns.iter().position(|c| c.id == target);
        match (from, to) {
            (Some(from), Some(to)) if from != to => {
                array_move(&mut self.columns, from, to);
                true
            }
            _ => false,
        }
    }

    /// Dragging a task over another task adopts that task's column and takes its slot.
    pub fn move_task_over_task(&mut self, active_id: &str, over_id: &str) -> bool {
        let from = self.tasks.iter().position(|t| t.id == active_id);
        let to = self.tasks.iter().position(|t| t.id == over_id);
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) if from != to => (from, to),
            _ => return false,
        };
        let over_column = self.tasks[to].column_id.clone();
        if self.tasks[from].column_id != over_column {
            self.tasks[from].move_to_column(over_column);
        }
        array_move(&mut self.tasks, from, to);
        true
    }

    pub fn move_task_to_column(&mut self, active_id: &str, column_id: &str) -> bool {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == active_id) {
            Some(task) if task.column_id != column_id => {
                task.move_to_column(column_id.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_tasks() -> (Board, Id, Id) {
        let mut board = Board::with_columns(["Todo", "Done"]);
        let todo = board.columns[0].id.clone();
        let done = board.columns[1].id.clone();
        board.create_task(&todo);
        board.create_task(&todo);
        board.create_task(&done);
        (board, todo, done)
    }

    fn contents(board: &Board, column_id: &str) -> Vec<String> {
        board.tasks_in(column_id).into_iter().map(|t| t.content).collect()
    }

    #[test]
    fn new_items_are_numbered() {
        let mut board = Board::default();
        let column = board.create_column();
        board.create_column();
        board.create_task(&column);

        assert_eq!(board.columns[0].title, "Column 1");
        assert_eq!(board.columns[1].title, "Column 2");
        assert_eq!(board.tasks[0].content, "Task 1");
        assert_eq!(board.tasks[0].column_id, column);
    }

    #[test]
    fn create_task_in_unknown_column_is_rejected() {
        let mut board = Board::default();
        assert!(board.create_task("missing").is_none());
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn deleting_a_column_drops_its_tasks() {
        let (mut board, todo, done) = board_with_tasks();
        board.delete_column(&todo);

        assert_eq!(board.columns.len(), 1);
        assert!(board.tasks.iter().all(|t| t.column_id == done));
    }

    #[test]
    fn updates_keep_text_verbatim() {
        let (mut board, todo, _) = board_with_tasks();
        let task_id = board.tasks[0].id.clone();

        assert!(board.update_column(&todo, String::new()));
        assert!(board.update_task(&task_id, "  spaced  ".into()));
        assert_eq!(board.columns[0].title, "");
        assert_eq!(board.tasks[0].content, "  spaced  ");
        assert!(!board.update_task("missing", "x".into()));
    }

    #[test]
    fn moves_columns_by_column_or_task_target() {
        let (mut board, todo, done) = board_with_tasks();
        assert!(board.move_column(&todo, &done));
        assert_eq!(board.columns[0].id, done);

        // A task target resolves to its column
        let todo_task = board.tasks_in(&todo)[0].id.clone();
        assert!(board.move_column(&done, &todo_task));
        assert_eq!(board.columns[0].id, todo);

        assert!(!board.move_column(&todo, &todo));
    }

    #[test]
    fn task_over_task_in_same_column_reorders() {
        let (mut board, todo, _) = board_with_tasks();
        let first = board.tasks_in(&todo)[0].id.clone();
        let second = board.tasks_in(&todo)[1].id.clone();

        assert!(board.move_task_over_task(&first, &second));
        assert_eq!(contents(&board, &todo), vec!["Task 2", "Task 1"]);
    }

    #[test]
    fn task_over_task_in_other_column_adopts_column() {
        let (mut board, todo, done) = board_with_tasks();
        let moving = board.tasks_in(&todo)[0].id.clone();
        let target = board.tasks_in(&done)[0].id.clone();

        assert!(board.move_task_over_task(&moving, &target));
        assert_eq!(contents(&board, &todo), vec!["Task 2"]);
        assert_eq!(contents(&board, &done), vec!["Task 3", "Task 1"]);
    }

    #[test]
    fn task_over_empty_column_moves_it() {
        let (mut board, todo, _) = board_with_tasks();
        let empty = board.create_column();
        let moving = board.tasks_in(&todo)[0].id.clone();

        assert!(board.move_task_to_column(&moving, &empty));
        assert_eq!(contents(&board, &empty), vec!["Task 1"]);
        assert!(!board.move_task_to_column(&moving, &empty), "already there");
        assert!(!board.move_task_to_column(&moving, "missing"));
    }
}
