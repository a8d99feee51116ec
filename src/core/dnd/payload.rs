use crate::core::models::{Column, Id, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortableKind {
    Column,
    Task,
}

impl SortableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortableKind::Column => "Column",
            SortableKind::Task => "Task",
        }
    }
}

/// Data registered alongside a sortable id, tagged by item kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SortablePayload {
    Column(Column),
    Task(Task),
}

impl SortablePayload {
    pub fn id(&self) -> &Id {
        match self {
            SortablePayload::Column(column) => &column.id,
            SortablePayload::Task(task) => &task.id,
        }
    }

    pub fn kind(&self) -> SortableKind {
        match self {
            SortablePayload::Column(_) => SortableKind::Column,
            SortablePayload::Task(_) => SortableKind::Task,
        }
    }

    // Human readable name used for live-region announcements
    pub fn label(&self) -> String {
        match self {
            SortablePayload::Column(column) => format!("column \"{}\"", column.title),
            SortablePayload::Task(task) => format!("task \"{}\"", task.content),
        }
    }
}

/// Anything that can register itself with the drag-and-drop layer.
pub trait SortableItem {
    fn sortable_id(&self) -> Id;
    fn to_payload(&self) -> SortablePayload;
}

impl SortableItem for Column {
    fn sortable_id(&self) -> Id {
        self.id.clone()
    }

    fn to_payload(&self) -> SortablePayload {
        SortablePayload::Column(self.clone())
    }
}

impl SortableItem for Task {
    fn sortable_id(&self) -> Id {
        self.id.clone()
    }

    fn to_payload(&self) -> SortablePayload {
        SortablePayload::Task(self.clone())
    }
}
