pub mod board;
pub mod column_container;
pub mod task_card;

pub use board::KanbanBoard;
pub use column_container::ColumnContainer;
pub use task_card::TaskCard;
