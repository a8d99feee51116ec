pub mod column;
pub mod task;

// Identifiers are opaque to the views; the board owner mints them.
pub type Id = String;

pub use column::Column;
pub use task::{task_ids, Task};
