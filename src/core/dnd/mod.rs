pub mod context;
pub mod payload;
pub mod reorder;
pub mod session;
pub mod sortable;

pub use context::{DndContext, DndProvider, SortableContext};
pub use payload::{SortableItem, SortableKind, SortablePayload};
pub use reorder::array_move;
pub use session::{DragEnd, DragOver, DragSession};
pub use sortable::{use_sortable, Sortable};
