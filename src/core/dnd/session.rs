use super::payload::SortablePayload;
use crate::core::models::Id;

#[derive(Debug, Clone, PartialEq)]
pub struct DragOver {
    pub active: SortablePayload,
    pub over: SortablePayload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub active: SortablePayload,
    pub over: Option<SortablePayload>,
}

/// State of the single drag gesture the board allows at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    active: Option<SortablePayload>,
    over: Option<SortablePayload>,
    // Item whose drag handle is pressed; one mouse means at most one
    armed: Option<Id>,
}

impl DragSession {
    pub fn arm(&mut self, id: Id) {
        self.armed = Some(id);
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Consumes the handle press. True only if `id`'s own handle was pressed.
    pub fn take_armed(&mut self, id: &str) -> bool {
        self.armed.take().as_deref() == Some(id)
    }

    pub fn active(&self) -> Option<&SortablePayload> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns false when another gesture is already running.
    pub fn begin(&mut self, payload: SortablePayload) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(payload);
        self.over = None;
        true
    }

    /// Records the item under the pointer. Only a change of target is reported;
    /// hovering the active item itself clears the target without reporting.
    pub fn hover(&mut self, over: SortablePayload) -> Option<DragOver> {
        let active = self.active.as_ref()?;
        if active.id() == over.id() {
            // Back over its own slot: the next target counts as a change again
            self.over = None;
            return None;
        }
        if self.over.as_ref().map(|current| current.id()) == Some(over.id()) {
            return None;
        }
        self.over = Some(over.clone());
        Some(DragOver {
            active: active.clone(),
            over,
        })
    }

    pub fn finish(&mut self) -> Option<DragEnd> {
        let active = self.active.take()?;
        Some(DragEnd {
            active,
            over: self.over.take(),
        })
    }
}
