//! Application context tying store, view, drag and storage together.

use crate::codec;
use crate::date::CalDate;
use crate::drag::{self, DragState, DropTarget};
use crate::error::CalResult;
use crate::event::{Event, EventId};
use crate::storage::{STORAGE_KEY, Storage};
use crate::store::EventStore;
use crate::view::ViewState;

/// One running calendar session: the event store, the view cursor, the
/// drag state and the storage backend, constructed once and passed around
/// explicitly. Every mutation flushes the whole event list to storage, so
/// the persisted blob is never stale.
pub struct CalendarApp<S: Storage> {
    store: EventStore,
    pub view: ViewState,
    drag: DragState,
    storage: S,
}

impl<S: Storage> CalendarApp<S> {
    /// Creates a session and loads whatever is persisted. An absent or
    /// unreadable blob yields an empty calendar.
    pub fn new(storage: S) -> Self {
        let mut app = CalendarApp {
            store: EventStore::new(),
            view: ViewState::new(),
            drag: DragState::Idle,
            storage,
        };
        app.reload();
        app
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Adds an event and flushes. Events with empty (or whitespace-only)
    /// text are not added; `None` is returned for those.
    pub fn add_event(&mut self, event: Event) -> CalResult<Option<EventId>> {
        if event.text.trim().is_empty() {
            return Ok(None);
        }
        let id = self.store.add(event);
        self.flush()?;
        Ok(Some(id))
    }

    /// Removes an event by id and flushes. Unknown ids are ignored and
    /// skip the flush.
    pub fn remove_event(&mut self, id: EventId) -> CalResult<()> {
        if self.store.remove(id) {
            self.flush()?;
        }
        Ok(())
    }

    pub fn events_for_date(&self, date: CalDate) -> Vec<(EventId, &Event)> {
        self.store.events_for_date(date)
    }

    /// Replaces the store contents from storage. Missing data means an
    /// empty event list.
    pub fn reload(&mut self) {
        let events = match self.storage.get(STORAGE_KEY) {
            Some(text) => codec::decode(&text),
            None => Vec::new(),
        };
        self.store.replace_all(events);
    }

    /// Writes the current event list to storage.
    pub fn flush(&mut self) -> CalResult<()> {
        let encoded = codec::encode(self.store.iter().map(|(_, event)| event))?;
        self.storage.set(STORAGE_KEY, &encoded)
    }

    /// Starts dragging an event block. Ignored for unknown ids and while
    /// a drag is already in flight.
    pub fn drag_press(&mut self, id: EventId, grab_offset_minutes: i32) {
        if self.store.get(id).is_some() {
            self.drag.press(id, grab_offset_minutes);
        }
    }

    /// Finishes a drag. With a target inside the grid the event is
    /// rescheduled and the store flushed; without one the drag is simply
    /// cancelled. Returns whether an event was rescheduled.
    pub fn drag_release(&mut self, target: Option<DropTarget>) -> CalResult<bool> {
        let Some((id, grab_offset_minutes)) = self.drag.release() else {
            return Ok(false);
        };
        let Some(target) = target else {
            return Ok(false);
        };

        let moved = match self.store.get_mut(id) {
            Some(event) => drag::apply_drop(event, target, grab_offset_minutes),
            None => false,
        };
        if moved {
            self.flush()?;
        }
        Ok(moved)
    }
}
