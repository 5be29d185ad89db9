//! In-memory event collection.

use crate::date::CalDate;
use crate::event::{Event, EventId, EventTime};

struct Entry {
    id: EventId,
    event: Event,
}

/// Insertion-ordered collection of events with stable ids.
///
/// Multiple events may share the same date and time; the store imposes no
/// uniqueness constraint. Ordering guarantees exist only on the result of
/// [`EventStore::events_for_date`].
pub struct EventStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends an event and returns its assigned id.
    pub fn add(&mut self, event: Event) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, event });
        id
    }

    /// Removes the event with the given id. Unknown ids are silently
    /// ignored; returns whether anything was removed.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.event)
    }

    pub fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.event)
    }

    /// Events on exactly the given date, in display order: all-day events
    /// first (insertion order among themselves), then timed events
    /// ascending by start time. This ordering is the contract the UI's
    /// per-day listing and delete wiring rely on.
    pub fn events_for_date(&self, date: CalDate) -> Vec<(EventId, &Event)> {
        let mut result: Vec<(EventId, &Event)> = self
            .entries
            .iter()
            .filter(|entry| entry.event.date == date)
            .map(|entry| (entry.id, &entry.event))
            .collect();

        result.sort_by_key(|(_, event)| match event.time {
            EventTime::AllDay => (0, 0),
            EventTime::Timed { start, .. } => (1, start.total_minutes()),
        });
        result
    }

    /// All events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, &Event)> {
        self.entries.iter().map(|entry| (entry.id, &entry.event))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all events. Ids are not reused within a store's lifetime.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the whole collection, assigning fresh ids in order. Used
    /// when reloading persisted state.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.clear();
        for event in events {
            self.add(event);
        }
    }
}
