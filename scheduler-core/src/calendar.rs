use std::cmp::Ordering;

use crate::{
    Error, Result,
    event::{Event, EventKey},
};

/// Slots added to the storage each time it fills up
pub const GROWTH_INCREMENT: usize = 4;

/// Printed instead of a listing when there is nothing booked
pub const EMPTY_MESSAGE: &str = "Event calendar is empty!";
/// Last line of every listing
pub const FOOTER: &str = "* end of event calendar *";

/// Ways of listing the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    /// Current storage order, no sorting
    Current,
    /// By date, then start time
    ByDate,
    /// By location catalog order
    ByCampus,
    /// By contact department
    ByDepartment,
}

impl CalendarView {
    /// First line of the listing for this view.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Current => "* Event calendar *",
            Self::ByDate => "* Event calendar by event date and start time *",
            Self::ByCampus => "* Event calendar by campus and building *",
            Self::ByDepartment => "* Event calendar by department *",
        }
    }

    fn comparator(self) -> Option<fn(&Event, &Event) -> Ordering> {
        match self {
            Self::Current => None,
            Self::ByDate => Some(Event::compare_by_date),
            Self::ByCampus => Some(Event::compare_by_location),
            Self::ByDepartment => Some(Event::compare_by_department),
        }
    }
}

/// Ordered, duplicate-free collection of booked events.
///
/// Storage grows by [`GROWTH_INCREMENT`] slots at a time. Sorted views reorder
/// the storage in place and the new order sticks for later listings.
#[derive(Debug, Clone)]
pub struct EventCalendar {
    events: Vec<Event>,
}

impl EventCalendar {
    /// Empty calendar with room for [`GROWTH_INCREMENT`] events.
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(GROWTH_INCREMENT),
        }
    }

    /// Number of booked events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing is booked.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Allocated slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    /// Events in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Event booked under `key`.
    pub fn get(&self, key: &EventKey) -> Option<&Event> {
        self.find(key).map(|index| &self.events[index])
    }

    /// True when an event with this key is booked.
    pub fn contains(&self, key: &EventKey) -> bool {
        self.find(key).is_some()
    }

    /// Books `event` unless an event with the same key is already present.
    pub fn add(&mut self, event: Event) -> Result<()> {
        if self.contains(event.key()) {
            tracing::debug!("duplicate event rejected: {}", event.key());
            return Err(Error::DuplicateEvent);
        }

        if self.events.len() == self.events.capacity() {
            self.grow();
        }
        tracing::debug!("adding event: {}", event);
        self.events.push(event);
        Ok(())
    }

    /// Cancels the event matching `key`, keeping the others in order.
    pub fn remove(&mut self, key: &EventKey) -> Result<Event> {
        let index = self.find(key).ok_or(Error::EventNotFound)?;
        let removed = self.events.remove(index);
        tracing::debug!("removed event at position {}: {}", index, removed);
        Ok(removed)
    }

    /// Reorders the storage for `view`. [`CalendarView::Current`] leaves it
    /// untouched.
    pub fn sort(&mut self, view: CalendarView) {
        if let Some(compare) = view.comparator() {
            self.selection_sort_by(compare);
        }
    }

    /// Sorts for `view` and renders the listing.
    pub fn render(&mut self, view: CalendarView) -> String {
        if self.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }
        self.sort(view);
        self.listing(view.header())
    }

    /// Listing in current storage order.
    pub fn print(&self) -> String {
        if self.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }
        self.listing(CalendarView::Current.header())
    }

    /// Listing sorted by date, then start time.
    pub fn print_by_date(&mut self) -> String {
        self.render(CalendarView::ByDate)
    }

    /// Listing sorted by location catalog order.
    pub fn print_by_campus(&mut self) -> String {
        self.render(CalendarView::ByCampus)
    }

    /// Listing sorted by contact department.
    pub fn print_by_department(&mut self) -> String {
        self.render(CalendarView::ByDepartment)
    }

    fn find(&self, key: &EventKey) -> Option<usize> {
        self.events.iter().position(|event| event.matches(key))
    }

    fn grow(&mut self) {
        self.events.reserve_exact(GROWTH_INCREMENT);
        tracing::debug!("calendar storage grown to {} slots", self.events.capacity());
    }

    // Selection sort: each pass swaps the first strictly smallest element
    // into place, so equal keys may change relative order.
    fn selection_sort_by(&mut self, compare: fn(&Event, &Event) -> Ordering) {
        let len = self.events.len();
        for i in 0..len.saturating_sub(1) {
            let mut smallest = i;
            for j in (i + 1)..len {
                if compare(&self.events[j], &self.events[smallest]) == Ordering::Less {
                    smallest = j;
                }
            }
            self.events.swap(i, smallest);
        }
    }

    fn listing(&self, header: &str) -> String {
        let mut out = String::new();
        out.push_str(header);
        out.push('\n');
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out.push_str(FOOTER);
        out
    }
}

impl Default for EventCalendar {
    fn default() -> Self {
        Self::new()
    }
}
