use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    Error, Result,
    catalog::{Catalog, Location, Meridiem, TimeSlot},
    contact::Contact,
    date::CalendarDate,
};

/// Shortest bookable event, in minutes
pub const MIN_DURATION: u32 = 30;
/// Longest bookable event, in minutes
pub const MAX_DURATION: u32 = 120;

const MINUTES_PER_HOUR: u32 = 60;
const NOON: u32 = 12;

/// Identity of an event: two events collide when date, start time and
/// location all match.
///
/// Lookups and removals take a key rather than a whole event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub date: CalendarDate,
    pub timeslot: TimeSlot,
    pub location: Location,
}

impl EventKey {
    /// Key of the event at `date`, `timeslot` and `location`.
    pub fn new(date: CalendarDate, timeslot: TimeSlot, location: Location) -> Self {
        Self {
            date,
            timeslot,
            location,
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.timeslot, self.location)
    }
}

/// Event length in minutes, always within `MIN_DURATION..=MAX_DURATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDuration(u32);

impl EventDuration {
    /// Fails with the duration message outside the bookable range.
    pub fn new(minutes: i64) -> Result<Self> {
        u32::try_from(minutes)
            .ok()
            .filter(|m| (MIN_DURATION..=MAX_DURATION).contains(m))
            .map(Self)
            .ok_or_else(|| Error::InvalidDuration(minutes.to_string()))
    }

    /// Length in minutes.
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for EventDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let minutes = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidDuration(s.to_string()))?;
        Self::new(minutes)
    }
}

/// Display-only end time of an event. Hours are not wrapped past 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTime {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl fmt::Display for EndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[End: {}:{:02} {}]", self.hour, self.minute, self.meridiem)
    }
}

/// A booked event.
///
/// Equality only looks at the [`EventKey`]; contact and duration are
/// payload.
#[derive(Debug, Clone)]
pub struct Event {
    key: EventKey,
    contact: Contact,
    duration: EventDuration,
}

impl Event {
    /// Assembles an event from already validated parts.
    pub fn new(key: EventKey, contact: Contact, duration: EventDuration) -> Self {
        Self {
            key,
            contact,
            duration,
        }
    }

    /// Identity of the event.
    pub const fn key(&self) -> &EventKey {
        &self.key
    }

    /// Date the event is held on.
    pub const fn date(&self) -> &CalendarDate {
        &self.key.date
    }

    /// Start time.
    pub const fn timeslot(&self) -> TimeSlot {
        self.key.timeslot
    }

    /// Room.
    pub const fn location(&self) -> Location {
        self.key.location
    }

    /// Organizer contact.
    pub const fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Length of the event.
    pub const fn duration(&self) -> EventDuration {
        self.duration
    }

    /// True when this event has the given identity.
    pub fn matches(&self, key: &EventKey) -> bool {
        self.key == *key
    }

    /// Chronological order: date, then start time.
    pub fn compare_by_date(&self, other: &Self) -> Ordering {
        self.key.date.cmp(&other.key.date).then_with(|| {
            self.key
                .timeslot
                .ordinal()
                .cmp(&other.key.timeslot.ordinal())
        })
    }

    /// Order of the location catalog (campus, then building).
    pub fn compare_by_location(&self, other: &Self) -> Ordering {
        self.key
            .location
            .ordinal()
            .cmp(&other.key.location.ordinal())
    }

    /// Order of the department catalog.
    pub fn compare_by_department(&self, other: &Self) -> Ordering {
        self.contact
            .department()
            .ordinal()
            .cmp(&other.contact.department().ordinal())
    }

    /// Start time plus duration, with minutes carried into hours.
    pub fn end_time(&self) -> EndTime {
        let slot = self.key.timeslot;
        let duration = self.duration.minutes();

        let mut minute = slot.minute() + duration % MINUTES_PER_HOUR;
        let mut hour = slot.hour() + duration / MINUTES_PER_HOUR;
        while minute >= MINUTES_PER_HOUR {
            minute -= MINUTES_PER_HOUR;
            hour += 1;
        }

        let meridiem = if slot == TimeSlot::Morning && hour < NOON {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };

        EndTime {
            hour,
            minute,
            meridiem,
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Event {}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.key.date,
            self.key.timeslot,
            self.end_time(),
            self.key.location,
            self.contact
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Department;

    fn event(
        date: &str,
        timeslot: TimeSlot,
        location: Location,
        department: Department,
        email: &str,
        minutes: i64,
    ) -> Event {
        Event::new(
            EventKey::new(CalendarDate::parse(date).unwrap(), timeslot, location),
            Contact::new(department, email),
            EventDuration::new(minutes).unwrap(),
        )
    }

    #[test]
    fn test_two_completely_different_events() {
        let e1 = event(
            "09/06/2023",
            TimeSlot::Afternoon,
            Location::Hll114,
            Department::Iti,
            "cs@rutgers.edu",
            60,
        );
        let e2 = event(
            "03/06/2021",
            TimeSlot::Morning,
            Location::Arc103,
            Department::Cs,
            "hi@rutgers.edu",
            60,
        );
        assert_ne!(e1, e2);
    }

    #[test]
    fn test_two_dates_same() {
        let e1 = event(
            "09/06/2023",
            TimeSlot::Afternoon,
            Location::Hll114,
            Department::Iti,
            "cs@rutgers.edu",
            60,
        );
        let e2 = event(
            "09/06/2023",
            TimeSlot::Morning,
            Location::Arc103,
            Department::Cs,
            "hi@rutgers.edu",
            60,
        );
        assert_ne!(e1, e2);
    }

    #[test]
    fn test_two_dates_and_timeslots_same() {
        let e1 = event(
            "09/06/2023",
            TimeSlot::Morning,
            Location::Hll114,
            Department::Iti,
            "cs@rutgers.edu",
            60,
        );
        let e2 = event(
            "09/06/2023",
            TimeSlot::Morning,
            Location::Arc103,
            Department::Cs,
            "hi@rutgers.edu",
            60,
        );
        assert_ne!(e1, e2);
    }

    #[test]
    fn test_same_key_different_payload_is_equal() {
        let e1 = event(
            "09/06/2023",
            TimeSlot::Morning,
            Location::BeAud,
            Department::Iti,
            "cs@rutgers.edu",
            60,
        );
        let e2 = event(
            "09/06/2023",
            TimeSlot::Morning,
            Location::BeAud,
            Department::Cs,
            "hi@rutgers.edu",
            90,
        );
        assert_eq!(e1, e2);
        assert!(e1.matches(e2.key()));
    }

    #[test]
    fn test_end_time() {
        let cases = [
            (TimeSlot::Morning, 60, "[End: 11:30 AM]"),
            (TimeSlot::Morning, 30, "[End: 11:00 AM]"),
            (TimeSlot::Morning, 90, "[End: 12:00 PM]"),
            (TimeSlot::Morning, 120, "[End: 12:30 PM]"),
            (TimeSlot::Afternoon, 90, "[End: 3:30 PM]"),
            (TimeSlot::Afternoon, 45, "[End: 2:45 PM]"),
            (TimeSlot::Evening, 45, "[End: 7:15 PM]"),
            (TimeSlot::Evening, 120, "[End: 8:30 PM]"),
        ];
        for (slot, minutes, expected) in cases {
            let e = event(
                "10/10/2024",
                slot,
                Location::Arc103,
                Department::Cs,
                "cs@rutgers.edu",
                minutes,
            );
            assert_eq!(e.end_time().to_string(), expected, "{slot:?} + {minutes}");
        }
    }

    #[test]
    fn test_duration_bounds() {
        assert!(EventDuration::new(29).is_err());
        assert_eq!(EventDuration::new(30).unwrap().minutes(), 30);
        assert_eq!(EventDuration::new(120).unwrap().minutes(), 120);
        assert!(EventDuration::new(121).is_err());
        assert!(EventDuration::new(-60).is_err());

        assert_eq!("75".parse::<EventDuration>().unwrap().minutes(), 75);
        assert_eq!(
            "sixty".parse::<EventDuration>(),
            Err(Error::InvalidDuration("sixty".to_string()))
        );
        assert!("99999999999999999999".parse::<EventDuration>().is_err());
    }

    #[test]
    fn test_orderings() {
        let early = event(
            "10/10/2024",
            TimeSlot::Evening,
            Location::Til232,
            Department::Math,
            "m@rutgers.edu",
            60,
        );
        let late_morning = event(
            "10/11/2024",
            TimeSlot::Morning,
            Location::Arc103,
            Department::Bait,
            "b@rutgers.edu",
            60,
        );
        let late_evening = event(
            "10/11/2024",
            TimeSlot::Evening,
            Location::Mu302,
            Department::Ee,
            "e@rutgers.edu",
            60,
        );

        assert_eq!(early.compare_by_date(&late_morning), Ordering::Less);
        assert_eq!(late_evening.compare_by_date(&late_morning), Ordering::Greater);
        assert_eq!(late_morning.compare_by_date(&late_morning), Ordering::Equal);

        assert_eq!(late_morning.compare_by_location(&late_evening), Ordering::Less);
        assert_eq!(early.compare_by_location(&late_evening), Ordering::Greater);

        assert_eq!(late_morning.compare_by_department(&late_evening), Ordering::Less);
        assert_eq!(early.compare_by_department(&late_evening), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        let e = event(
            "9/6/2023",
            TimeSlot::Afternoon,
            Location::Hll114,
            Department::Iti,
            "cs@rutgers.edu",
            90,
        );
        assert_eq!(
            e.to_string(),
            "[Event Date: 09/06/2023] [Start: 2:00 PM] [End: 3:30 PM] @HLL114 (Hill Center, Busch) \
             [Contact: Information Technology and Informatics, cs@rutgers.edu]"
        );
    }
}
