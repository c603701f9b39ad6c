//! The command interpreter: validates command fields, applies them to the
//! calendar and produces the text to show the user.

use crate::{
    Result,
    calendar::{CalendarView, EventCalendar},
    catalog::{Location, TimeSlot},
    command::{AddArgs, CancelArgs, Command},
    contact::Contact,
    date::{BookingWindow, CalendarDate},
    event::{Event, EventDuration, EventKey},
};

/// Printed when the run loop starts
pub const RUNNING_MESSAGE: &str = "Event Organizer running...";
/// Reply to `Q`
pub const TERMINATED_MESSAGE: &str = "Event Organizer terminated.";
pub const ADDED_MESSAGE: &str = "Event added to the calendar.";
pub const REMOVED_MESSAGE: &str = "Event has been removed from the calendar!";

/// What the run loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; print the message if there is one
    Continue(Option<String>),
    /// Print the message and stop
    Quit(String),
}

impl Outcome {
    fn say(message: impl Into<String>) -> Self {
        Self::Continue(Some(message.into()))
    }

    /// Text to print for this outcome, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Continue(message) => message.as_deref(),
            Self::Quit(message) => Some(message),
        }
    }

    /// True when the run loop should stop.
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit(_))
    }
}

/// Owns the calendar for one run and executes commands against it.
#[derive(Debug)]
pub struct EventOrganizer {
    calendar: EventCalendar,
    window: BookingWindow,
}

impl EventOrganizer {
    /// Organizer with an empty calendar, booking within `window`.
    pub fn new(window: BookingWindow) -> Self {
        Self {
            calendar: EventCalendar::new(),
            window,
        }
    }

    /// The calendar as it stands after the last command.
    pub const fn calendar(&self) -> &EventCalendar {
        &self.calendar
    }

    /// Parses and executes one input line. Errors are reported, never raised.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => Outcome::say(err.to_string()),
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!("executing {:?}", command);
        match command {
            Command::Add(args) => Self::report(self.add_event(&args)),
            Command::Cancel(args) => Self::report(self.cancel_event(&args)),
            Command::Print => Outcome::say(self.calendar.print()),
            Command::PrintByDate => Outcome::say(self.calendar.render(CalendarView::ByDate)),
            Command::PrintByCampus => Outcome::say(self.calendar.render(CalendarView::ByCampus)),
            Command::PrintByDepartment => {
                Outcome::say(self.calendar.render(CalendarView::ByDepartment))
            }
            Command::Quit => Outcome::Quit(TERMINATED_MESSAGE.to_string()),
            Command::Empty => Outcome::Continue(None),
            Command::Unknown(token) => Outcome::say(format!("{token} is an invalid command!")),
        }
    }

    /// Validates every field of an `A` command and books the event.
    ///
    /// Fields are checked in input order; the first failure wins.
    pub fn add_event(&mut self, args: &AddArgs) -> Result<&'static str> {
        let key = self.event_key(&args.date, &args.timeslot, &args.location)?;
        let contact = Contact::parse(&args.department, &args.email)?;
        let duration = args.duration.parse::<EventDuration>()?;

        self.calendar.add(Event::new(key, contact, duration))?;
        Ok(ADDED_MESSAGE)
    }

    /// Validates the key fields of an `R` command and cancels the event.
    pub fn cancel_event(&mut self, args: &CancelArgs) -> Result<&'static str> {
        let key = self.event_key(&args.date, &args.timeslot, &args.location)?;
        self.calendar.remove(&key)?;
        Ok(REMOVED_MESSAGE)
    }

    fn event_key(&self, date: &str, timeslot: &str, location: &str) -> Result<EventKey> {
        let parsed = CalendarDate::parse(date)?;
        self.window.check(&parsed, date)?;
        let timeslot = timeslot.parse::<TimeSlot>()?;
        let location = location.parse::<Location>()?;
        Ok(EventKey::new(parsed, timeslot, location))
    }

    fn report(result: Result<&'static str>) -> Outcome {
        match result {
            Ok(message) => Outcome::say(message),
            Err(err) => {
                tracing::debug!("command rejected: {:?}", err);
                Outcome::say(err.to_string())
            }
        }
    }
}
