//! Event Scheduler Core Library
//!
//! This library provides the event calendar, its validation rules and the
//! line-oriented command interpreter used by the `scheduler` binary.

pub mod calendar;
pub mod catalog;
pub mod command;
pub mod contact;
pub mod date;
pub mod error;
pub mod event;
pub mod organizer;

// Re-export core types and error handling
pub use error::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use crate::{
        calendar::*, catalog::*, command::*, contact::*, date::*, event::*, organizer::*,
    };
}
