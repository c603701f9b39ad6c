//! Fixed catalogs: time slots, locations and departments.
//!
//! Each catalog is a closed enum whose declared order is the order used by the
//! calendar's sorted views.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{Error, Result};

/// A closed, ordered set of named values looked up from user input.
pub trait Catalog: Copy + Eq + 'static {
    /// Every value, in declared order.
    const ALL: &'static [Self];

    /// Upper-case code typed by the user, e.g. `ARC103`.
    fn code(self) -> &'static str;

    /// Position in [`Catalog::ALL`]; sorting compares this.
    fn ordinal(self) -> usize;

    /// Error reported when a token names no value of this catalog.
    fn unknown(token: &str) -> Error;

    /// Case-insensitive lookup by code.
    fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.code().eq_ignore_ascii_case(name))
    }

    /// Like [`Catalog::lookup`], failing with the catalog's own error.
    fn parse_code(name: &str) -> Result<Self> {
        Self::lookup(name).ok_or_else(|| Self::unknown(name))
    }
}

/// AM/PM label of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

/// The three bookable start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Hour on the 12-hour clock.
    pub const fn hour(self) -> u32 {
        match self {
            Self::Morning => 10,
            Self::Afternoon => 2,
            Self::Evening => 6,
        }
    }

    /// Minute past the hour.
    pub const fn minute(self) -> u32 {
        match self {
            Self::Morning | Self::Evening => 30,
            Self::Afternoon => 0,
        }
    }

    /// Only the morning slot starts before noon.
    pub const fn meridiem(self) -> Meridiem {
        match self {
            Self::Morning => Meridiem::Am,
            Self::Afternoon | Self::Evening => Meridiem::Pm,
        }
    }
}

impl Catalog for TimeSlot {
    const ALL: &'static [Self] = &[Self::Morning, Self::Afternoon, Self::Evening];

    fn code(self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Afternoon => "AFTERNOON",
            Self::Evening => "EVENING",
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    fn unknown(token: &str) -> Error {
        Error::InvalidTimeslot(token.to_string())
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_code(s)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Start: {}:{:02} {}]",
            self.hour(),
            self.minute(),
            self.meridiem()
        )
    }
}

/// Rooms events can be held in, grouped by campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Arc103,
    Hll114,
    Ab2225,
    Mu302,
    BeAud,
    Til232,
}

impl Location {
    /// Building the room is in.
    pub const fn building(self) -> &'static str {
        match self {
            Self::Arc103 => "Allison Road Classroom",
            Self::Hll114 => "Hill Center",
            Self::Ab2225 => "Academic Building",
            Self::Mu302 => "Murray Hall",
            Self::BeAud => "Beck Hall",
            Self::Til232 => "Tillet Hall",
        }
    }

    /// Campus of the building; the campus view sorts by location order.
    pub const fn campus(self) -> &'static str {
        match self {
            Self::Arc103 | Self::Hll114 => "Busch",
            Self::Ab2225 | Self::Mu302 => "College Avenue",
            Self::BeAud | Self::Til232 => "Livingston",
        }
    }
}

impl Catalog for Location {
    const ALL: &'static [Self] = &[
        Self::Arc103,
        Self::Hll114,
        Self::Ab2225,
        Self::Mu302,
        Self::BeAud,
        Self::Til232,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Arc103 => "ARC103",
            Self::Hll114 => "HLL114",
            Self::Ab2225 => "AB2225",
            Self::Mu302 => "MU302",
            Self::BeAud => "BE_AUD",
            Self::Til232 => "TIL232",
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    fn unknown(token: &str) -> Error {
        Error::InvalidLocation(token.to_string())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_code(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{} ({}, {})",
            self.code(),
            self.building(),
            self.campus()
        )
    }
}

/// Academic departments that organize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Bait,
    Cs,
    Ee,
    Iti,
    Math,
}

impl Department {
    /// Name shown in listings.
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Bait => "Business Analytics and Information Technology",
            Self::Cs => "Computer Science",
            Self::Ee => "Electrical Engineering",
            Self::Iti => "Information Technology and Informatics",
            Self::Math => "Mathematics",
        }
    }
}

impl Catalog for Department {
    const ALL: &'static [Self] = &[Self::Bait, Self::Cs, Self::Ee, Self::Iti, Self::Math];

    fn code(self) -> &'static str {
        match self {
            Self::Bait => "BAIT",
            Self::Cs => "CS",
            Self::Ee => "EE",
            Self::Iti => "ITI",
            Self::Math => "MATH",
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    // An unknown department makes the whole contact invalid.
    fn unknown(token: &str) -> Error {
        Error::InvalidContact(token.to_string())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_code(s)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Time slot row of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlotEntry {
    pub code: &'static str,
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

/// Location row of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct LocationEntry {
    pub code: &'static str,
    pub building: &'static str,
    pub campus: &'static str,
}

/// Department row of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentEntry {
    pub code: &'static str,
    pub full_name: &'static str,
}

/// Every catalog, in declared order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    pub timeslots: Vec<TimeSlotEntry>,
    pub locations: Vec<LocationEntry>,
    pub departments: Vec<DepartmentEntry>,
}

/// Builds the listing of all catalogs.
pub fn entries() -> CatalogListing {
    CatalogListing {
        timeslots: TimeSlot::ALL
            .iter()
            .map(|&slot| TimeSlotEntry {
                code: slot.code(),
                hour: slot.hour(),
                minute: slot.minute(),
                meridiem: slot.meridiem(),
            })
            .collect(),
        locations: Location::ALL
            .iter()
            .map(|&location| LocationEntry {
                code: location.code(),
                building: location.building(),
                campus: location.campus(),
            })
            .collect(),
        departments: Department::ALL
            .iter()
            .map(|&department| DepartmentEntry {
                code: department.code(),
                full_name: department.full_name(),
            })
            .collect(),
    }
}

/// Pretty-printed JSON of [`entries`].
pub fn export_to_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&entries())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(TimeSlot::lookup("morning"), Some(TimeSlot::Morning));
        assert_eq!(TimeSlot::lookup("Evening"), Some(TimeSlot::Evening));
        assert_eq!(Location::lookup("be_aud"), Some(Location::BeAud));
        assert_eq!(Location::lookup("hll114"), Some(Location::Hll114));
        assert_eq!(Department::lookup("math"), Some(Department::Math));
        assert_eq!("Cs".parse::<Department>(), Ok(Department::Cs));
    }

    #[test]
    fn test_unknown_codes_map_to_catalog_errors() {
        assert_eq!(
            "noon".parse::<TimeSlot>(),
            Err(Error::InvalidTimeslot("noon".to_string()))
        );
        assert_eq!(
            "HLL115".parse::<Location>(),
            Err(Error::InvalidLocation("HLL115".to_string()))
        );
        assert_eq!(
            "PHYS".parse::<Department>(),
            Err(Error::InvalidContact("PHYS".to_string()))
        );
        assert_eq!(Location::lookup(""), None);
    }

    #[test]
    fn test_declared_order() {
        for (index, slot) in TimeSlot::ALL.iter().enumerate() {
            assert_eq!(slot.ordinal(), index);
        }
        for (index, location) in Location::ALL.iter().enumerate() {
            assert_eq!(location.ordinal(), index);
        }
        for (index, department) in Department::ALL.iter().enumerate() {
            assert_eq!(department.ordinal(), index);
        }
        assert!(Location::Hll114.ordinal() < Location::Ab2225.ordinal());
        assert!(Department::Bait.ordinal() < Department::Cs.ordinal());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(TimeSlot::Morning.to_string(), "[Start: 10:30 AM]");
        assert_eq!(TimeSlot::Afternoon.to_string(), "[Start: 2:00 PM]");
        assert_eq!(TimeSlot::Evening.to_string(), "[Start: 6:30 PM]");
        assert_eq!(
            Location::BeAud.to_string(),
            "@BE_AUD (Beck Hall, Livingston)"
        );
        assert_eq!(
            Location::Ab2225.to_string(),
            "@AB2225 (Academic Building, College Avenue)"
        );
        assert_eq!(Department::Iti.to_string(), "Information Technology and Informatics");
    }

    #[test]
    fn test_export_to_json() {
        let json = export_to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["timeslots"].as_array().unwrap().len(), 3);
        assert_eq!(value["locations"].as_array().unwrap().len(), 6);
        assert_eq!(value["departments"].as_array().unwrap().len(), 5);
        assert_eq!(value["timeslots"][0]["meridiem"], "AM");
        assert_eq!(value["locations"][4]["code"], "BE_AUD");
        assert_eq!(value["departments"][1]["full_name"], "Computer Science");
    }
}
