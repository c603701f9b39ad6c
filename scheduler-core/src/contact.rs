use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::{Error, Result, catalog::Department};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^@]+@rutgers\.edu$").expect("email pattern is a valid regex")
    })
}

/// Organizer of an event: the owning department and a university email.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    department: Department,
    email: String,
}

impl Contact {
    /// Builds a contact without checking the email; see [`Contact::is_valid`].
    pub fn new(department: Department, email: impl Into<String>) -> Self {
        Self {
            department,
            email: email.into(),
        }
    }

    /// Looks up the department and checks the email shape in one step.
    pub fn parse(department: &str, email: &str) -> Result<Self> {
        let department = department.parse::<Department>()?;
        let contact = Self::new(department, email);
        if contact.is_valid() {
            Ok(contact)
        } else {
            Err(Error::InvalidContact(email.to_string()))
        }
    }

    /// Organizing department.
    pub const fn department(&self) -> Department {
        self.department
    }

    /// Email address as given.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True when the email is `<local-part>@rutgers.edu`.
    pub fn is_valid(&self) -> bool {
        email_pattern().is_match(&self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Contact: {}, {}]", self.department, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        let valid = ["cs@rutgers.edu", "first.last@rutgers.edu", "a+b@rutgers.edu"];
        for email in valid {
            assert!(Contact::new(Department::Cs, email).is_valid(), "{email}");
        }

        let invalid = [
            "@rutgers.edu",
            "cs@rutgers.com",
            "cs@rutgers.edu.org",
            "cs@@rutgers.edu",
            "cs@scarletmail.rutgers.edu",
            "csrutgers.edu",
            "cs@rutgersXedu",
            "",
        ];
        for email in invalid {
            assert!(!Contact::new(Department::Cs, email).is_valid(), "{email}");
        }
    }

    #[test]
    fn test_parse_checks_department_then_email() {
        let contact = Contact::parse("ee", "ee@rutgers.edu").unwrap();
        assert_eq!(contact.department(), Department::Ee);
        assert_eq!(contact.email(), "ee@rutgers.edu");

        assert_eq!(
            Contact::parse("physics", "ee@rutgers.edu"),
            Err(Error::InvalidContact("physics".to_string()))
        );
        assert_eq!(
            Contact::parse("EE", "ee@gmail.com"),
            Err(Error::InvalidContact("ee@gmail.com".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let contact = Contact::new(Department::Math, "math@rutgers.edu");
        assert_eq!(
            contact.to_string(),
            "[Contact: Mathematics, math@rutgers.edu]"
        );
    }
}
