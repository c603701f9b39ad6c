use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Result;
use scheduler_core::prelude::*;

/// Environment variable that pins "today" when `--today` is not given
pub const TODAY_ENV: &str = "SCHEDULER_TODAY";

/// Resolves the booking window: `--today`, then `SCHEDULER_TODAY`, then the
/// host clock.
fn booking_window(today: Option<String>) -> Result<BookingWindow> {
    resolve_booking_window(today, env::var(TODAY_ENV).ok())
}

fn resolve_booking_window(
    today: Option<String>,
    env_today: Option<String>,
) -> Result<BookingWindow> {
    let window = match today.or(env_today) {
        Some(text) => {
            tracing::info!("using pinned date {} for the booking window", text);
            BookingWindow::from_today_str(&text)
                .map_err(|e| anyhow::anyhow!("invalid reference date '{}': {}", text, e))?
        }
        None => BookingWindow::from_clock()?,
    };

    tracing::debug!(
        "booking window: after {} until {}",
        window.today(),
        window.limit()
    );
    Ok(window)
}

/// Interactive command loop
pub fn run_command(input: Option<PathBuf>, today: Option<String>) -> Result<()> {
    let window = booking_window(today)?;
    let mut organizer = EventOrganizer::new(window);

    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    println!("{}", RUNNING_MESSAGE);

    for line in reader.lines() {
        let line = line?;
        let outcome = organizer.execute_line(&line);

        if let Some(message) = outcome.message() {
            println!("{}", message);
        }
        if outcome.is_quit() {
            return Ok(());
        }
    }

    tracing::info!(
        "input ended without quit, {} event(s) on the calendar",
        organizer.calendar().len()
    );
    Ok(())
}

/// Catalog listing command
pub fn catalog_command(json: bool) -> Result<()> {
    if json {
        println!("{}", scheduler_core::catalog::export_to_json()?);
        return Ok(());
    }

    let listing = scheduler_core::catalog::entries();

    println!("Time slots:");
    for slot in &listing.timeslots {
        println!(
            "  {} - {}:{:02} {}",
            slot.code, slot.hour, slot.minute, slot.meridiem
        );
    }

    println!("Locations:");
    for location in &listing.locations {
        println!(
            "  {} - {}, {}",
            location.code, location.building, location.campus
        );
    }

    println!("Departments:");
    for department in &listing.departments {
        println!("  {} - {}", department.code, department.full_name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        text.parse().unwrap()
    }

    #[test]
    fn test_explicit_today_wins_over_env() {
        let window = resolve_booking_window(
            Some("10/18/2026".to_string()),
            Some("01/05/2025".to_string()),
        )
        .unwrap();
        assert_eq!(window.today(), date("10/18/2026"));
        assert_eq!(window.limit(), date("4/18/2027"));
    }

    #[test]
    fn test_env_today_used_without_flag() {
        let window = resolve_booking_window(None, Some("01/05/2025".to_string())).unwrap();
        assert_eq!(window.today(), date("1/5/2025"));
        assert_eq!(window.limit(), date("7/5/2025"));
    }

    #[test]
    fn test_invalid_today_is_rejected() {
        let err = resolve_booking_window(Some("2/30/2026".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("invalid reference date '2/30/2026'"));

        assert!(resolve_booking_window(None, Some("tomorrow".to_string())).is_err());
    }

    #[test]
    fn test_clock_used_without_pinned_date() {
        let window = resolve_booking_window(None, None).unwrap();
        assert!(window.today() < window.limit());
    }

    #[test]
    fn test_booking_window_prefers_flag() {
        let window = booking_window(Some("10/18/2026".to_string())).unwrap();
        assert_eq!(window.today(), date("10/18/2026"));
    }
}
