//! Output formatting.
//!
//! Pure string building for the text output of each command, plus a JSON
//! helper. Nothing in here decides what to show.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::config::MAX_DETAIL_EVENTS;
use crate::distance::RankedVenue;
use crate::models::{Event, Venue};
use crate::schedule::{Schedule, ScheduledVenue, ACCEPTED_DAY_FORMS};

pub const NO_MATCHES: &str = "No fish fries found matching your criteria.";
pub const NO_EVENTS_ON_DATE: &str = "No fish fries scheduled for this date in our data.";

/// Renders any result record as pretty-printed JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// "4:00 PM"
fn clock(time: &NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// "4:00 PM - 7:00 PM", or just the start time when the end is unknown.
pub fn format_time_range(event: &Event) -> String {
    match &event.end {
        Some(end) => format!("{} - {}", clock(&event.start), clock(end)),
        None => clock(&event.start),
    }
}

/// "Fri Mar 07: 4:00 PM - 7:00 PM"
pub fn format_event(event: &Event) -> String {
    format!(
        "{}: {}",
        event.start.format("%a %b %d"),
        format_time_range(event)
    )
}

/// Summary card for one venue, with its distance when known.
pub fn format_venue(venue: &Venue, distance_miles: Option<f64>) -> String {
    let mut lines = vec![
        format!("🐟 {}", venue.name),
        format!("   Type: {}", venue.venue_type),
    ];
    if let Some(d) = distance_miles {
        lines.push(format!("   Distance: {d:.1} miles"));
    }
    if !venue.address.is_empty() {
        lines.push(format!("   Address: {}", venue.address));
    }

    let features: Vec<&str> = venue.feature_list().iter().map(|f| f.label()).collect();
    if !features.is_empty() {
        lines.push(format!("   Features: {}", features.join(", ")));
    }

    if let Some(etc) = &venue.etc {
        lines.push(format!("   Hours: {etc}"));
    }
    if let Some(phone) = &venue.phone {
        lines.push(format!("   Phone: {phone}"));
    }
    if let Some(website) = &venue.website {
        lines.push(format!("   Web: {website}"));
    }
    lines.join("\n")
}

/// Summary card plus menu, notes, email and the first events.
pub fn format_venue_details(venue: &Venue) -> String {
    let mut lines = vec![format_venue(venue, None)];

    if let Some(email) = &venue.email {
        lines.push(format!("   Email: {email}"));
    }
    if let Some(menu) = &venue.menu_text {
        lines.push(format!("\n   📋 Menu: {menu}"));
    }
    if let Some(url) = &venue.menu_url {
        lines.push(format!("   Menu URL: {url}"));
    }
    if let Some(notes) = &venue.notes {
        lines.push(format!("\n   📝 Notes: {notes}"));
    }

    if !venue.events.is_empty() {
        lines.push("\n   📅 Schedule:".to_string());
        lines.extend(
            venue
                .events
                .iter()
                .take(MAX_DETAIL_EVENTS)
                .map(|e| format!("      {}", format_event(e))),
        );
        if venue.events.len() > MAX_DETAIL_EVENTS {
            lines.push(format!(
                "      ... and {} more",
                venue.events.len() - MAX_DETAIL_EVENTS
            ));
        }
    }
    lines.join("\n")
}

fn cards(cards: impl Iterator<Item = String>) -> String {
    cards.collect::<Vec<_>>().join("\n\n")
}

/// Search results, nearest first. `total` counts matches before the limit.
pub fn format_search_results(results: &[RankedVenue<'_>], total: usize) -> String {
    if results.is_empty() {
        return NO_MATCHES.to_string();
    }
    format!(
        "Found {} fish fries. Showing nearest {}:\n\n{}",
        total,
        results.len(),
        cards(
            results
                .iter()
                .map(|r| format_venue(r.venue, Some(r.distance_miles)))
        )
    )
}

pub fn format_list(venues: &[&Venue]) -> String {
    if venues.is_empty() {
        return NO_MATCHES.to_string();
    }
    format!(
        "Found {} fish fries:\n\n{}",
        venues.len(),
        cards(venues.iter().map(|v| format_venue(v, None)))
    )
}

pub fn format_details(query: &str, matches: &[&Venue]) -> String {
    let body = cards(matches.iter().map(|v| format_venue_details(v)));
    if matches.len() > 1 {
        format!("Multiple venues match '{query}':\n\n{body}")
    } else {
        body
    }
}

pub fn format_unknown_venue(query: &str, suggestions: &[&str]) -> String {
    let mut text = format!("No venue found matching: {query}");
    if !suggestions.is_empty() {
        text.push_str("\n\nDid you mean:");
        for name in suggestions {
            text.push_str(&format!("\n  - {name}"));
        }
    }
    text
}

pub fn format_unknown_location(query: &str) -> String {
    format!("Could not find location: {query}")
}

pub fn format_bad_day(input: &str) -> String {
    format!("Could not parse date: {input}\nUse: {ACCEPTED_DAY_FORMS}")
}

fn format_schedule_entry(entry: &ScheduledVenue<'_>) -> String {
    let time = if entry.event.end.is_some() {
        format_time_range(entry.event)
    } else {
        "Check venue".to_string()
    };
    let mut lines = vec![
        format!("🐟 {} ({})", entry.venue.name, entry.venue.venue_type),
        format!("   Time: {time}"),
        format!("   Address: {}", entry.venue.address),
    ];
    if let Some(phone) = &entry.venue.phone {
        lines.push(format!("   Phone: {phone}"));
    }
    lines.join("\n")
}

/// "Friday, March 07, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

pub fn format_schedule(schedule: &Schedule<'_>) -> String {
    let mut text = format!("Fish fries on {}:\n\n", format_long_date(schedule.date));
    if schedule.entries.is_empty() {
        text.push_str(NO_EVENTS_ON_DATE);
    } else {
        text.push_str(&format!(
            "Found {} fish fries:\n\n{}",
            schedule.entries.len(),
            cards(schedule.entries.iter().map(format_schedule_entry))
        ));
    }
    if let Some(notice) = &schedule.notice {
        text.push_str(&format!("\n\nNote: {notice}"));
    }
    text
}

pub fn format_update(venue_count: usize) -> String {
    format!("Updated cache with {venue_count} venues.")
}
