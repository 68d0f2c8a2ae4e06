//! Date and Time with chrono
//!
//! Run with: cargo run --bin p17_datetime

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

fn now_and_construction() {
    println!("=== Now and Construction ===\n");

    let utc_now = Utc::now();
    let local_now = Local::now();
    println!("UTC now:   {}", utc_now);
    println!("local now: {}", local_now);
    println!("timestamp: {}", utc_now.timestamp());

    // Construction is fallible: February 30th is an error, not a panic.
    let date = NaiveDate::from_ymd_opt(2024, 3, 15);
    println!("2024-03-15:  {:?}", date);
    println!("2024-02-30:  {:?}", NaiveDate::from_ymd_opt(2024, 2, 30));

    if let Some(dt) = date.and_then(|d| d.and_hms_opt(10, 30, 0)) {
        println!("with time:   {}", dt);
        let as_utc: DateTime<Utc> = Utc.from_utc_datetime(&dt);
        println!("as UTC:      {}", as_utc);
    }
}

fn parsing() {
    println!("\n=== Parsing ===\n");

    let parsed = NaiveDateTime::parse_from_str("2024-03-15 10:30:00", "%Y-%m-%d %H:%M:%S");
    println!("custom format: {:?}", parsed);

    let rfc3339 = DateTime::parse_from_rfc3339("2024-03-15T10:30:00+02:00");
    println!("RFC 3339:      {:?}", rfc3339);

    let date_only = "2024-03-15".parse::<NaiveDate>();
    println!("FromStr date:  {:?}", date_only);

    let bad = NaiveDate::parse_from_str("15/03/2024", "%Y-%m-%d");
    println!("mismatch err:  {}", bad.unwrap_err());
}

fn formatting() {
    println!("\n=== Formatting ===\n");

    let dt = Utc
        .with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
        .single()
        .expect("valid fixed timestamp");

    println!("%Y-%m-%d %H:%M:%S -> {}", dt.format("%Y-%m-%d %H:%M:%S"));
    println!("%A, %B %d, %Y     -> {}", dt.format("%A, %B %d, %Y"));
    println!("RFC 3339          -> {}", dt.to_rfc3339());
    println!("accessors: year={} month={} day={} hour={}", dt.year(), dt.month(), dt.day(), dt.hour());
}

fn arithmetic() {
    println!("\n=== Arithmetic ===\n");

    let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let tomorrow = today + Duration::days(1);
    let yesterday = today - Duration::days(1);
    println!("today:     {} ({})", today, today.weekday());
    println!("tomorrow:  {}", tomorrow);
    println!("yesterday: {}", yesterday);

    let deadline = NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid date");
    let remaining = deadline - today;
    println!("days until deadline: {}", remaining.num_days());

    let start = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).single().expect("valid");
    let end = start + Duration::hours(2) + Duration::minutes(30);
    println!("meeting: {} -> {} ({} min)", start.time(), end.time(), (end - start).num_minutes());
}

fn leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn calendar_helpers() {
    println!("\n=== Calendar Helpers ===\n");

    for year in [2023, 2024, 1900, 2000] {
        println!("{} leap year? {}", year, leap_year(year));
    }

    let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    println!("day of year: {}", date.ordinal());
    println!("ISO week:    {:?}", date.iso_week().week());
}

fn main() {
    println!("=== Date and Time Demo ===\n");

    now_and_construction();
    parsing();
    formatting();
    arithmetic();
    calendar_helpers();

    println!("\n=== Key Points ===");
    println!("1. Construction and parsing return Option/Result, not panics");
    println!("2. Naive types have no zone; DateTime<Utc>/<Local> do");
    println!("3. Duration arithmetic works directly on dates and times");
    println!("4. strftime-style patterns drive both parsing and formatting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_round_trip() {
        let text = "2024-03-15 10:30:00";
        let parsed = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").expect("parses");
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), text);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(NaiveDate::from_ymd_opt(2024, 2, 30).is_none());
        assert!(NaiveDate::from_ymd_opt(2023, 2, 29).is_none());
        assert!(NaiveDate::from_ymd_opt(2024, 2, 29).is_some());
    }

    #[test]
    fn day_arithmetic() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(date + Duration::days(1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(date + Duration::days(2), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn leap_year_rules() {
        assert!(leap_year(2024));
        assert!(leap_year(2000));
        assert!(!leap_year(1900));
        assert!(!leap_year(2023));
    }

    #[test]
    fn duration_between_instants() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).single().unwrap();
        assert_eq!((end - start).num_hours(), 30);
    }
}
