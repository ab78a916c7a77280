//! Plain-text rendering of session state for the terminal.

use std::fmt::Write as _;

use eatnear_core::{PlaceDetail, SearchResult, Suggestion};
use eatnear_session::{Marker, MarkerKind, RadiusCircle};

const DASH: &str = "\u{2014}";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(DASH)
}

fn fmt_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| DASH.to_string(), |r| format!("{r:.1}"))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Table of nearby results in arrival order.
pub(crate) fn results_table(results: &[SearchResult]) -> String {
    let mut out = format!("{:<4}{:<7}{:<6}{:<42}VICINITY\n", "#", "OPEN", "RATE", "NAME");
    for (i, r) in results.iter().enumerate() {
        let open = match r.open_now {
            Some(true) => "yes",
            Some(false) => "no",
            None => DASH,
        };
        let _ = writeln!(
            out,
            "{:<4}{:<7}{:<6}{:<42}{}",
            i + 1,
            open,
            fmt_rating(r.rating),
            truncate(&r.name, 38),
            or_dash(r.vicinity.as_deref()),
        );
    }
    out
}

pub(crate) fn overlay_summary(markers: &[Marker], circle: &RadiusCircle) -> String {
    let results = markers
        .iter()
        .filter(|m| m.kind == MarkerKind::Result)
        .count();
    let mut out = String::new();
    for m in markers.iter().filter(|m| m.kind == MarkerKind::Origin) {
        let _ = writeln!(
            out,
            "origin [{}] at {}",
            m.label.unwrap_or(DASH),
            m.position
        );
    }
    let _ = writeln!(
        out,
        "{results} result markers, search radius {} m",
        circle.radius_m
    );
    out
}

pub(crate) fn suggestions_list(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    for (i, s) in suggestions.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, s.description);
    }
    out
}

/// The detail panel: summary lines, weekly hours, reviews, then photo links.
pub(crate) fn detail_panel(detail: &PlaceDetail, photo_urls: &[String]) -> String {
    let mut out = String::new();
    let open_line = detail
        .opening_hours
        .as_ref()
        .and_then(|h| h.open_now)
        .map(|open| if open { "Open now" } else { "Closed" });

    let _ = writeln!(out, "{}", detail.name);
    if let Some(line) = open_line {
        let _ = writeln!(out, "{line}");
    }
    if let Some(status) = detail.business_status.as_deref() {
        let _ = writeln!(out, "{status}");
    }
    let _ = writeln!(out, "Address:  {}", or_dash(detail.formatted_address.as_deref()));
    let _ = writeln!(out, "Vicinity: {}", or_dash(detail.vicinity.as_deref()));
    let _ = writeln!(
        out,
        "Phone:    {}",
        or_dash(detail.formatted_phone_number.as_deref())
    );
    let _ = writeln!(out, "Rating:   {}", fmt_rating(detail.rating));

    let _ = writeln!(out, "\nHours:");
    match &detail.opening_hours {
        Some(hours) if !hours.weekday_text.is_empty() => {
            for day in &hours.weekday_text {
                let _ = writeln!(out, "  {day}");
            }
        }
        _ => {
            let _ = writeln!(out, "  {DASH}");
        }
    }

    let _ = writeln!(out, "\nReviews:");
    if detail.reviews.is_empty() {
        let _ = writeln!(out, "  {DASH}");
    }
    for review in &detail.reviews {
        let when = review
            .relative_time_description
            .clone()
            .or_else(|| review.posted_at().map(|t| t.format("%Y-%m-%d").to_string()))
            .unwrap_or_else(|| DASH.to_string());
        let _ = writeln!(
            out,
            "  {} ({}, {})",
            review.author_name,
            fmt_rating(review.rating),
            when
        );
        if !review.text.is_empty() {
            let _ = writeln!(out, "    {}", review.text);
        }
    }

    if !photo_urls.is_empty() {
        let _ = writeln!(out, "\nPhotos:");
        for url in photo_urls {
            let _ = writeln!(out, "  {url}");
        }
    }
    out
}
