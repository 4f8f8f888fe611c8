use runclub_directory_domain::ClubRecord;
use std::cmp::Ordering;

/// Regions surfaced on the directory's summary view.
pub const SUMMARY_REGIONS: [&str; 4] = ["Manhattan", "Brooklyn", "Queens", "Bronx"];

pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// The ranked subset surfaced as highlights: clubs with at least 5 reviews or
/// a rating of 4.0+, best-rated first. The sort is stable so ties keep their
/// source order.
pub fn featured_clubs(clubs: &[ClubRecord], limit: usize) -> Vec<ClubRecord> {
    let mut featured: Vec<ClubRecord> = clubs
        .iter()
        .filter(|club| club.reviews >= 5 || club.rating >= 4.0)
        .cloned()
        .collect();

    featured.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    featured.truncate(limit);
    featured
}

/// Count records whose city falls in `region`, case-insensitively.
///
/// A few regions carry alias rules: clubs in "New York" count toward
/// Manhattan, and "Long Island City" / "Jamaica" count toward Queens. Any
/// region without a special rule matches exact-or-contains either way.
pub fn count_by_region(clubs: &[ClubRecord], region: &str) -> usize {
    let region = region.to_lowercase();
    clubs
        .iter()
        .filter(|club| {
            let city = club.city.to_lowercase();
            match region.as_str() {
                "manhattan" => city == "new york" || city.contains("manhattan"),
                "queens" => {
                    city.contains("queens") || city == "long island city" || city == "jamaica"
                }
                "brooklyn" => city == "brooklyn" || city.contains("brooklyn"),
                "bronx" => city == "bronx" || city.contains("bronx"),
                _ => city == region || city.contains(&region) || region.contains(&city),
            }
        })
        .count()
}
