use runclub_directory_domain::ClubRecord;
use url::Url;

/// Stock images used when a record carries no usable photo. Order matters:
/// the deterministic index below must keep pointing at the same image for the
/// same record across requests and cache misses.
const FALLBACK_IMAGES: [&str; 10] = [
    "https://images.unsplash.com/photo-1544913938-d00ddaf2e19b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1461731449317-d19e139fb625?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1552674605-db6ffd4facb5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1486218119243-13883505764c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1502904550040-7534597429ae?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1544966503-7cc5ac882d5d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1566027964239-ede2e76370e4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
];

/// Seed strings shorter than this are too low-entropy to spread records
/// across the fallback list, so the record id is used instead.
const MIN_SEED_LEN: usize = 8;

/// The display image for a record.
///
/// A supplied photo URL is used as-is when it parses and its host is not
/// denylisted. Otherwise the record hashes onto one of the stock images, so
/// the same record always renders the same image without persisting a choice.
pub fn display_image_url(club: &ClubRecord) -> String {
    if let Some(photo) = club.photo.as_deref() {
        if let Ok(url) = Url::parse(photo) {
            if !is_denied_host(&url) {
                return photo.to_string();
            }
        }
    }

    let seed = club
        .photo
        .as_deref()
        .filter(|p| p.len() >= MIN_SEED_LEN)
        .unwrap_or(&club.id);
    let index = seed.chars().map(|c| c as usize).sum::<usize>() % FALLBACK_IMAGES.len();
    FALLBACK_IMAGES[index].to_string()
}

/// Two unreliable hosts are rejected: the googleusercontent photo CDN when
/// the path is not the canonical `/p/` shape (those links frequently return
/// access errors), and street-view imagery, which is never a club photo.
fn is_denied_host(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return true;
    };
    if host.contains("streetviewpixels") {
        return true;
    }
    if host.ends_with("googleusercontent.com") && !url.path().starts_with("/p/") {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::resolver::seed_clubs;

    fn club_with_photo(photo: Option<&str>) -> ClubRecord {
        let mut club = seed_clubs().remove(0);
        club.photo = photo.map(str::to_string);
        club
    }

    #[test]
    fn valid_photo_url_is_returned_as_is() {
        let club = club_with_photo(Some("https://example.com/club.jpg"));
        assert_eq!(display_image_url(&club), "https://example.com/club.jpg");
    }

    #[test]
    fn missing_or_invalid_photo_falls_back_deterministically() {
        let without = club_with_photo(None);
        let first = display_image_url(&without);
        assert_eq!(display_image_url(&without), first);
        assert!(FALLBACK_IMAGES.contains(&first.as_str()));

        let invalid = club_with_photo(Some("not a url"));
        let picked = display_image_url(&invalid);
        assert_eq!(display_image_url(&invalid), picked);
    }

    #[test]
    fn streetview_host_is_always_rejected() {
        let club = club_with_photo(Some(
            "https://streetviewpixels-pa.googleapis.com/v1/thumbnail?panoid=abc",
        ));
        let url = display_image_url(&club);
        assert!(FALLBACK_IMAGES.contains(&url.as_str()));
    }

    #[test]
    fn photo_cdn_rejected_unless_canonical_path() {
        let bad = club_with_photo(Some("https://lh3.googleusercontent.com/gps-cs-s/abc123"));
        assert!(FALLBACK_IMAGES.contains(&display_image_url(&bad).as_str()));

        let good = club_with_photo(Some("https://lh3.googleusercontent.com/p/abc123"));
        assert_eq!(
            display_image_url(&good),
            "https://lh3.googleusercontent.com/p/abc123"
        );
    }

    #[test]
    fn short_photo_seed_falls_back_to_id() {
        let short = club_with_photo(Some("x"));
        let by_id = club_with_photo(None);
        assert_eq!(display_image_url(&short), display_image_url(&by_id));
    }
}
