//! Cache key scheme, kept in one place so resolver and search agree.

pub const ALL_CLUBS: &str = "all_clubs";

pub fn club_by_id(id: &str) -> String {
    format!("club_{id}")
}

pub fn search_results(query: &str, location: &str) -> String {
    format!("search_{query}_{location}")
}
