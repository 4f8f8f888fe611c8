use runclub_directory_application::services::images::display_image_url;
use runclub_directory_domain::ClubRecord;
use serde::Serialize;

/// A club as rendered to clients: the record plus its assigned display
/// image. Image assignment happens here, at presentation time, never in the
/// cache.
#[derive(Serialize, Debug, Clone)]
pub struct ClubResponse {
    #[serde(flatten)]
    pub club: ClubRecord,
    pub image_url: String,
}

impl From<&ClubRecord> for ClubResponse {
    fn from(club: &ClubRecord) -> Self {
        Self {
            image_url: display_image_url(club),
            club: club.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ClubsResponse {
    pub clubs: Vec<ClubResponse>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
