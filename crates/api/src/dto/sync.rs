use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct SyncResponse {
    pub success: bool,
    pub count: usize,
}
