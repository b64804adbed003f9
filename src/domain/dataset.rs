// Dataset identifiers
/// Reserved identifier for the aggregate view across all datasets.
pub const ARCHIVE_ID: &str = "archive";

pub fn is_archive(dataset_id: &str) -> bool {
    dataset_id == ARCHIVE_ID
}
