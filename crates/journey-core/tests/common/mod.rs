use journey_core::{params::CreateTrip, SqliteStore, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store
pub async fn create_test_store() -> (TempDir, SqliteStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Trip creation parameters for a trip to Paris starting 2024-05-01.
pub fn paris_trip(invitees: &[&str]) -> CreateTrip {
    CreateTrip {
        destination: "Paris".to_string(),
        owner_name: "Ana".to_string(),
        owner_email: "a@b.com".to_string(),
        starts_at: "2024-05-01T09:00:00Z".parse().expect("valid timestamp"),
        emails_to_invite: invitees.iter().map(ToString::to_string).collect(),
    }
}
