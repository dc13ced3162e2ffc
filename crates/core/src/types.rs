/// All primary keys are UUIDs issued by the auth provider / Postgres.
pub type ProfileId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
