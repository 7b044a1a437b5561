/// Identifiers handed out by the research drive API are 64-bit integers.
pub type DbId = i64;

/// All timestamps on the wire are ISO 8601 in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
