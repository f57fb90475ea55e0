use serde::{Deserialize, Serialize};

/// Case state derived from the presence of dependent rows.
///
/// The schema stores no status column; state transitions are append-only row
/// creations and the current status is computed, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum CaseStatus {
    /// Application exists, no assessment yet.
    Received,
    /// An assessment row has been recorded.
    Assessed,
    /// A licence has been issued.
    Issued,
    /// The issued licence has at least one amendment.
    Amended,
    /// The applicant withdrew the application.
    Withdrawn,
    /// The licensing authority revoked the licence.
    Revoked,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaseStatusDto {
    pub application_id: i32,
    pub status: CaseStatus,
}
