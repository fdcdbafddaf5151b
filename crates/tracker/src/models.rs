/// A not-yet-submitted issue payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    /// Labels to attach; an empty list means none
    pub labels: Vec<String>,
}

/// Identifiers assigned by the tracker on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedIssue {
    pub id: u64,
    pub number: u64,
}
