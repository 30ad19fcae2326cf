use serde::Serialize;

/// One offered activity. The activity name is the roster map key rather
/// than a field here, so listings serialize straight to the name-keyed
/// JSON object the frontend consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity bound; 0 means unlimited.
    pub max_participants: u32,
    /// Participant emails in signup order. Treated as a set: the roster
    /// never inserts an email twice.
    pub participants: Vec<String>,
}
