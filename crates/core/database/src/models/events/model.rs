auto_derived!(
    /// Lifecycle of a cultural event
    #[serde(rename_all = "snake_case")]
    pub enum EventStatus {
        Scheduled,
        Completed,
        Cancelled,
    }

    /// Cultural event announced on the platform
    pub struct CulturalEvent {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Title of the event
        pub title: String,
        /// Id of the user who announced it
        pub organizer_id: String,
        /// Lifecycle state
        pub status: EventStatus,
    }
);

impl CulturalEvent {
    pub fn new(title: &str, organizer_id: &str) -> CulturalEvent {
        CulturalEvent {
            id: ulid::Ulid::new().to_string(),
            title: title.to_string(),
            organizer_id: organizer_id.to_string(),
            status: EventStatus::Scheduled,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            EventStatus::Scheduled => "scheduled",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}
