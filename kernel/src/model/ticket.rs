use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

/// Payment state of a ticket, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    /// Holder attends online and does not need to be on site.
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_paid(&self) -> bool {
        self.status != TicketStatus::Reserved
    }
}
