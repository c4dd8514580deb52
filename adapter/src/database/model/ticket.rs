use std::str::FromStr;

use kernel::model::{
    enrollment::Enrollment,
    id::{EnrollmentId, TicketId, TicketTypeId, UserId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            created_at,
            updated_at,
        } = value;
        Enrollment {
            id: enrollment_id,
            user_id,
            name,
            created_at,
            updated_at,
        }
    }
}

// tickets joined with their ticket_types row
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
            created_at,
            updated_at,
        } = value;
        let status = TicketStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "ticket {ticket_id} has unknown status {status}"
            ))
        })?;
        Ok(Ticket {
            id: ticket_id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                id: ticket_type_id,
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
            created_at,
            updated_at,
        })
    }
}
