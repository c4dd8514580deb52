use crate::model::{id::EnrollmentId, ticket::Ticket};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Returns the enrollment's ticket together with its ticket type.
    async fn find_by_enrollment_id(&self, enrollment_id: EnrollmentId) -> AppResult<Option<Ticket>>;
}
