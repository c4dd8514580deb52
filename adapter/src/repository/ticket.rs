use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{id::EnrollmentId, ticket::Ticket},
    repository::ticket::TicketRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::TicketRow, ConnectionPool};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT
                    t.ticket_id,
                    t.enrollment_id,
                    t.status,
                    tt.ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel,
                    t.created_at,
                    t.updated_at
                FROM tickets AS t
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
                WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Ticket::try_from).transpose()
    }
}
