use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{enrollment::Enrollment, id::UserId},
    repository::enrollment::EnrollmentRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::ticket::EnrollmentRow, ConnectionPool};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, EnrollmentRow>(
            r#"
                SELECT enrollment_id, user_id, name, created_at, updated_at
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Enrollment::from))
        .map_err(AppError::SpecificOperationError)
    }
}
