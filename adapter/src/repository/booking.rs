use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingRoom},
            Booking,
        },
        id::{BookingId, UserId},
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // A user holds at most one booking. Inserts racing past this check
        // are stopped by the unique constraint on bookings.user_id.
        {
            let existing = sqlx::query_scalar::<_, BookingId>(
                r#"
                    SELECT booking_id
                    FROM bookings
                    WHERE user_id = $1
                "#,
            )
            .bind(event.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if let Some(booking_id) = existing {
                return Err(AppError::ForbiddenOperation(format!(
                    "user {} already holds booking {booking_id}",
                    event.user_id
                )));
            }
        }

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING booking_id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| insert_error(e, &event))?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Booking::from(row))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, user_id, room_id, created_at, updated_at
                FROM bookings
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Booking::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $1
                WHERE booking_id = $2 AND user_id = $3
            "#,
        )
        .bind(event.room_id)
        .bind(event.booking_id)
        .bind(event.requested_user)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::EntityNotFound(format!("room {} not found", event.room_id))
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::UnauthorizedError(format!(
                "booking {} does not belong to user {}",
                event.booking_id, event.requested_user
            )));
        }

        Ok(())
    }
}

fn insert_error(err: sqlx::Error, event: &CreateBooking) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::ForbiddenOperation(
            format!("user {} already holds a booking", event.user_id),
        ),
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::EntityNotFound(format!("room {} not found", event.room_id))
        }
        _ => AppError::SpecificOperationError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::RoomId;

    #[sqlx::test(fixtures("../../fixtures/booking.sql"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_and_move_booking(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        let user_id = UserId::new(1);

        let created = repo
            .create(CreateBooking::new(user_id, RoomId::new(1)))
            .await?;
        assert_eq!(created.user_id, user_id);
        assert_eq!(created.room_id, RoomId::new(1));

        let second = repo.create(CreateBooking::new(user_id, RoomId::new(2))).await;
        assert!(matches!(second, Err(AppError::ForbiddenOperation(_))));

        repo.update_room(UpdateBookingRoom::new(created.id, RoomId::new(2), user_id))
            .await?;
        let moved = repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("booking disappeared"))?;
        assert_eq!(moved.id, created.id);
        assert_eq!(moved.room_id, RoomId::new(2));
        assert_eq!(moved.created_at, created.created_at);
        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/booking.sql"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_update_requires_ownership(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        let created = repo
            .create(CreateBooking::new(UserId::new(1), RoomId::new(1)))
            .await?;

        let res = repo
            .update_room(UpdateBookingRoom::new(
                created.id,
                RoomId::new(2),
                UserId::new(2),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnauthorizedError(_))));
        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/booking.sql"))]
    #[ignore = "requires DATABASE_URL"]
    async fn test_unknown_room_is_not_found(pool: sqlx::PgPool) {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo
            .create(CreateBooking::new(UserId::new(1), RoomId::new(999)))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }
}
