use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Stores a new booking. Fails with `ForbiddenOperation` when the user
    /// already holds one.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    /// Moves the booking to another room. Fails with `UnauthorizedError` when
    /// the booking does not belong to the requesting user.
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<()>;
}
