use std::sync::Arc;

use crate::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingRoom},
            Booking,
        },
        eligibility::EligibilityRule,
        id::{BookingId, RoomId, UserId},
    },
    repository::{booking::BookingRepository, hotel::HotelRepository},
    service::eligibility::EligibilityGate,
};
use derive_new::new;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingService {
    gate: EligibilityGate,
    hotel_repository: Arc<dyn HotelRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub async fn get_booking(&self, user_id: UserId) -> AppResult<Booking> {
        self.gate
            .check(user_id, EligibilityRule::BOOKING_READ)
            .await?;

        self.booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("user {user_id} has no booking")))
    }

    pub async fn create_booking(&self, event: CreateBooking) -> AppResult<Booking> {
        self.gate
            .check(event.user_id, EligibilityRule::BOOKING_CREATE)
            .await?;
        self.ensure_room_exists(event.room_id).await?;

        if self
            .booking_repository
            .find_by_user_id(event.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::ForbiddenOperation(format!(
                "user {} already has a booking",
                event.user_id
            )));
        }

        let booking = self.booking_repository.create(event).await?;
        tracing::info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            room_id = %booking.room_id,
            "booking created"
        );
        Ok(booking)
    }

    pub async fn update_booking(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        self.gate
            .check(event.requested_user, EligibilityRule::BOOKING_UPDATE)
            .await?;
        self.ensure_room_exists(event.room_id).await?;

        match self
            .booking_repository
            .find_by_user_id(event.requested_user)
            .await?
        {
            Some(owned) if owned.id == event.booking_id => {}
            _ => {
                return Err(AppError::UnauthorizedError(format!(
                    "booking {} does not belong to user {}",
                    event.booking_id, event.requested_user
                )))
            }
        }

        let booking_id = event.booking_id;
        self.booking_repository.update_room(event).await?;
        Ok(booking_id)
    }

    async fn ensure_room_exists(&self, room_id: RoomId) -> AppResult<()> {
        self.hotel_repository
            .find_room_by_id(room_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::EntityNotFound(format!("room {room_id} not found")))
    }
}
