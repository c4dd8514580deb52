use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: Option<RoomId>,
}

impl BookingRequest {
    fn required_room_id(self) -> AppResult<RoomId> {
        self.room_id
            .ok_or_else(|| AppError::EntityNotFound("roomId is required".into()))
    }

    pub fn into_create(self, user_id: UserId) -> AppResult<CreateBooking> {
        Ok(CreateBooking::new(user_id, self.required_room_id()?))
    }

    pub fn into_update(self, booking_id: BookingId, user_id: UserId) -> AppResult<UpdateBookingRoom> {
        Ok(UpdateBookingRoom::new(
            booking_id,
            self.required_room_id()?,
            user_id,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            user_id,
            room_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            user_id,
            room_id,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}
