use kernel::model::{
    booking::Booking,
    id::{BookingId, RoomId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            room_id,
            created_at,
            updated_at,
        } = value;
        Booking {
            id: booking_id,
            user_id,
            room_id,
            created_at,
            updated_at,
        }
    }
}
