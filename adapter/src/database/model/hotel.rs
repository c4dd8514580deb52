use kernel::model::{
    hotel::{Hotel, Room},
    id::{HotelId, RoomId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub hotel_id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            hotel_id,
            name,
            image,
            created_at,
            updated_at,
        } = value;
        Hotel {
            id: hotel_id,
            name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Room {
            id: room_id,
            name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}
