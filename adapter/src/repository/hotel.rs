use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        hotel::{Hotel, Room},
        id::{HotelId, RoomId},
    },
    repository::hotel::HotelRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image, created_at, updated_at
                FROM hotels
                ORDER BY hotel_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hotel::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image, created_at, updated_at
                FROM hotels
                WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Hotel::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT room_id, name, capacity, hotel_id, created_at, updated_at
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY room_id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Room::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_room_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT room_id, name, capacity, hotel_id, created_at, updated_at
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Room::from))
        .map_err(AppError::SpecificOperationError)
    }
}
