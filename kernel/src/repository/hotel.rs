use crate::model::{
    hotel::{Hotel, Room},
    id::{HotelId, RoomId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    async fn find_by_id(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>>;
    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<Room>>;
    async fn find_room_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
}
