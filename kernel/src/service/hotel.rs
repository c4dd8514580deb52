use std::sync::Arc;

use crate::{
    model::{
        eligibility::EligibilityRule,
        hotel::{Hotel, HotelWithRooms},
        id::{HotelId, UserId},
    },
    repository::hotel::HotelRepository,
    service::eligibility::EligibilityGate,
};
use derive_new::new;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HotelService {
    gate: EligibilityGate,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub async fn list_hotels(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        self.gate
            .check(user_id, EligibilityRule::HOTEL_BROWSING)
            .await?;
        self.hotel_repository.find_all().await
    }

    pub async fn get_hotel_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> AppResult<HotelWithRooms> {
        self.gate
            .check(user_id, EligibilityRule::HOTEL_BROWSING)
            .await?;

        let hotel = self
            .hotel_repository
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("hotel {hotel_id} not found")))?;
        let rooms = self.hotel_repository.find_rooms_by_hotel_id(hotel_id).await?;

        Ok(HotelWithRooms { hotel, rooms })
    }
}
