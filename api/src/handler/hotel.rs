use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    registry
        .hotel_service()
        .list_hotels(user.id())
        .await
        .map(|hotels| hotels.into_iter().map(HotelResponse::from).collect())
        .map(Json)
}

pub async fn show_hotel(
    user: AuthorizedUser,
    hotel_id: Result<Path<HotelId>, PathRejection>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    // Unparseable ids name no hotel.
    let Path(hotel_id) = hotel_id.map_err(|e| AppError::EntityNotFound(e.body_text()))?;
    registry
        .hotel_service()
        .get_hotel_with_rooms(user.id(), hotel_id)
        .await
        .map(HotelWithRoomsResponse::from)
        .map(Json)
}
