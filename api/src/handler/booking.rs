use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingIdResponse, BookingRequest, BookingResponse},
};

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_service()
        .get_booking(user.id())
        .await
        .map(BookingResponse::from)
        .map(Json)
        .map_err(booking_failure)
}

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    body: Option<Json<BookingRequest>>,
) -> AppResult<Json<BookingIdResponse>> {
    let event = required_body(body)
        .and_then(|req| req.into_create(user.id()))
        .map_err(booking_failure)?;

    registry
        .booking_service()
        .create_booking(event)
        .await
        .map(|booking| {
            Json(BookingIdResponse {
                booking_id: booking.id,
            })
        })
        .map_err(booking_failure)
}

pub async fn update_booking(
    user: AuthorizedUser,
    booking_id: Result<Path<BookingId>, PathRejection>,
    State(registry): State<AppRegistry>,
    body: Option<Json<BookingRequest>>,
) -> AppResult<Json<BookingIdResponse>> {
    let Path(booking_id) = booking_id.map_err(|e| AppError::EntityNotFound(e.body_text()))?;
    let event = required_body(body)
        .and_then(|req| req.into_update(booking_id, user.id()))
        .map_err(booking_failure)?;

    registry
        .booking_service()
        .update_booking(event)
        .await
        .map(|booking_id| Json(BookingIdResponse { booking_id }))
        .map_err(booking_failure)
}

fn required_body(body: Option<Json<BookingRequest>>) -> AppResult<BookingRequest> {
    body.map(|Json(req)| req)
        .ok_or_else(|| AppError::EntityNotFound("roomId is required".into()))
}

// Booking routes answer 401/403 for entitlement failures and 404 for
// everything else.
fn booking_failure(e: AppError) -> AppError {
    match e {
        AppError::UnauthenticatedError
        | AppError::UnauthorizedError(_)
        | AppError::ForbiddenOperation(_)
        | AppError::EntityNotFound(_) => e,
        other => {
            tracing::warn!(
                error.cause_chain = ?other,
                error.message = %other,
                "booking request failed"
            );
            AppError::EntityNotFound(other.to_string())
        }
    }
}
