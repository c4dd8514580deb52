use axum::Router;
use registry::AppRegistry;

pub mod auth;
pub mod booking;
pub mod health;
pub mod hotel;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(hotel::build_hotel_routers())
        .merge(booking::build_booking_routers())
}
