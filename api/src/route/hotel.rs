use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::hotel::{show_hotel, show_hotel_list};

pub fn build_hotel_routers() -> Router<AppRegistry> {
    let hotels_routers = Router::new()
        .route("/", get(show_hotel_list))
        .route("/:hotel_id", get(show_hotel));

    Router::new().nest("/hotels", hotels_routers)
}
