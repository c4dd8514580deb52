use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{register_booking, show_booking, update_booking};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", get(show_booking).post(register_booking))
        .route("/:booking_id", put(update_booking));

    Router::new().nest("/booking", booking_routers)
}
