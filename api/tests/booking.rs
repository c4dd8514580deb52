mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use kernel::{
    model::{id::UserId, ticket::TicketStatus},
    testing::TicketSpec,
};
use serde_json::{json, Value};

fn eligible(app: &TestApp, raw: i32) -> (UserId, String) {
    let user_id = UserId::new(raw);
    app.store
        .add_ticket(user_id, TicketSpec::new(TicketStatus::Paid, true, true));
    (user_id, app.auth.issue(user_id))
}

#[tokio::test]
async fn booking_routes_require_a_token() -> anyhow::Result<()> {
    let app = TestApp::new();
    let body = Some(json!({ "roomId": 1 }));

    let (status, _) = app.send(Method::GET, "/booking", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .send(Method::POST, "/booking", None, body.clone())
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send(Method::PUT, "/booking/1", None, body).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn unknown_token_is_unauthorized() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (status, body) = app
        .send(Method::GET, "/booking", Some("not-a-session"), None)
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, Value::Null);
    Ok(())
}

#[tokio::test]
async fn post_then_get_returns_the_booking() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (user_id, token) = eligible(&app, 1);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);

    let (status, created) = app
        .send(
            Method::POST,
            "/booking",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, booking) = app.send(Method::GET, "/booking", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(booking["id"], created["bookingId"]);
    assert_eq!(booking["userId"], json!(user_id));
    assert_eq!(booking["roomId"], json!(room_id));
    assert!(booking["createdAt"].is_string());
    assert!(booking["updatedAt"].is_string());
    Ok(())
}

#[tokio::test]
async fn get_without_booking_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);

    let (status, _) = app.send(Method::GET, "/booking", Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn user_without_enrollment_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();
    let token = app.auth.issue(UserId::new(9));
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);

    let (status, _) = app.send(Method::GET, "/booking", Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(
            Method::POST,
            "/booking",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(
            Method::PUT,
            "/booking/1",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn reserved_ticket_is_rejected_per_operation() -> anyhow::Result<()> {
    let app = TestApp::new();
    let user_id = UserId::new(1);
    app.store
        .add_ticket(user_id, TicketSpec::new(TicketStatus::Reserved, true, true));
    let token = app.auth.issue(user_id);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);
    let body = Some(json!({ "roomId": room_id }));

    let (status, _) = app.send(Method::GET, "/booking", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .send(Method::POST, "/booking", Some(&token), body.clone())
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .send(Method::PUT, "/booking/1", Some(&token), body)
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn ticket_without_hotel_cannot_book() -> anyhow::Result<()> {
    let app = TestApp::new();
    let user_id = UserId::new(1);
    app.store
        .add_ticket(user_id, TicketSpec::new(TicketStatus::Paid, true, false));
    let token = app.auth.issue(user_id);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);

    let (status, _) = app
        .send(
            Method::POST,
            "/booking",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.store.bookings().is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_or_unknown_room_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);

    let (status, _) = app
        .send(Method::POST, "/booking", Some(&token), Some(json!({})))
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(Method::POST, "/booking", Some(&token), None)
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .send(
            Method::POST,
            "/booking",
            Some(&token),
            Some(json!({ "roomId": 4040 })),
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.store.bookings().is_empty());
    Ok(())
}

#[tokio::test]
async fn second_post_is_forbidden() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);
    let body = Some(json!({ "roomId": room_id }));

    let (status, _) = app
        .send(Method::POST, "/booking", Some(&token), body.clone())
        .await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .send(Method::POST, "/booking", Some(&token), body)
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.bookings().len(), 1);
    Ok(())
}

#[tokio::test]
async fn put_moves_the_booking_and_echoes_its_id() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (user_id, token) = eligible(&app, 1);
    let hotel_id = app.store.add_hotel("Seaside");
    let room_id = app.store.add_room(hotel_id, 2);
    let new_room = app.store.add_room(hotel_id, 4);

    let (_, created) = app
        .send(
            Method::POST,
            "/booking",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    let booking_id = created["bookingId"].as_i64().unwrap_or_default();

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/booking/{booking_id}"),
            Some(&token),
            Some(json!({ "roomId": new_room })),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "bookingId": booking_id }));

    let stored = app.store.bookings();
    assert_eq!(stored.len(), 1);
    assert_eq!(i64::from(stored[0].id.raw()), booking_id);
    assert_eq!(stored[0].user_id, user_id);
    assert_eq!(stored[0].room_id, new_room);
    Ok(())
}

#[tokio::test]
async fn put_without_room_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);
    app.send(
        Method::POST,
        "/booking",
        Some(&token),
        Some(json!({ "roomId": room_id })),
    )
    .await?;

    let (status, _) = app
        .send(Method::PUT, "/booking/1", Some(&token), Some(json!({})))
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn put_without_owned_booking_is_unauthorized() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);

    let (status, _) = app
        .send(
            Method::PUT,
            "/booking/1",
            Some(&token),
            Some(json!({ "roomId": room_id })),
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn put_with_unparseable_id_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();
    let (_, token) = eligible(&app, 1);
    let room_id = app.store.add_room(app.store.add_hotel("Seaside"), 2);
    let body = Some(json!({ "roomId": room_id }));

    for uri in ["/booking/abc", "/booking/99999999999", "/booking/1.5"] {
        let (status, res) = app
            .send(Method::PUT, uri, Some(&token), body.clone())
            .await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(res, Value::Null, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn put_with_unparseable_id_still_requires_a_token() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _) = app
        .send(Method::PUT, "/booking/abc", None, Some(json!({ "roomId": 1 })))
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}
