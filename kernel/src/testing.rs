//! In-memory repositories for exercising the workflows without a database.

use std::{collections::BTreeMap, sync::Mutex};

use crate::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingRoom},
            Booking,
        },
        enrollment::Enrollment,
        hotel::{Hotel, Room},
        id::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
        ticket::{Ticket, TicketStatus, TicketType},
    },
    repository::{
        booking::BookingRepository, enrollment::EnrollmentRepository, hotel::HotelRepository,
        ticket::TicketRepository,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use shared::error::{AppError, AppResult};

#[derive(new, Debug, Clone, Copy)]
pub struct TicketSpec {
    pub status: TicketStatus,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Default)]
struct Tables {
    enrollments: BTreeMap<EnrollmentId, Enrollment>,
    tickets: BTreeMap<TicketId, Ticket>,
    hotels: BTreeMap<HotelId, Hotel>,
    rooms: BTreeMap<RoomId, Room>,
    bookings: BTreeMap<BookingId, Booking>,
    sequence: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.sequence += 1;
        self.sequence
    }

    fn enrollment_of(&self, user_id: UserId) -> Option<&Enrollment> {
        self.enrollments.values().find(|e| e.user_id == user_id)
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_enrollment(&self, user_id: UserId) -> EnrollmentId {
        let mut tables = self.tables();
        if let Some(existing) = tables.enrollment_of(user_id) {
            return existing.id;
        }
        let id = EnrollmentId::new(tables.next_id());
        let now = Utc::now();
        tables.enrollments.insert(
            id,
            Enrollment {
                id,
                user_id,
                name: format!("attendee {user_id}"),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Adds a ticket for the user, enrolling them first when needed.
    pub fn add_ticket(&self, user_id: UserId, spec: TicketSpec) -> TicketId {
        let enrollment_id = self.add_enrollment(user_id);
        let mut tables = self.tables();
        let id = TicketId::new(tables.next_id());
        let type_id = TicketTypeId::new(tables.next_id());
        let now = Utc::now();
        tables.tickets.insert(
            id,
            Ticket {
                id,
                enrollment_id,
                status: spec.status,
                ticket_type: TicketType {
                    id: type_id,
                    name: "Pass".into(),
                    price: 300,
                    is_remote: spec.is_remote,
                    includes_hotel: spec.includes_hotel,
                },
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn add_hotel(&self, name: &str) -> HotelId {
        let mut tables = self.tables();
        let id = HotelId::new(tables.next_id());
        let now = Utc::now();
        tables.hotels.insert(
            id,
            Hotel {
                id,
                name: name.into(),
                image: format!("https://images.example.com/{id}.jpg"),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn add_room(&self, hotel_id: HotelId, capacity: i32) -> RoomId {
        let mut tables = self.tables();
        let id = RoomId::new(tables.next_id());
        let now = Utc::now();
        tables.rooms.insert(
            id,
            Room {
                id,
                name: format!("Room {id}"),
                capacity,
                hotel_id,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.tables().bookings.values().cloned().collect()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        Ok(self.tables().enrollment_of(user_id).cloned())
    }
}

#[async_trait]
impl TicketRepository for InMemoryStore {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        Ok(self
            .tables()
            .tickets
            .values()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }
}

#[async_trait]
impl HotelRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        Ok(self.tables().hotels.values().cloned().collect())
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> AppResult<Option<Hotel>> {
        Ok(self.tables().hotels.get(&hotel_id).cloned())
    }

    async fn find_rooms_by_hotel_id(&self, hotel_id: HotelId) -> AppResult<Vec<Room>> {
        Ok(self
            .tables()
            .rooms
            .values()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn find_room_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        Ok(self.tables().rooms.get(&room_id).cloned())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tables = self.tables();
        if tables.bookings.values().any(|b| b.user_id == event.user_id) {
            return Err(AppError::ForbiddenOperation(format!(
                "user {} already has a booking",
                event.user_id
            )));
        }
        let id = BookingId::new(tables.next_id());
        let now = Utc::now();
        let booking = Booking {
            id,
            user_id: event.user_id,
            room_id: event.room_id,
            created_at: now,
            updated_at: now,
        };
        tables.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        Ok(self
            .tables()
            .bookings
            .values()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<()> {
        let mut tables = self.tables();
        match tables.bookings.get_mut(&event.booking_id) {
            Some(booking) if booking.user_id == event.requested_user => {
                booking.room_id = event.room_id;
                booking.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(AppError::UnauthorizedError(format!(
                "booking {} does not belong to user {}",
                event.booking_id, event.requested_user
            ))),
        }
    }
}
