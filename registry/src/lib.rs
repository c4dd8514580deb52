use std::sync::Arc;

use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
    enrollment::EnrollmentRepositoryImpl, health::HealthCheckRepositoryImpl,
    hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, enrollment::EnrollmentRepository,
    health::HealthCheckRepository, hotel::HotelRepository, ticket::TicketRepository,
};
use kernel::service::{
    booking::BookingService, eligibility::EligibilityGate, hotel::HotelService,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        Self::from_repositories(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool.clone())),
            Arc::new(HotelRepositoryImpl::new(pool.clone())),
            Arc::new(BookingRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(
                pool,
                redis_client,
                app_config.auth.ttl,
            )),
        )
    }

    /// Assembles a registry from already built repositories, e.g. in-memory
    /// ones in tests.
    pub fn from_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        auth_repository: Arc<dyn AuthRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            enrollment_repository,
            ticket_repository,
            hotel_repository,
            booking_repository,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn booking_service(&self) -> BookingService {
        BookingService::new(
            self.eligibility_gate(),
            self.hotel_repository.clone(),
            self.booking_repository.clone(),
        )
    }

    pub fn hotel_service(&self) -> HotelService {
        HotelService::new(self.eligibility_gate(), self.hotel_repository.clone())
    }

    fn eligibility_gate(&self) -> EligibilityGate {
        EligibilityGate::new(
            self.enrollment_repository.clone(),
            self.ticket_repository.clone(),
        )
    }
}
