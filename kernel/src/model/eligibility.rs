//! Ticket entitlement rules for hotel and booking operations.
//!
//! A [`EligibilityRule`] describes what a ticket must look like for one
//! operation and which failure kind the caller sees when it does not.
//! Evaluating a rule is pure; the lookups of the enrollment and the ticket
//! live in [`crate::service::eligibility`].

use crate::model::{enrollment::Enrollment, ticket::Ticket};

/// The failure kind reported to the caller when a ticket is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotFound,
    Unauthorized,
    Forbidden,
}

/// Why a ticket does not satisfy a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    Unpaid,
    AttendanceMismatch { required_remote: bool },
    HotelNotIncluded,
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unpaid => f.write_str("ticket has not been paid"),
            Self::AttendanceMismatch {
                required_remote: true,
            } => f.write_str("ticket type must be remote"),
            Self::AttendanceMismatch {
                required_remote: false,
            } => f.write_str("ticket type must be in-person"),
            Self::HotelNotIncluded => f.write_str("ticket type does not include hotel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRule {
    pub required_remote: bool,
    pub rejection: Rejection,
}

impl EligibilityRule {
    pub const BOOKING_READ: Self = Self {
        required_remote: true,
        rejection: Rejection::Unauthorized,
    };

    pub const BOOKING_CREATE: Self = Self {
        required_remote: true,
        rejection: Rejection::Unauthorized,
    };

    pub const BOOKING_UPDATE: Self = Self {
        required_remote: true,
        rejection: Rejection::Forbidden,
    };

    pub const HOTEL_BROWSING: Self = Self {
        required_remote: false,
        rejection: Rejection::NotFound,
    };

    /// Checks payment first, then the ticket type flags.
    pub fn evaluate(&self, ticket: &Ticket) -> Result<(), Ineligibility> {
        if !ticket.is_paid() {
            return Err(Ineligibility::Unpaid);
        }
        if ticket.ticket_type.is_remote != self.required_remote {
            return Err(Ineligibility::AttendanceMismatch {
                required_remote: self.required_remote,
            });
        }
        if !ticket.ticket_type.includes_hotel {
            return Err(Ineligibility::HotelNotIncluded);
        }
        Ok(())
    }
}

/// The records that granted access, handed on to the workflows.
#[derive(Debug)]
pub struct Eligibility {
    pub enrollment: Enrollment,
    pub ticket: Ticket,
}
