use std::sync::Arc;

use crate::{
    model::{
        eligibility::{Eligibility, EligibilityRule, Ineligibility, Rejection},
        id::UserId,
    },
    repository::{enrollment::EnrollmentRepository, ticket::TicketRepository},
};
use derive_new::new;
use shared::error::{AppError, AppResult};

/// Resolves a user's enrollment and ticket and checks them against a rule.
#[derive(new, Clone)]
pub struct EligibilityGate {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl EligibilityGate {
    pub async fn check(&self, user_id: UserId, rule: EligibilityRule) -> AppResult<Eligibility> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("enrollment of user {user_id} not found"))
            })?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "ticket of enrollment {} not found",
                    enrollment.id
                ))
            })?;

        if let Err(reason) = rule.evaluate(&ticket) {
            tracing::info!(
                user_id = %user_id,
                ticket_id = %ticket.id,
                reason = %reason,
                "ticket rejected"
            );
            return Err(rejection_error(rule.rejection, reason));
        }

        Ok(Eligibility { enrollment, ticket })
    }
}

fn rejection_error(rejection: Rejection, reason: Ineligibility) -> AppError {
    match rejection {
        Rejection::NotFound => AppError::EntityNotFound(reason.to_string()),
        Rejection::Unauthorized => AppError::UnauthorizedError(reason.to_string()),
        Rejection::Forbidden => AppError::ForbiddenOperation(reason.to_string()),
    }
}
