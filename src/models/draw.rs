use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

pub const MAX_TICKETS_PER_DRAW: u32 = 10;

/// Request for an instant scratch-card draw. The outcome is computed by the
/// business API; this service validates and forwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawRequest {
    pub raspadinha_id: Uuid,
    #[schema(example = 1)]
    pub quantidade: Option<u32>,
}

impl DrawRequest {
    /// Ticket count after validation (defaults to one).
    pub fn ticket_count(&self) -> Result<u32, AppError> {
        let count = self.quantidade.unwrap_or(1);
        if count == 0 || count > MAX_TICKETS_PER_DRAW {
            return Err(AppError::bad_request(format!(
                "quantidade must be between 1 and {}",
                MAX_TICKETS_PER_DRAW
            )));
        }
        Ok(count)
    }
}
