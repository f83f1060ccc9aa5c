use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Row of the `ganhadores` table.
#[derive(Debug, Clone, Deserialize)]
pub struct WinnerRow {
    pub id: Uuid,
    pub nome: String,
    pub premio: String,
    pub valor: Option<f64>,
    pub cidade: Option<String>,
    pub raspadinha_id: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub id: Uuid,
    #[schema(example = "João P.")]
    pub name: String,
    #[schema(example = "PIX R$ 500")]
    pub prize: String,
    #[schema(example = 500.0)]
    pub amount: Option<f64>,
    pub city: Option<String>,
    pub scratch_card_id: Option<Uuid>,
    pub won_at: Option<DateTime<Utc>>,
}

impl From<WinnerRow> for Winner {
    fn from(row: WinnerRow) -> Self {
        Winner {
            id: row.id,
            name: row.nome,
            prize: row.premio,
            amount: row.valor,
            city: row.cidade,
            scratch_card_id: row.raspadinha_id,
            won_at: row.created_at,
        }
    }
}

pub const DEFAULT_WINNERS_LIMIT: u32 = 50;
pub const MAX_WINNERS_LIMIT: u32 = 100;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WinnersQuery {
    /// Number of winners to return (1-100, default 50)
    pub limit: Option<u32>,
}
