use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `influencers` table.
#[derive(Debug, Clone, Deserialize)]
pub struct InfluencerRow {
    pub id: Uuid,
    pub nome: String,
    pub email: Option<String>,
    pub codigo_indicacao: Option<String>,
    pub nivel_comissao: Option<String>,
    pub percentual_comissao: Option<f64>,
    #[serde(default)]
    pub total_indicados: i64,
    #[serde(default = "default_active")]
    pub ativo: bool,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Influencer as served to the back office.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: Uuid,
    #[schema(example = "Maria Souza")]
    pub name: String,
    pub email: Option<String>,
    #[schema(example = "MARIA10")]
    pub referral_code: Option<String>,
    #[schema(example = "ouro")]
    pub commission_tier: Option<String>,
    #[schema(example = 10.0)]
    pub commission_rate: Option<f64>,
    pub referred_count: i64,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<InfluencerRow> for Influencer {
    fn from(row: InfluencerRow) -> Self {
        Influencer {
            id: row.id,
            name: row.nome,
            email: row.email,
            referral_code: row.codigo_indicacao,
            commission_tier: row.nivel_comissao,
            commission_rate: row.percentual_comissao,
            referred_count: row.total_indicados,
            active: row.ativo,
            created_at: row.created_at,
        }
    }
}
