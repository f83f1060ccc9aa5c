use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `profiles` table, as visible to its owner.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    #[serde(default)]
    pub saldo: f64,
    pub codigo_indicacao: Option<String>,
    pub indicado_por: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(example = 25.5)]
    pub balance: f64,
    pub referral_code: Option<String>,
    pub referred_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            name: row.nome,
            email: row.email,
            phone: row.telefone,
            balance: row.saldo,
            referral_code: row.codigo_indicacao,
            referred_by: row.indicado_por,
            created_at: row.created_at,
        }
    }
}
