use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `promocoes` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PromotionRow {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: Option<String>,
    pub imagem_url: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub ordem: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: Uuid,
    #[schema(example = "Raspadinha em dobro")]
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub position: i32,
}

impl From<PromotionRow> for Promotion {
    fn from(row: PromotionRow) -> Self {
        Promotion {
            id: row.id,
            title: row.titulo,
            description: row.descricao,
            image_url: row.imagem_url,
            link: row.link,
            position: row.ordem,
        }
    }
}
