use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::authz::{AdminPermissionSet, PageTag, PermissionEvaluator};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AdminLoginRequest {
    #[schema(example = "admin@raspepix.com")]
    pub email: String,
    #[schema(example = "S3cureP@ssw0rd")]
    pub senha: String,
}

/// Body returned by the business API on a successful admin login.
#[derive(Debug, Deserialize)]
pub struct UpstreamAdminLogin {
    pub token: String,
    pub admin: AdminPermissionSet,
}

/// Decoded `admin_data` plus the pages it opens.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPermissionsResponse {
    pub permissions: Option<AdminPermissionSet>,
    pub is_admin: bool,
    #[schema(example = json!(["dashboard", "clientes"]))]
    pub allowed_pages: Vec<String>,
}

impl From<&PermissionEvaluator> for AdminPermissionsResponse {
    fn from(evaluator: &PermissionEvaluator) -> Self {
        AdminPermissionsResponse {
            permissions: evaluator.permissions().cloned(),
            is_admin: evaluator.is_admin(),
            allowed_pages: PageTag::ALL
                .into_iter()
                .filter(|tag| evaluator.has_page(*tag))
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
