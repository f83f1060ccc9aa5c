use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contents of the `admin_data` cookie.
///
/// `funcao` and `permissoes_pagina` are independent; nothing ties the role
/// label to the tags that were issued with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminPermissionSet {
    #[serde(default)]
    #[schema(value_type = Vec<String>, example = json!(["dashboard", "clientes"]))]
    pub permissoes_pagina: HashSet<String>,
    #[serde(default)]
    #[schema(example = "Suporte")]
    pub funcao: String,
}

impl AdminPermissionSet {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>, funcao: impl Into<String>) -> Self {
        Self {
            permissoes_pagina: tags.into_iter().map(Into::into).collect(),
            funcao: funcao.into(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.permissoes_pagina.contains(tag)
    }

    pub fn has_wildcard(&self) -> bool {
        self.contains(super::WILDCARD)
    }

    /// Decode the cookie payload, reporting the JSON path that failed.
    pub fn from_json(raw: &str) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
        let deserializer = &mut serde_json::Deserializer::from_str(raw);
        serde_path_to_error::deserialize(deserializer)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
