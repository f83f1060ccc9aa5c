use super::principal::AdminPermissionSet;
use super::{PageTag, ADMIN_ROLE};

/// Page-permission predicates over the decoded `admin_data` cookie.
///
/// Evaluation order:
/// 1. no permission data -> deny
/// 2. wildcard tag -> allow
/// 3. exact tag membership -> allow
/// 4. deny
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionEvaluator {
    permissions: Option<AdminPermissionSet>,
}

impl PermissionEvaluator {
    pub fn new(permissions: Option<AdminPermissionSet>) -> Self {
        Self { permissions }
    }

    /// Decode a raw cookie value. Absent or malformed data yields an evaluator
    /// that denies everything; the failure is logged, never returned.
    pub fn from_cookie(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match AdminPermissionSet::from_json(raw) {
            Ok(permissions) => Self::new(Some(permissions)),
            Err(err) => {
                tracing::warn!(
                    path = %err.path(),
                    error = %err.inner(),
                    "admin_data cookie could not be decoded"
                );
                Self::default()
            }
        }
    }

    pub fn permissions(&self) -> Option<&AdminPermissionSet> {
        self.permissions.as_ref()
    }

    pub fn has_permission(&self, tag: &str) -> bool {
        match &self.permissions {
            Some(set) => set.has_wildcard() || set.contains(tag),
            None => false,
        }
    }

    pub fn has_page(&self, tag: PageTag) -> bool {
        self.has_permission(tag.as_str())
    }

    pub fn has_any_permission<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        match &self.permissions {
            Some(set) => set.has_wildcard() || tags.iter().any(|tag| set.contains(tag.as_ref())),
            None => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.permissions
            .as_ref()
            .map(|set| set.funcao == ADMIN_ROLE)
            .unwrap_or(false)
    }
}
