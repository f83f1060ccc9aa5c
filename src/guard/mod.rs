//! Admin gates: the layout-wide token check, the per-page permission check,
//! and the optional page-tag check on admin data endpoints.

pub mod page;
pub mod route;

pub use page::{PageDecision, PageGuard, PermissionState};
pub use route::{hard_redirect, require_admin_session, GuardState, RouteGuard};

use crate::authz::{AuthzMode, PageTag, PermissionEvaluator};
use crate::errors::{AppError, AppResult};
use crate::session::{admin_data_raw, SessionStore};

/// Re-check the page tag behind an admin data endpoint according to `mode`.
pub fn check_page_access(mode: AuthzMode, store: &dyn SessionStore, tag: PageTag) -> AppResult<()> {
    if mode == AuthzMode::Off {
        return Ok(());
    }

    let evaluator = PermissionEvaluator::from_cookie(admin_data_raw(store).as_deref());
    if evaluator.has_page(tag) {
        return Ok(());
    }

    match mode {
        AuthzMode::Strict => {
            tracing::warn!(page = %tag, "page permission missing, request denied");
            Err(AppError::forbidden("access denied"))
        }
        _ => {
            tracing::warn!(page = %tag, "page permission missing (advisory mode)");
            Ok(())
        }
    }
}
