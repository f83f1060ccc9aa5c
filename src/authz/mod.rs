//! Admin authorization - page permissions decoded from the `admin_data` cookie
//!
//! This module covers:
//! - The closed vocabulary of admin page tags
//! - The wildcard tag that grants every page
//! - Configurable server-side enforcement on admin proxy routes (off/advisory/strict)

mod evaluator;
mod principal;

pub use evaluator::PermissionEvaluator;
pub use principal::AdminPermissionSet;

use std::fmt;
use std::str::FromStr;

/// Tag granting access to every page.
pub const WILDCARD: &str = "*";

/// Role label that marks a full administrator.
pub const ADMIN_ROLE: &str = "Administrador";

/// Authorization enforcement mode for admin proxy routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthzMode {
    /// Only the bearer header is required
    #[default]
    Off,
    /// Log page-permission denials but allow requests
    Advisory,
    /// Enforce 403 when the page tag is missing
    Strict,
}

impl AuthzMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "advisory" => AuthzMode::Advisory,
            "strict" => AuthzMode::Strict,
            _ => AuthzMode::Off,
        }
    }
}

/// Protected admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTag {
    Dashboard,
    Clientes,
    Auditoria,
    PortalDoSorteado,
    Integracao,
    Influencers,
    Afiliados,
    Hq,
    Configuracoes,
}

impl PageTag {
    pub const ALL: [PageTag; 9] = [
        PageTag::Dashboard,
        PageTag::Clientes,
        PageTag::Auditoria,
        PageTag::PortalDoSorteado,
        PageTag::Integracao,
        PageTag::Influencers,
        PageTag::Afiliados,
        PageTag::Hq,
        PageTag::Configuracoes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageTag::Dashboard => "dashboard",
            PageTag::Clientes => "clientes",
            PageTag::Auditoria => "auditoria",
            PageTag::PortalDoSorteado => "portaldosorteado",
            PageTag::Integracao => "integracao",
            PageTag::Influencers => "influencers",
            PageTag::Afiliados => "afiliados",
            PageTag::Hq => "hq",
            PageTag::Configuracoes => "configuracoes",
        }
    }
}

impl fmt::Display for PageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page tag: {0}")]
pub struct UnknownPageTag(pub String);

impl FromStr for PageTag {
    type Err = UnknownPageTag;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PageTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| UnknownPageTag(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tags_round_trip_through_strings() {
        for tag in PageTag::ALL {
            assert_eq!(tag.as_str().parse::<PageTag>(), Ok(tag));
        }
        assert!("financeiro".parse::<PageTag>().is_err());
        assert!("Dashboard".parse::<PageTag>().is_err());
    }

    #[test]
    fn authz_mode_defaults_to_off() {
        assert_eq!(AuthzMode::parse(""), AuthzMode::Off);
        assert_eq!(AuthzMode::parse("bogus"), AuthzMode::Off);
        assert_eq!(AuthzMode::parse("Strict"), AuthzMode::Strict);
        assert_eq!(AuthzMode::parse("advisory"), AuthzMode::Advisory);
    }
}
