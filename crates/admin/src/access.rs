//! Admin panel access gate.
//!
//! **This is not authorization.** The check is a string match on profile
//! fields the client itself supplies, and anyone who can edit local state
//! can get past it. It only decides whether the admin screens are shown.
//! Anything that must actually be protected needs a server-side check.
//!
//! Who counts as an admin is decided by [`Identity::is_admin`].

use pugil_core::{Identity, Notice};
use tracing::{info, warn};

/// Where anonymous visitors are sent.
pub const SIGN_IN_ROUTE: &str = "/auth";
/// Where signed-in non-admins are sent.
pub const HOME_ROUTE: &str = "/";

/// Outcome of the access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Mount the admin panel.
    Granted,
    /// Redirect away and show the notice.
    Denied {
        redirect_to: &'static str,
        notice: Notice,
    },
}

impl AccessDecision {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Run the gate for `identity`.
#[must_use]
pub fn check_admin_access(identity: &Identity) -> AccessDecision {
    if !identity.signed_in {
        warn!("Admin panel requested without sign-in");
        return AccessDecision::Denied {
            redirect_to: SIGN_IN_ROUTE,
            notice: Notice::destructive(
                "Acesso negado",
                "Você precisa estar autenticado para acessar o painel de administração.",
            ),
        };
    }

    if !identity.is_admin() {
        warn!(user = identity.display_name(), "Admin panel denied");
        return AccessDecision::Denied {
            redirect_to: HOME_ROUTE,
            notice: Notice::destructive(
                "Acesso negado",
                "Você não tem permissão para acessar o painel de administração. \
                 O acesso é restrito a usuários com nome ou username 'admin'.",
            ),
        };
    }

    info!(user = identity.display_name(), "Admin panel granted");
    AccessDecision::Granted
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pugil_core::Email;

    use super::*;

    fn user(name: Option<&str>, username: Option<&str>, email: Option<&str>) -> Identity {
        Identity::signed_in(
            name.map(str::to_owned),
            username.map(str::to_owned),
            email.map(|e| Email::parse(e).unwrap()),
        )
    }

    #[test]
    fn test_name_or_username_admin() {
        assert!(user(Some("Admin"), None, None).is_admin());
        assert!(user(None, Some("ADMIN"), None).is_admin());
        assert!(!user(Some("Administrator"), Some("admins"), None).is_admin());
    }

    #[test]
    fn test_email_containing_admin() {
        assert!(user(None, None, Some("admin@pugil.pt")).is_admin());
        assert!(user(None, None, Some("loja.admin@pugil.pt")).is_admin());
        assert!(!user(Some("Ana"), Some("ana"), Some("ana@pugil.pt")).is_admin());
    }

    #[test]
    fn test_padded_admin_name_is_not_admin() {
        assert!(!user(Some(" admin "), None, None).is_admin());
        assert!(!user(None, Some("admin\n"), None).is_admin());
    }

    #[test]
    fn test_email_admin_match_is_case_sensitive() {
        assert!(!user(None, None, Some("ADMIN@pugil.pt")).is_admin());
        assert!(!user(None, None, Some("Admin.Loja@pugil.pt")).is_admin());
        assert!(user(None, None, Some("Loja.admin@PUGIL.pt")).is_admin());
    }

    #[test]
    fn test_anonymous_is_sent_to_sign_in() {
        let decision = check_admin_access(&Identity::anonymous());
        match decision {
            AccessDecision::Denied {
                redirect_to,
                notice,
            } => {
                assert_eq!(redirect_to, SIGN_IN_ROUTE);
                assert!(notice.is_destructive());
                assert_eq!(notice.title, "Acesso negado");
            }
            AccessDecision::Granted => panic!("anonymous visitor was granted access"),
        }
    }

    #[test]
    fn test_non_admin_is_sent_home() {
        let decision = check_admin_access(&user(Some("Ana"), None, None));
        let AccessDecision::Denied {
            redirect_to,
            notice,
        } = decision
        else {
            panic!("non-admin was granted access");
        };
        assert_eq!(redirect_to, HOME_ROUTE);
        assert_eq!(
            notice.description,
            "Você não tem permissão para acessar o painel de administração. \
             O acesso é restrito a usuários com nome ou username 'admin'."
        );
    }

    #[test]
    fn test_admin_is_granted() {
        assert!(check_admin_access(&user(None, Some("admin"), None)).is_granted());
    }

    #[test]
    fn test_profile_without_sign_in_is_denied() {
        let mut identity = user(Some("admin"), None, None);
        identity.signed_in = false;
        assert!(!check_admin_access(&identity).is_granted());
    }
}
