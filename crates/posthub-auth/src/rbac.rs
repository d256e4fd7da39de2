//! Role gate for admin-only operations.

use posthub_core::error::AppError;
use posthub_entity::account::AccountRole;

/// Checks that the given role carries admin privileges.
///
/// Pure predicate with no side effects; composes after the token gateway.
/// The match is exhaustive over the closed role set.
pub fn require_admin(role: AccountRole) -> Result<(), AppError> {
    match role {
        AccountRole::Admin => Ok(()),
        AccountRole::User => Err(AppError::forbidden("Admin access required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posthub_core::error::ErrorKind;

    #[test]
    fn test_admin_passes() {
        assert!(require_admin(AccountRole::Admin).is_ok());
    }

    #[test]
    fn test_user_is_forbidden() {
        let err = require_admin(AccountRole::User).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }
}
