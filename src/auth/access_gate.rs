//! Admin capability check shared by every gated route.

use std::future::Future;

use sqlx::PgPool;
use uuid::Uuid;

/// Anything that can look up a user's admin flag.
pub trait AdminDirectory {
    /// `Ok(None)` when no user has this id.
    fn admin_flag(&self, user_id: Uuid) -> impl Future<Output = Result<Option<bool>, sqlx::Error>>;
}

impl AdminDirectory for PgPool {
    async fn admin_flag(&self, user_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
        crate::db::users::find_admin_flag(self, user_id).await
    }
}

/// `true` only for an identity that resolves to a user with the admin flag set.
///
/// Never fails: absent identities, unknown users, non-admins and lookup
/// errors all answer `false`. Callers turn that into an authorization error.
pub async fn require_admin<D>(directory: &D, identity: Option<Uuid>) -> bool
where
    D: AdminDirectory + ?Sized,
{
    let Some(user_id) = identity else {
        return false;
    };
    match directory.admin_flag(user_id).await {
        Ok(Some(is_admin)) => is_admin,
        Ok(None) => false,
        Err(e) => {
            tracing::error!("Failed to resolve admin flag for {}: {:?}", user_id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryDirectory(HashMap<Uuid, bool>);

    impl AdminDirectory for InMemoryDirectory {
        async fn admin_flag(&self, user_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
            Ok(self.0.get(&user_id).copied())
        }
    }

    struct BrokenDirectory;

    impl AdminDirectory for BrokenDirectory {
        async fn admin_flag(&self, _user_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
            Err(sqlx::Error::PoolTimedOut)
        }
    }

    #[tokio::test]
    async fn only_resolvable_admins_pass() {
        let admin = Uuid::new_v4();
        let member = Uuid::new_v4();
        let directory = InMemoryDirectory(HashMap::from([(admin, true), (member, false)]));

        assert!(require_admin(&directory, Some(admin)).await);
        assert!(!require_admin(&directory, Some(member)).await);
        assert!(!require_admin(&directory, Some(Uuid::new_v4())).await);
        assert!(!require_admin(&directory, None).await);
    }

    #[tokio::test]
    async fn lookup_failures_deny_access() {
        assert!(!require_admin(&BrokenDirectory, Some(Uuid::new_v4())).await);
    }
}
