// owner.rs — Numeric uid/gid to user/group name resolution
//
// The system resolver keeps a uzers::UsersCache for the whole run, so a
// directory full of files owned by one user hits the passwd database once.

use uzers::{Groups, Users, UsersCache};

/// Resolves numeric ownership ids to names.
/// Returns None when the id has no registered name.
pub trait IdentityResolver {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve_owner_name
    //
    //  Returns the user name registered for `uid`.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn resolve_owner_name(&self, uid: u32) -> Option<String>;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve_group_name
    //
    //  Returns the group name registered for `gid`.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn resolve_group_name(&self, gid: u32) -> Option<String>;
}





/// Resolver backed by the system user and group databases.
pub struct SystemIdentityResolver {
    cache: UsersCache,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl SystemIdentityResolver
//
//  Construction.
//
////////////////////////////////////////////////////////////////////////////////

impl SystemIdentityResolver {
    pub fn new() -> Self {
        SystemIdentityResolver {
            cache: UsersCache::new(),
        }
    }
}





impl Default for SystemIdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl IdentityResolver for SystemIdentityResolver
//
//  Looks ids up through the cached passwd/group databases.
//
////////////////////////////////////////////////////////////////////////////////

impl IdentityResolver for SystemIdentityResolver {
    fn resolve_owner_name(&self, uid: u32) -> Option<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
    }

    fn resolve_group_name(&self, gid: u32) -> Option<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
    }
}





/// Fixed-table resolver for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MockIdentityResolver {
    users:  std::collections::HashMap<u32, String>,
    groups: std::collections::HashMap<u32, String>,
}





#[cfg(test)]
impl MockIdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: &str) -> Self {
        self.users.insert(uid, name.into());
        self
    }

    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(gid, name.into());
        self
    }
}





#[cfg(test)]
impl IdentityResolver for MockIdentityResolver {
    fn resolve_owner_name(&self, uid: u32) -> Option<String> {
        self.users.get(&uid).cloned()
    }

    fn resolve_group_name(&self, gid: u32) -> Option<String> {
        self.groups.get(&gid).cloned()
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_on_system() {
        // uid/gid 0 are registered on every Unix system we run on
        let resolver = SystemIdentityResolver::new();
        assert_eq!(resolver.resolve_owner_name(0).as_deref(), Some("root"));
        assert!(resolver.resolve_group_name(0).is_some());
    }

    #[test]
    fn unregistered_uid_is_none() {
        let resolver = SystemIdentityResolver::new();
        assert!(resolver.resolve_owner_name(u32::MAX - 7).is_none());
    }

    #[test]
    fn mock_lookups() {
        let resolver = MockIdentityResolver::new()
            .with_user(1000, "alice")
            .with_group(100, "users");

        assert_eq!(resolver.resolve_owner_name(1000).as_deref(), Some("alice"));
        assert_eq!(resolver.resolve_group_name(100).as_deref(), Some("users"));
        assert!(resolver.resolve_owner_name(1).is_none());
    }
}
