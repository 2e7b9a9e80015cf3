//! Role and delegation checks.
//!
//! Roles answer "may this account call this entry point at all"; the
//! whitelist answers "may the caller spend or endanger this owner's records".

use anchor_lang::prelude::*;

use crate::errors::LedgerError;
use crate::state::{Role, RoleGrant, WhitelistEntry};

/// Fails unless `grant` gives `role` to `account`
pub fn require_role(grant: Option<&RoleGrant>, role: Role, account: &Pubkey) -> Result<()> {
    require_any_role(grant, &[role], account)
}

/// Fails unless `grant` gives one of `roles` to `account`
pub fn require_any_role(grant: Option<&RoleGrant>, roles: &[Role], account: &Pubkey) -> Result<()> {
    let granted = grant
        .map(|g| g.account == *account && roles.contains(&g.role))
        .unwrap_or(false);
    require!(granted, LedgerError::PermissionDenied);
    Ok(())
}

/// The calling account together with the owners that have whitelisted it
#[derive(Clone, Debug)]
pub struct Authority {
    caller: Pubkey,
    granted_by: Vec<Pubkey>,
}

impl Authority {
    pub fn new(caller: Pubkey) -> Self {
        Self {
            caller,
            granted_by: Vec::new(),
        }
    }

    /// Collect whitelist entries naming the caller as delegate; entries for
    /// other delegates are ignored
    pub fn with_whitelist<'a, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a WhitelistEntry>,
    {
        for entry in entries {
            if entry.delegate == self.caller && !self.granted_by.contains(&entry.owner) {
                self.granted_by.push(entry.owner);
            }
        }
        self
    }

    pub fn may_act_for(&self, owner: &Pubkey) -> bool {
        *owner == self.caller || self.granted_by.contains(owner)
    }

    pub fn require_may_act_for(&self, owner: &Pubkey) -> Result<()> {
        require!(self.may_act_for(owner), LedgerError::PermissionDenied);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(role: Role, account: Pubkey) -> RoleGrant {
        RoleGrant {
            role,
            account,
            granted_by: Pubkey::new_unique(),
            bump: 255,
        }
    }

    #[test]
    fn role_must_match_account_and_role() {
        let adapter = Pubkey::new_unique();
        let g = grant(Role::Adapter, adapter);

        assert!(require_role(Some(&g), Role::Adapter, &adapter).is_ok());
        assert!(require_role(Some(&g), Role::Mintable, &adapter).is_err());
        assert!(require_role(Some(&g), Role::Adapter, &Pubkey::new_unique()).is_err());
        assert!(require_role(None, Role::Adapter, &adapter).is_err());
    }

    #[test]
    fn any_role_accepts_either() {
        let stopper = Pubkey::new_unique();
        let g = grant(Role::ShowStopper, stopper);
        let roles = [Role::Owner, Role::ShowStopper];
        assert!(require_any_role(Some(&g), &roles, &stopper).is_ok());
        assert!(require_any_role(Some(&grant(Role::Adapter, stopper)), &roles, &stopper).is_err());
    }

    #[test]
    fn caller_always_acts_for_itself() {
        let caller = Pubkey::new_unique();
        let authority = Authority::new(caller);
        assert!(authority.may_act_for(&caller));
        assert!(!authority.may_act_for(&Pubkey::new_unique()));
    }

    #[test]
    fn whitelist_entries_for_other_delegates_are_ignored() {
        let caller = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let for_caller = WhitelistEntry { owner: alice, delegate: caller, bump: 1 };
        let for_someone_else = WhitelistEntry { owner: bob, delegate: Pubkey::new_unique(), bump: 1 };

        let authority = Authority::new(caller).with_whitelist([&for_caller, &for_someone_else]);
        assert!(authority.may_act_for(&alice));
        assert!(!authority.may_act_for(&bob));
        assert!(authority.require_may_act_for(&bob).is_err());
    }
}
