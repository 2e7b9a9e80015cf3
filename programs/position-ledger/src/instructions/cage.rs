use anchor_lang::prelude::*;
use crate::access::require_any_role;
use crate::constants::*;
use crate::state::{Ledger, Role, RoleGrant};

/// Roles allowed to cage and uncage the ledger
pub const SHUTDOWN_ROLES: [Role; 2] = [Role::Owner, Role::ShowStopper];

#[derive(Accounts)]
pub struct Cage<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Either an owner or a show-stopper grant, so no fixed seeds
    pub role_grant: Option<Account<'info, RoleGrant>>,

    pub authority: Signer<'info>,
}

/// Freeze risk-increasing operations. Caging a caged ledger does nothing.
pub fn handler(ctx: Context<Cage>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    require_any_role(ctx.accounts.role_grant.as_deref(), &SHUTDOWN_ROLES, &authority)?;

    let now = Clock::get()?.unix_timestamp;
    if !ctx.accounts.ledger.cage(now) {
        msg!("Ledger already caged");
        return Ok(());
    }

    msg!("Ledger caged by {}", authority);

    emit!(LedgerCaged {
        authority,
        timestamp: now,
    });

    Ok(())
}

#[event]
pub struct LedgerCaged {
    pub authority: Pubkey,
    pub timestamp: i64,
}
