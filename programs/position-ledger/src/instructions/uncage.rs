use anchor_lang::prelude::*;
use crate::access::require_any_role;
use crate::constants::*;
use crate::instructions::cage::SHUTDOWN_ROLES;
use crate::state::{Ledger, RoleGrant};

#[derive(Accounts)]
pub struct Uncage<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    pub role_grant: Option<Account<'info, RoleGrant>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<Uncage>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    require_any_role(ctx.accounts.role_grant.as_deref(), &SHUTDOWN_ROLES, &authority)?;

    let ledger = &mut ctx.accounts.ledger;
    let caged_at = ledger.caged_at;
    ledger.uncage()?;

    msg!("Ledger uncaged by {}, caged since {}", authority, caged_at);

    emit!(LedgerUncaged {
        authority,
        caged_at,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct LedgerUncaged {
    pub authority: Pubkey,
    pub caged_at: i64,
    pub timestamp: i64,
}
