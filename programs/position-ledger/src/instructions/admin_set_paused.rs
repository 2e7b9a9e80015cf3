use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::state::{Ledger, Role, RoleGrant};

#[derive(Accounts)]
pub struct AdminSetPaused<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        seeds = [ROLE_SEED, Role::Owner.seed(), admin.key().as_ref()],
        bump
    )]
    pub owner_grant: Option<Account<'info, RoleGrant>>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<AdminSetPaused>, paused: bool) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    require_role(ctx.accounts.owner_grant.as_deref(), Role::Owner, &admin)?;

    // Update paused state
    ctx.accounts.ledger.paused = paused;

    msg!("Ledger paused state set to: {}", paused);

    // Emit event for monitoring
    emit!(LedgerPausedStateChanged {
        admin,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct LedgerPausedStateChanged {
    pub admin: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
