use anchor_lang::prelude::*;
use crate::constants::*;
use crate::math::Rad;
use crate::state::{Ledger, LiveFlag, Role, RoleGrant};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = Ledger::LEN,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Owner role for the deployer
    #[account(
        init,
        payer = admin,
        space = RoleGrant::LEN,
        seeds = [ROLE_SEED, Role::Owner.seed(), admin.key().as_ref()],
        bump
    )]
    pub owner_grant: Account<'info, RoleGrant>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, total_debt_ceiling: Rad) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let admin = ctx.accounts.admin.key();

    // Initialize ledger
    ledger.admin = admin;
    ledger.live = LiveFlag::Live;
    ledger.paused = false;
    ledger.total_debt_ceiling = total_debt_ceiling;
    ledger.total_currency_issued = Rad::ZERO;
    ledger.total_unbacked_currency = Rad::ZERO;
    ledger.caged_at = 0;
    ledger.bump = ctx.bumps.ledger;
    ledger._reserved = [0; 8];

    // Grant owner role to the deployer
    let owner_grant = &mut ctx.accounts.owner_grant;
    owner_grant.role = Role::Owner;
    owner_grant.account = admin;
    owner_grant.granted_by = admin;
    owner_grant.bump = ctx.bumps.owner_grant;

    msg!("Ledger initialized with admin: {}", admin);
    msg!("Total debt ceiling: {}", total_debt_ceiling);

    emit!(LedgerInitialized {
        admin,
        total_debt_ceiling,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub total_debt_ceiling: Rad,
    pub timestamp: i64,
}
