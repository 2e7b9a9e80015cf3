use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::math::Rad;
use crate::state::{Ledger, Role, RoleGrant};

#[derive(Accounts)]
pub struct AdminSetTotalDebtCeiling<'info> {
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

pub fn handler(ctx: Context<AdminSetTotalDebtCeiling>, total_debt_ceiling: Rad) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    require_role(ctx.accounts.owner_grant.as_deref(), Role::Owner, &admin)?;

    let ledger = &mut ctx.accounts.ledger;
    let before = ledger.total_debt_ceiling;
    ledger.total_debt_ceiling = total_debt_ceiling;

    msg!("Total debt ceiling: {} -> {}", before, total_debt_ceiling);

    emit!(TotalDebtCeilingUpdated {
        admin,
        before,
        after: total_debt_ceiling,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct TotalDebtCeilingUpdated {
    pub admin: Pubkey,
    pub before: Rad,
    pub after: Rad,
    pub timestamp: i64,
}
