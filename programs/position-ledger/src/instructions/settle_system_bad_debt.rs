use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::accounting;
use crate::constants::*;
use crate::math::Rad;
use crate::state::{CurrencyBalance, Ledger, Role, RoleGrant, SystemBadDebt};

#[derive(Accounts)]
pub struct SettleSystemBadDebt<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [BAD_DEBT_SEED, settler.key().as_ref()],
        bump = bad_debt.bump
    )]
    pub bad_debt: Account<'info, SystemBadDebt>,

    #[account(
        mut,
        seeds = [CURRENCY_BALANCE_SEED, settler.key().as_ref()],
        bump = currency_balance.bump
    )]
    pub currency_balance: Account<'info, CurrencyBalance>,

    #[account(
        seeds = [ROLE_SEED, Role::Mintable.seed(), settler.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    pub settler: Signer<'info>,
}

/// Burn the caller's currency against the caller's own bad debt
pub fn handler(ctx: Context<SettleSystemBadDebt>, value: Rad) -> Result<()> {
    let settler = ctx.accounts.settler.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::Mintable, &settler)?;

    let accounts = &mut *ctx.accounts;
    let (bad_debt, currency) = accounting::settle_system_bad_debt(
        &mut accounts.ledger,
        &mut accounts.bad_debt,
        &mut accounts.currency_balance,
        value,
    )?;

    msg!("Settled {} bad debt of {}", value, settler);
    msg!("Total unbacked: {}", accounts.ledger.total_unbacked_currency);

    emit!(SystemBadDebtSettled {
        settler,
        value,
        bad_debt_before: bad_debt.before,
        bad_debt_after: bad_debt.after,
        currency_before: currency.before,
        currency_after: currency.after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct SystemBadDebtSettled {
    pub settler: Pubkey,
    pub value: Rad,
    pub bad_debt_before: Rad,
    pub bad_debt_after: Rad,
    pub currency_before: Rad,
    pub currency_after: Rad,
    pub timestamp: i64,
}
