use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::accounting;
use crate::constants::*;
use crate::math::{Rad, Ray};
use crate::state::{CollateralPool, CurrencyBalance, Ledger, Role, RoleGrant};

#[derive(Accounts)]
#[instruction(pool_id: PoolId, recipient: Pubkey)]
pub struct AccrueStabilityFee<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [COLLATERAL_POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, CollateralPool>,

    #[account(
        init_if_needed,
        payer = collector,
        space = CurrencyBalance::LEN,
        seeds = [CURRENCY_BALANCE_SEED, recipient.as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, CurrencyBalance>,

    #[account(
        seeds = [ROLE_SEED, Role::StabilityFeeCollector.seed(), collector.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub collector: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AccrueStabilityFee>,
    pool_id: PoolId,
    recipient: Pubkey,
    rate_multiplier: Ray,
) -> Result<()> {
    let collector = ctx.accounts.collector.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::StabilityFeeCollector, &collector)?;

    let accounts = &mut *ctx.accounts;
    accounts.recipient_balance.bind(recipient, ctx.bumps.recipient_balance);

    let outcome = accounting::accrue_stability_fee(
        &mut accounts.ledger,
        &mut accounts.pool,
        &mut accounts.recipient_balance,
        rate_multiplier,
    )?;

    msg!("Accumulated rate: {} -> {}", outcome.rate.before, outcome.rate.after);
    msg!("Stability fee of {} minted to {}", outcome.fee, recipient);

    emit!(StabilityFeeAccrued {
        pool_id,
        recipient,
        collector,
        rate_multiplier,
        rate_before: outcome.rate.before,
        rate_after: outcome.rate.after,
        fee: outcome.fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct StabilityFeeAccrued {
    pub pool_id: PoolId,
    pub recipient: Pubkey,
    pub collector: Pubkey,
    pub rate_multiplier: Ray,
    pub rate_before: Ray,
    pub rate_after: Ray,
    pub fee: Rad,
    pub timestamp: i64,
}
