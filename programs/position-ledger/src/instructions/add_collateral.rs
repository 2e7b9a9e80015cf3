use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::accounting;
use crate::constants::*;
use crate::math::{Delta, Wad};
use crate::state::{CollateralBalance, Ledger, Role, RoleGrant};

#[derive(Accounts)]
#[instruction(pool_id: PoolId, owner: Pubkey)]
pub struct AddCollateral<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = adapter,
        space = CollateralBalance::LEN,
        seeds = [COLLATERAL_BALANCE_SEED, pool_id.as_ref(), owner.as_ref()],
        bump
    )]
    pub collateral_balance: Account<'info, CollateralBalance>,

    #[account(
        seeds = [ROLE_SEED, Role::Adapter.seed(), adapter.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub adapter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Credit or debit unlocked collateral on behalf of an adapter that custodies
/// the underlying asset. Allowed while the ledger is caged.
pub fn handler(ctx: Context<AddCollateral>, pool_id: PoolId, owner: Pubkey, amount: i128) -> Result<()> {
    let adapter = ctx.accounts.adapter.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::Adapter, &adapter)?;

    let balance = &mut ctx.accounts.collateral_balance;
    balance.bind(pool_id, owner, ctx.bumps.collateral_balance);

    let delta = Delta::<Wad>::from_signed(amount);
    let change = accounting::add_collateral(&ctx.accounts.ledger, balance, delta)?;

    msg!("Collateral {} for {}: {} -> {}", delta, owner, change.before, change.after);

    emit!(CollateralAdded {
        pool_id,
        owner,
        adapter,
        delta,
        before: change.before,
        after: change.after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct CollateralAdded {
    pub pool_id: PoolId,
    pub owner: Pubkey,
    pub adapter: Pubkey,
    pub delta: Delta<Wad>,
    pub before: Wad,
    pub after: Wad,
    pub timestamp: i64,
}
