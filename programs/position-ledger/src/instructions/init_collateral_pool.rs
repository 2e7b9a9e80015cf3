use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::state::{CollateralPool, PoolParams, Role, RoleGrant};

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct InitCollateralPool<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = CollateralPool::LEN,
        seeds = [COLLATERAL_POOL_SEED, pool_id.as_ref()],
        bump
    )]
    pub pool: Account<'info, CollateralPool>,

    #[account(
        seeds = [ROLE_SEED, Role::CollateralManager.seed(), authority.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitCollateralPool>, pool_id: PoolId, params: PoolParams) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::CollateralManager, &authority)?;

    // Fails when the pool already has a rate
    let pool = &mut ctx.accounts.pool;
    pool.initialize(pool_id, &params, ctx.bumps.pool)?;

    msg!("Collateral pool initialized: {}", Pubkey::new_from_array(pool_id));
    msg!("Price: {}, Ceiling: {}, Floor: {}, Position ceiling: {}",
        params.price_with_safety_margin,
        params.debt_ceiling,
        params.debt_floor,
        params.position_debt_ceiling
    );

    emit!(CollateralPoolInitialized {
        pool_id,
        params,
        authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct CollateralPoolInitialized {
    pub pool_id: PoolId,
    pub params: PoolParams,
    pub authority: Pubkey,
    pub timestamp: i64,
}
