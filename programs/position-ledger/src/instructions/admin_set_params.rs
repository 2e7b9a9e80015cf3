use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::math::{Rad, Ray};
use crate::state::{CollateralPool, PoolParams, Role, RoleGrant};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdatePoolParams {
    pub price_with_safety_margin: Option<Ray>,
    pub debt_ceiling: Option<Rad>,
    pub debt_floor: Option<Rad>,
    pub position_debt_ceiling: Option<Rad>,
}

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct AdminSetPoolParams<'info> {
    #[account(
        mut,
        seeds = [COLLATERAL_POOL_SEED, pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, CollateralPool>,

    #[account(
        seeds = [ROLE_SEED, Role::RegistryWriter.seed(), authority.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<AdminSetPoolParams>, pool_id: PoolId, params: UpdatePoolParams) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    require_role(ctx.accounts.role_grant.as_deref(), Role::RegistryWriter, &authority)?;

    let pool = &mut ctx.accounts.pool;
    pool.require_initialized()?;

    let before = pool.params();
    let mut after = before;

    // Update price if provided
    if let Some(price) = params.price_with_safety_margin {
        after.price_with_safety_margin = price;
        msg!("Updated price with safety margin to {}", price);
    }

    // Update pool debt ceiling if provided
    if let Some(debt_ceiling) = params.debt_ceiling {
        after.debt_ceiling = debt_ceiling;
        msg!("Updated debt ceiling to {}", debt_ceiling);
    }

    // Update debt floor if provided
    if let Some(debt_floor) = params.debt_floor {
        after.debt_floor = debt_floor;
        msg!("Updated debt floor to {}", debt_floor);
    }

    // Update per-position ceiling if provided
    if let Some(position_debt_ceiling) = params.position_debt_ceiling {
        after.position_debt_ceiling = position_debt_ceiling;
        msg!("Updated position debt ceiling to {}", position_debt_ceiling);
    }

    pool.set_params(&after);

    emit!(PoolParamsUpdated {
        pool_id,
        before,
        after,
        authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct PoolParamsUpdated {
    pub pool_id: PoolId,
    pub before: PoolParams,
    pub after: PoolParams,
    pub authority: Pubkey,
    pub timestamp: i64,
}
