use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod access;
pub mod accounting;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use constants::PoolId;
use instructions::*;
use math::{Rad, Ray};
use state::{PoolParams, Role};

#[program]
pub mod position_ledger {
    use super::*;

    /// Create the ledger and grant the owner role to the deployer
    /// Can only be called once
    pub fn initialize(ctx: Context<Initialize>, total_debt_ceiling: Rad) -> Result<()> {
        instructions::initialize::handler(ctx, total_debt_ceiling)
    }

    /// Grant a role to an account (owner only)
    pub fn grant_role(ctx: Context<GrantRole>, role: Role, account: Pubkey) -> Result<()> {
        instructions::grant_role::handler(ctx, role, account)
    }

    /// Revoke a role from an account (owner only)
    pub fn revoke_role(ctx: Context<RevokeRole>, role: Role, account: Pubkey) -> Result<()> {
        instructions::revoke_role::handler(ctx, role, account)
    }

    /// Register a collateral pool with a unit rate
    pub fn init_collateral_pool(
        ctx: Context<InitCollateralPool>,
        pool_id: PoolId,
        params: PoolParams,
    ) -> Result<()> {
        instructions::init_collateral_pool::handler(ctx, pool_id, params)
    }

    /// Update any of a pool's risk parameters
    pub fn set_pool_params(
        ctx: Context<AdminSetPoolParams>,
        pool_id: PoolId,
        params: UpdatePoolParams,
    ) -> Result<()> {
        instructions::admin_set_params::handler(ctx, pool_id, params)
    }

    /// Update the ceiling on currency issued across all pools
    pub fn set_total_debt_ceiling(
        ctx: Context<AdminSetTotalDebtCeiling>,
        total_debt_ceiling: Rad,
    ) -> Result<()> {
        instructions::admin_set_total_debt_ceiling::handler(ctx, total_debt_ceiling)
    }

    /// Pause or unpause every value-moving instruction
    pub fn set_paused(ctx: Context<AdminSetPaused>, paused: bool) -> Result<()> {
        instructions::admin_set_paused::handler(ctx, paused)
    }

    /// Allow a delegate to act on the caller's balances and positions
    pub fn whitelist(ctx: Context<Whitelist>, delegate: Pubkey) -> Result<()> {
        instructions::whitelist::handler(ctx, delegate)
    }

    /// Remove a delegate of the caller
    pub fn unwhitelist(ctx: Context<Unwhitelist>, delegate: Pubkey) -> Result<()> {
        instructions::unwhitelist::handler(ctx, delegate)
    }

    /// Credit or debit unlocked collateral (adapters only)
    pub fn add_collateral(
        ctx: Context<AddCollateral>,
        pool_id: PoolId,
        owner: Pubkey,
        amount: i128,
    ) -> Result<()> {
        instructions::add_collateral::handler(ctx, pool_id, owner, amount)
    }

    /// Transfer unlocked collateral between accounts
    pub fn move_collateral(ctx: Context<MoveCollateral>, args: MoveCollateralArgs) -> Result<()> {
        instructions::move_collateral::handler(ctx, args)
    }

    /// Transfer currency between accounts
    pub fn move_currency(ctx: Context<MoveCurrency>, args: MoveCurrencyArgs) -> Result<()> {
        instructions::move_currency::handler(ctx, args)
    }

    /// Lock or free collateral and draw or repay debt on a position
    /// Enforces ceilings, safety and the debt floor
    pub fn adjust_position(ctx: Context<AdjustPosition>, args: AdjustPositionArgs) -> Result<()> {
        instructions::adjust_position::handler(ctx, args)
    }

    /// Move collateral and debt between two positions of one pool
    pub fn move_position(ctx: Context<MovePosition>, args: MovePositionArgs) -> Result<()> {
        instructions::move_position::handler(ctx, args)
    }

    /// Seize an unsafe position into bad-debt accounting (liquidation engine only)
    pub fn confiscate_position(
        ctx: Context<ConfiscatePosition>,
        args: ConfiscatePositionArgs,
    ) -> Result<()> {
        instructions::confiscate_position::handler(ctx, args)
    }

    /// Mint currency backed only by bad debt
    pub fn mint_unbacked_currency(
        ctx: Context<MintUnbackedCurrency>,
        from: Pubkey,
        to: Pubkey,
        value: Rad,
    ) -> Result<()> {
        instructions::mint_unbacked_currency::handler(ctx, from, to, value)
    }

    /// Burn the caller's currency against its bad debt
    pub fn settle_system_bad_debt(ctx: Context<SettleSystemBadDebt>, value: Rad) -> Result<()> {
        instructions::settle_system_bad_debt::handler(ctx, value)
    }

    /// Compound a pool's accumulated rate and mint the interest to a recipient
    pub fn accrue_stability_fee(
        ctx: Context<AccrueStabilityFee>,
        pool_id: PoolId,
        recipient: Pubkey,
        rate_multiplier: Ray,
    ) -> Result<()> {
        instructions::accrue_stability_fee::handler(ctx, pool_id, recipient, rate_multiplier)
    }

    /// Shut the ledger down
    pub fn cage(ctx: Context<Cage>) -> Result<()> {
        instructions::cage::handler(ctx)
    }

    /// Bring a caged ledger back to live
    pub fn uncage(ctx: Context<Uncage>) -> Result<()> {
        instructions::uncage::handler(ctx)
    }
}
