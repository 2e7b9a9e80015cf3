use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::accounting::{self, ConfiscateAccounts, PositionSnapshot};
use crate::constants::*;
use crate::math::{Delta, Rad, Wad};
use crate::state::{CollateralBalance, CollateralPool, Ledger, Position, Role, RoleGrant, SystemBadDebt};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ConfiscatePositionArgs {
    pub pool_id: PoolId,
    pub position_owner: Pubkey,
    /// Receives the seized collateral
    pub collateral_creditor: Pubkey,
    /// Carries the seized debt as system bad debt
    pub debt_debtor: Pubkey,
    pub collateral_delta: i128,
    pub debt_share_delta: i128,
}

#[derive(Accounts)]
#[instruction(args: ConfiscatePositionArgs)]
pub struct ConfiscatePosition<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [COLLATERAL_POOL_SEED, args.pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, CollateralPool>,

    #[account(
        mut,
        seeds = [POSITION_SEED, args.pool_id.as_ref(), args.position_owner.as_ref()],
        bump = position.bump
    )]
    pub position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = liquidator,
        space = CollateralBalance::LEN,
        seeds = [COLLATERAL_BALANCE_SEED, args.pool_id.as_ref(), args.collateral_creditor.as_ref()],
        bump
    )]
    pub creditor_balance: Account<'info, CollateralBalance>,

    #[account(
        init_if_needed,
        payer = liquidator,
        space = SystemBadDebt::LEN,
        seeds = [BAD_DEBT_SEED, args.debt_debtor.as_ref()],
        bump
    )]
    pub debtor_bad_debt: Account<'info, SystemBadDebt>,

    #[account(
        seeds = [ROLE_SEED, Role::LiquidationEngine.seed(), liquidator.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub liquidator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Seize collateral and debt from a position into bad-debt accounting.
/// No safety check is made and the ledger may be caged.
pub fn handler(ctx: Context<ConfiscatePosition>, args: ConfiscatePositionArgs) -> Result<()> {
    let liquidator = ctx.accounts.liquidator.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::LiquidationEngine, &liquidator)?;

    let accounts = &mut *ctx.accounts;
    accounts.creditor_balance.bind(args.pool_id, args.collateral_creditor, ctx.bumps.creditor_balance);
    accounts.debtor_bad_debt.bind(args.debt_debtor, ctx.bumps.debtor_bad_debt);

    let collateral_delta = Delta::<Wad>::from_signed(args.collateral_delta);
    let debt_share_delta = Delta::<Wad>::from_signed(args.debt_share_delta);

    let outcome = accounting::confiscate_position(
        ConfiscateAccounts {
            ledger: &mut accounts.ledger,
            pool: &mut accounts.pool,
            position: &mut accounts.position,
            collateral_creditor: &mut accounts.creditor_balance,
            debt_debtor: &mut accounts.debtor_bad_debt,
        },
        collateral_delta,
        debt_share_delta,
    )?;

    msg!("Confiscated from {}: collateral {}, debt share {}",
        args.position_owner,
        collateral_delta,
        debt_share_delta
    );
    msg!("Bad debt of {}: {} -> {}",
        args.debt_debtor,
        outcome.bad_debt.before,
        outcome.bad_debt.after
    );

    if accounts.position.is_empty() {
        msg!("Position of {} fully confiscated", args.position_owner);
    }

    emit!(PositionConfiscated {
        pool_id: args.pool_id,
        position_owner: args.position_owner,
        collateral_creditor: args.collateral_creditor,
        debt_debtor: args.debt_debtor,
        liquidator,
        collateral_delta,
        debt_share_delta,
        debt_value_delta: outcome.debt_value_delta,
        before: outcome.position.before,
        after: outcome.position.after,
        bad_debt_before: outcome.bad_debt.before,
        bad_debt_after: outcome.bad_debt.after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct PositionConfiscated {
    pub pool_id: PoolId,
    pub position_owner: Pubkey,
    pub collateral_creditor: Pubkey,
    pub debt_debtor: Pubkey,
    pub liquidator: Pubkey,
    pub collateral_delta: Delta<Wad>,
    pub debt_share_delta: Delta<Wad>,
    pub debt_value_delta: Delta<Rad>,
    pub before: PositionSnapshot,
    pub after: PositionSnapshot,
    pub bad_debt_before: Rad,
    pub bad_debt_after: Rad,
    pub timestamp: i64,
}
