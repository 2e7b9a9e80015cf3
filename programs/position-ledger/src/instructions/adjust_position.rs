use anchor_lang::prelude::*;
use crate::access::Authority;
use crate::accounting::{self, AdjustPositionAccounts, PositionSnapshot};
use crate::constants::*;
use crate::math::{Delta, Rad, Wad};
use crate::state::{
    CollateralBalance, CollateralPool, CurrencyBalance, Ledger, Position, WhitelistEntry,
};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AdjustPositionArgs {
    pub pool_id: PoolId,
    pub position_owner: Pubkey,
    /// Pays collateral into the position or receives freed collateral
    pub collateral_owner: Pubkey,
    /// Receives drawn currency or pays for repaid debt
    pub currency_owner: Pubkey,
    pub collateral_delta: i128,
    pub debt_share_delta: i128,
}

#[derive(Accounts)]
#[instruction(args: AdjustPositionArgs)]
pub struct AdjustPosition<'info> {
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
        init_if_needed,
        payer = caller,
        space = Position::LEN,
        seeds = [POSITION_SEED, args.pool_id.as_ref(), args.position_owner.as_ref()],
        bump
    )]
    pub position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = caller,
        space = CollateralBalance::LEN,
        seeds = [COLLATERAL_BALANCE_SEED, args.pool_id.as_ref(), args.collateral_owner.as_ref()],
        bump
    )]
    pub collateral_balance: Account<'info, CollateralBalance>,

    #[account(
        init_if_needed,
        payer = caller,
        space = CurrencyBalance::LEN,
        seeds = [CURRENCY_BALANCE_SEED, args.currency_owner.as_ref()],
        bump
    )]
    pub currency_balance: Account<'info, CurrencyBalance>,

    #[account(
        seeds = [WHITELIST_SEED, args.position_owner.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub position_owner_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(
        seeds = [WHITELIST_SEED, args.collateral_owner.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub collateral_owner_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(
        seeds = [WHITELIST_SEED, args.currency_owner.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub currency_owner_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AdjustPosition>, args: AdjustPositionArgs) -> Result<()> {
    let caller = ctx.accounts.caller.key();

    let authority = Authority::new(caller).with_whitelist(
        [
            ctx.accounts.position_owner_whitelist.as_deref(),
            ctx.accounts.collateral_owner_whitelist.as_deref(),
            ctx.accounts.currency_owner_whitelist.as_deref(),
        ]
        .into_iter()
        .flatten(),
    );

    let accounts = &mut *ctx.accounts;
    accounts.position.bind(args.pool_id, args.position_owner, ctx.bumps.position);
    accounts.collateral_balance.bind(args.pool_id, args.collateral_owner, ctx.bumps.collateral_balance);
    accounts.currency_balance.bind(args.currency_owner, ctx.bumps.currency_balance);

    let collateral_delta = Delta::<Wad>::from_signed(args.collateral_delta);
    let debt_share_delta = Delta::<Wad>::from_signed(args.debt_share_delta);

    let outcome = accounting::adjust_position(
        AdjustPositionAccounts {
            ledger: &mut accounts.ledger,
            pool: &mut accounts.pool,
            position: &mut accounts.position,
            collateral_owner: &mut accounts.collateral_balance,
            currency_owner: &mut accounts.currency_balance,
        },
        &authority,
        collateral_delta,
        debt_share_delta,
    )?;

    msg!("Adjusted position of {}: collateral {}, debt share {}",
        args.position_owner,
        collateral_delta,
        debt_share_delta
    );
    msg!("Locked: {}, Debt share: {}, Debt value: {}",
        outcome.position.after.locked_collateral,
        outcome.position.after.debt_share,
        outcome.debt_value
    );

    emit!(PositionAdjusted {
        pool_id: args.pool_id,
        position_owner: args.position_owner,
        collateral_owner: args.collateral_owner,
        currency_owner: args.currency_owner,
        caller,
        collateral_delta,
        debt_share_delta,
        debt_value_delta: outcome.debt_value_delta,
        before: outcome.position.before,
        after: outcome.position.after,
        debt_value: outcome.debt_value,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct PositionAdjusted {
    pub pool_id: PoolId,
    pub position_owner: Pubkey,
    pub collateral_owner: Pubkey,
    pub currency_owner: Pubkey,
    pub caller: Pubkey,
    pub collateral_delta: Delta<Wad>,
    pub debt_share_delta: Delta<Wad>,
    pub debt_value_delta: Delta<Rad>,
    pub before: PositionSnapshot,
    pub after: PositionSnapshot,
    pub debt_value: Rad,
    pub timestamp: i64,
}
