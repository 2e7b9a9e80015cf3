use anchor_lang::prelude::*;
use crate::access::Authority;
use crate::accounting::{self, PositionSnapshot};
use crate::constants::*;
use crate::math::{Delta, Wad};
use crate::state::{CollateralPool, Ledger, Position, WhitelistEntry};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct MovePositionArgs {
    pub pool_id: PoolId,
    pub src: Pubkey,
    pub dst: Pubkey,
    pub collateral_delta: i128,
    pub debt_share_delta: i128,
}

#[derive(Accounts)]
#[instruction(args: MovePositionArgs)]
pub struct MovePosition<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        seeds = [COLLATERAL_POOL_SEED, args.pool_id.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, CollateralPool>,

    #[account(
        mut,
        seeds = [POSITION_SEED, args.pool_id.as_ref(), args.src.as_ref()],
        bump = src_position.bump
    )]
    pub src_position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = caller,
        space = Position::LEN,
        seeds = [POSITION_SEED, args.pool_id.as_ref(), args.dst.as_ref()],
        bump
    )]
    pub dst_position: Account<'info, Position>,

    #[account(
        seeds = [WHITELIST_SEED, args.src.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub src_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(
        seeds = [WHITELIST_SEED, args.dst.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub dst_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Split or merge positions: moves locked collateral and debt share from
/// `src` to `dst` without touching supply
pub fn handler(ctx: Context<MovePosition>, args: MovePositionArgs) -> Result<()> {
    let caller = ctx.accounts.caller.key();

    let authority = Authority::new(caller).with_whitelist(
        [
            ctx.accounts.src_whitelist.as_deref(),
            ctx.accounts.dst_whitelist.as_deref(),
        ]
        .into_iter()
        .flatten(),
    );

    let accounts = &mut *ctx.accounts;
    accounts.dst_position.bind(args.pool_id, args.dst, ctx.bumps.dst_position);

    let collateral_delta = Delta::<Wad>::from_signed(args.collateral_delta);
    let debt_share_delta = Delta::<Wad>::from_signed(args.debt_share_delta);

    let (src, dst) = accounting::move_position(
        &accounts.ledger,
        &accounts.pool,
        &authority,
        &mut accounts.src_position,
        &mut accounts.dst_position,
        collateral_delta,
        debt_share_delta,
    )?;

    msg!("Moved collateral {} and debt share {} from {} to {}",
        collateral_delta,
        debt_share_delta,
        args.src,
        args.dst
    );

    emit!(PositionMoved {
        pool_id: args.pool_id,
        src: args.src,
        dst: args.dst,
        caller,
        collateral_delta,
        debt_share_delta,
        src_before: src.before,
        src_after: src.after,
        dst_before: dst.before,
        dst_after: dst.after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct PositionMoved {
    pub pool_id: PoolId,
    pub src: Pubkey,
    pub dst: Pubkey,
    pub caller: Pubkey,
    pub collateral_delta: Delta<Wad>,
    pub debt_share_delta: Delta<Wad>,
    pub src_before: PositionSnapshot,
    pub src_after: PositionSnapshot,
    pub dst_before: PositionSnapshot,
    pub dst_after: PositionSnapshot,
    pub timestamp: i64,
}
