use anchor_lang::prelude::*;
use crate::access::Authority;
use crate::accounting::{self, Change};
use crate::constants::*;
use crate::errors::LedgerError;
use crate::math::Wad;
use crate::state::{CollateralBalance, Ledger, WhitelistEntry};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct MoveCollateralArgs {
    pub pool_id: PoolId,
    pub src: Pubkey,
    pub dst: Pubkey,
    pub amount: Wad,
}

#[derive(Accounts)]
#[instruction(args: MoveCollateralArgs)]
pub struct MoveCollateral<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [COLLATERAL_BALANCE_SEED, args.pool_id.as_ref(), args.src.as_ref()],
        bump = src_balance.bump
    )]
    pub src_balance: Account<'info, CollateralBalance>,

    #[account(
        init_if_needed,
        payer = caller,
        space = CollateralBalance::LEN,
        seeds = [COLLATERAL_BALANCE_SEED, args.pool_id.as_ref(), args.dst.as_ref()],
        bump
    )]
    pub dst_balance: Account<'info, CollateralBalance>,

    /// Present when the caller acts as a delegate of `src`
    #[account(
        seeds = [WHITELIST_SEED, args.src.as_ref(), caller.key().as_ref()],
        bump
    )]
    pub src_whitelist: Option<Account<'info, WhitelistEntry>>,

    #[account(mut)]
    pub caller: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MoveCollateral>, args: MoveCollateralArgs) -> Result<()> {
    let caller = ctx.accounts.caller.key();

    let authority = Authority::new(caller).with_whitelist(ctx.accounts.src_whitelist.as_deref());

    let (src, dst) = if args.src == args.dst {
        // Both accounts are the same record: nothing moves, but the transfer
        // must still be permitted and covered
        ctx.accounts.ledger.require_not_paused()?;
        let src_balance = &ctx.accounts.src_balance;
        authority.require_may_act_for(&src_balance.owner)?;
        require!(src_balance.amount >= args.amount, LedgerError::InsufficientBalance);
        let unchanged = Change { before: src_balance.amount, after: src_balance.amount };
        (unchanged, unchanged)
    } else {
        let dst_balance = &mut ctx.accounts.dst_balance;
        dst_balance.bind(args.pool_id, args.dst, ctx.bumps.dst_balance);
        accounting::move_collateral(
            &ctx.accounts.ledger,
            &authority,
            &mut ctx.accounts.src_balance,
            dst_balance,
            args.amount,
        )?
    };

    msg!("Moved {} collateral from {} to {}", args.amount, args.src, args.dst);

    emit!(CollateralMoved {
        pool_id: args.pool_id,
        src: args.src,
        dst: args.dst,
        caller,
        amount: args.amount,
        src_before: src.before,
        src_after: src.after,
        dst_before: dst.before,
        dst_after: dst.after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct CollateralMoved {
    pub pool_id: PoolId,
    pub src: Pubkey,
    pub dst: Pubkey,
    pub caller: Pubkey,
    pub amount: Wad,
    pub src_before: Wad,
    pub src_after: Wad,
    pub dst_before: Wad,
    pub dst_after: Wad,
    pub timestamp: i64,
}
