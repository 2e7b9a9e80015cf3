use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::accounting;
use crate::constants::*;
use crate::math::Rad;
use crate::state::{CurrencyBalance, Ledger, Role, RoleGrant, SystemBadDebt};

#[derive(Accounts)]
#[instruction(from: Pubkey, to: Pubkey)]
pub struct MintUnbackedCurrency<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = minter,
        space = SystemBadDebt::LEN,
        seeds = [BAD_DEBT_SEED, from.as_ref()],
        bump
    )]
    pub from_bad_debt: Account<'info, SystemBadDebt>,

    #[account(
        init_if_needed,
        payer = minter,
        space = CurrencyBalance::LEN,
        seeds = [CURRENCY_BALANCE_SEED, to.as_ref()],
        bump
    )]
    pub to_balance: Account<'info, CurrencyBalance>,

    #[account(
        seeds = [ROLE_SEED, Role::Mintable.seed(), minter.key().as_ref()],
        bump
    )]
    pub role_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub minter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintUnbackedCurrency>, from: Pubkey, to: Pubkey, value: Rad) -> Result<()> {
    let minter = ctx.accounts.minter.key();

    require_role(ctx.accounts.role_grant.as_deref(), Role::Mintable, &minter)?;

    let accounts = &mut *ctx.accounts;
    accounts.from_bad_debt.bind(from, ctx.bumps.from_bad_debt);
    accounts.to_balance.bind(to, ctx.bumps.to_balance);

    let (bad_debt, currency) = accounting::mint_unbacked_currency(
        &mut accounts.ledger,
        &mut accounts.from_bad_debt,
        &mut accounts.to_balance,
        value,
    )?;

    msg!("Minted {} unbacked currency to {} against {}", value, to, from);
    msg!("Total unbacked: {}", accounts.ledger.total_unbacked_currency);

    emit!(UnbackedCurrencyMinted {
        from,
        to,
        minter,
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
pub struct UnbackedCurrencyMinted {
    pub from: Pubkey,
    pub to: Pubkey,
    pub minter: Pubkey,
    pub value: Rad,
    pub bad_debt_before: Rad,
    pub bad_debt_after: Rad,
    pub currency_before: Rad,
    pub currency_after: Rad,
    pub timestamp: i64,
}
