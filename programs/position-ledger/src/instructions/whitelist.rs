use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::WhitelistEntry;

#[derive(Accounts)]
#[instruction(delegate: Pubkey)]
pub struct Whitelist<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = WhitelistEntry::LEN,
        seeds = [WHITELIST_SEED, owner.key().as_ref(), delegate.as_ref()],
        bump
    )]
    pub entry: Account<'info, WhitelistEntry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Allow `delegate` to act on the caller's balances and positions.
/// Granting an existing entry again changes nothing.
pub fn handler(ctx: Context<Whitelist>, delegate: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let entry = &mut ctx.accounts.entry;

    entry.owner = owner;
    entry.delegate = delegate;
    entry.bump = ctx.bumps.entry;

    msg!("{} whitelisted delegate {}", owner, delegate);

    emit!(DelegateWhitelisted {
        owner,
        delegate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct DelegateWhitelisted {
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub timestamp: i64,
}
