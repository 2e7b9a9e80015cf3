use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::WhitelistEntry;

#[derive(Accounts)]
#[instruction(delegate: Pubkey)]
pub struct Unwhitelist<'info> {
    /// Closed with its rent returned to the owner
    #[account(
        mut,
        close = owner,
        seeds = [WHITELIST_SEED, owner.key().as_ref(), delegate.as_ref()],
        bump = entry.bump
    )]
    pub entry: Account<'info, WhitelistEntry>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<Unwhitelist>, delegate: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    msg!("{} removed delegate {}", owner, delegate);

    emit!(DelegateRemoved {
        owner,
        delegate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct DelegateRemoved {
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub timestamp: i64,
}
