use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::state::{Role, RoleGrant};

#[derive(Accounts)]
#[instruction(role: Role, account: Pubkey)]
pub struct RevokeRole<'info> {
    #[account(
        mut,
        close = authority,
        seeds = [ROLE_SEED, role.seed(), account.as_ref()],
        bump = grant.bump
    )]
    pub grant: Account<'info, RoleGrant>,

    #[account(
        seeds = [ROLE_SEED, Role::Owner.seed(), authority.key().as_ref()],
        bump
    )]
    pub owner_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<RevokeRole>, role: Role, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    require_role(ctx.accounts.owner_grant.as_deref(), Role::Owner, &authority)?;

    msg!("Revoked {:?} from {}", role, account);

    emit!(RoleRevoked {
        role,
        account,
        revoked_by: authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Pubkey,
    pub revoked_by: Pubkey,
    pub timestamp: i64,
}
