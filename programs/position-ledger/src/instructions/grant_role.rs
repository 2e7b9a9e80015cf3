use anchor_lang::prelude::*;
use crate::access::require_role;
use crate::constants::*;
use crate::state::{Role, RoleGrant};

#[derive(Accounts)]
#[instruction(role: Role, account: Pubkey)]
pub struct GrantRole<'info> {
    #[account(
        init,
        payer = authority,
        space = RoleGrant::LEN,
        seeds = [ROLE_SEED, role.seed(), account.as_ref()],
        bump
    )]
    pub grant: Account<'info, RoleGrant>,

    #[account(
        seeds = [ROLE_SEED, Role::Owner.seed(), authority.key().as_ref()],
        bump
    )]
    pub owner_grant: Option<Account<'info, RoleGrant>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<GrantRole>, role: Role, account: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    // Only owners hand out roles
    require_role(ctx.accounts.owner_grant.as_deref(), Role::Owner, &authority)?;

    let grant = &mut ctx.accounts.grant;
    grant.role = role;
    grant.account = account;
    grant.granted_by = authority;
    grant.bump = ctx.bumps.grant;

    msg!("Granted {:?} to {}", role, account);

    emit!(RoleGranted {
        role,
        account,
        granted_by: authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct RoleGranted {
    pub role: Role,
    pub account: Pubkey,
    pub granted_by: Pubkey,
    pub timestamp: i64,
}
