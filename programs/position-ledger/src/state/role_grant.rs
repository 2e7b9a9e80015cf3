use anchor_lang::prelude::*;

/// Well-known roles checked by privileged entry points
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    Adapter,
    LiquidationEngine,
    StabilityFeeCollector,
    PositionManager,
    CollateralManager,
    Mintable,
    ShowStopper,
    RegistryWriter,
}

impl Role {
    /// PDA seed of grants for this role
    pub fn seed(&self) -> &'static [u8] {
        match self {
            Role::Owner => b"owner",
            Role::Adapter => b"adapter",
            Role::LiquidationEngine => b"liquidation_engine",
            Role::StabilityFeeCollector => b"stability_fee_collector",
            Role::PositionManager => b"position_manager",
            Role::CollateralManager => b"collateral_manager",
            Role::Mintable => b"mintable",
            Role::ShowStopper => b"show_stopper",
            Role::RegistryWriter => b"registry_writer",
        }
    }
}

/// Grant of one role to one account
#[account]
#[derive(Debug)]
pub struct RoleGrant {
    pub role: Role,
    pub account: Pubkey,
    pub granted_by: Pubkey,
    pub bump: u8,
}

impl RoleGrant {
    pub const LEN: usize = 8 + // discriminator
        1 + // role
        32 + // account
        32 + // granted_by
        1; // bump
}
