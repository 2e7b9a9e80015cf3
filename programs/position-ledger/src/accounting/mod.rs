//! State transitions of the position ledger.
//!
//! Every function here works on plain account data so it can run outside the
//! runtime. Each one computes all new values first, checks every invariant,
//! and only then writes, so an error leaves every record untouched.

use anchor_lang::prelude::*;

use crate::access::Authority;
use crate::errors::LedgerError;
use crate::math::{Delta, FixedPoint, Rad, Ray, Wad};
use crate::state::{
    CollateralBalance, CollateralPool, CurrencyBalance, Ledger, Position, SystemBadDebt,
};


/// Before and after values of one record
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change<T> {
    pub before: T,
    pub after: T,
}

/// Locked collateral and debt share of a position at one point in time
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub locked_collateral: Wad,
    pub debt_share: Wad,
}

impl From<&Position> for PositionSnapshot {
    fn from(position: &Position) -> Self {
        Self {
            locked_collateral: position.locked_collateral,
            debt_share: position.debt_share,
        }
    }
}

fn increase<T: FixedPoint>(value: T, amount: T) -> Result<T> {
    value
        .checked_add(amount)
        .ok_or(error!(LedgerError::MathOverflow))
}

fn debit<T: FixedPoint>(value: T, amount: T) -> Result<T> {
    value
        .checked_sub(amount)
        .ok_or(error!(LedgerError::InsufficientBalance))
}

/// Apply a signed change to a balance: going below zero is an insufficient
/// balance, going past the top is an overflow
fn apply_to_balance<T: FixedPoint>(value: T, delta: Delta<T>) -> Result<T> {
    match delta {
        Delta::Increase(amount) => increase(value, amount),
        Delta::Decrease(amount) => debit(value, amount),
    }
}

/// Apply a signed change to an aggregate, where either direction failing
/// means the books are inconsistent
fn apply_to_total<T: FixedPoint>(value: T, delta: Delta<T>) -> Result<T> {
    delta
        .apply_to(value)
        .ok_or(error!(LedgerError::MathOverflow))
}

/// Credit or debit an account's unlocked collateral (adapter entry point)
pub fn add_collateral(
    ledger: &Ledger,
    balance: &mut CollateralBalance,
    delta: Delta<Wad>,
) -> Result<Change<Wad>> {
    ledger.require_not_paused()?;

    let before = balance.amount;
    let after = apply_to_balance(before, delta)?;
    balance.amount = after;
    Ok(Change { before, after })
}

/// Transfer unlocked collateral between two accounts of the same pool.
/// `src` and `dst` are different records; a self-transfer is handled by the caller.
pub fn move_collateral(
    ledger: &Ledger,
    authority: &Authority,
    src: &mut CollateralBalance,
    dst: &mut CollateralBalance,
    amount: Wad,
) -> Result<(Change<Wad>, Change<Wad>)> {
    ledger.require_not_paused()?;
    authority.require_may_act_for(&src.owner)?;

    let src_after = debit(src.amount, amount)?;
    let dst_after = increase(dst.amount, amount)?;

    let src_change = Change { before: src.amount, after: src_after };
    let dst_change = Change { before: dst.amount, after: dst_after };
    src.amount = src_after;
    dst.amount = dst_after;

    Ok((src_change, dst_change))
}

/// Transfer currency between two accounts.
/// `src` and `dst` are different records; a self-transfer is handled by the caller.
pub fn move_currency(
    ledger: &Ledger,
    authority: &Authority,
    src: &mut CurrencyBalance,
    dst: &mut CurrencyBalance,
    amount: Rad,
) -> Result<(Change<Rad>, Change<Rad>)> {
    ledger.require_not_paused()?;
    authority.require_may_act_for(&src.owner)?;

    let src_after = debit(src.amount, amount)?;
    let dst_after = increase(dst.amount, amount)?;

    let src_change = Change { before: src.amount, after: src_after };
    let dst_change = Change { before: dst.amount, after: dst_after };
    src.amount = src_after;
    dst.amount = dst_after;

    Ok((src_change, dst_change))
}

/// Records touched by [`adjust_position`]
pub struct AdjustPositionAccounts<'a> {
    pub ledger: &'a mut Ledger,
    pub pool: &'a mut CollateralPool,
    pub position: &'a mut Position,
    /// Pays collateral into the position, or receives freed collateral
    pub collateral_owner: &'a mut CollateralBalance,
    /// Receives drawn currency, or pays repaid currency
    pub currency_owner: &'a mut CurrencyBalance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjustOutcome {
    pub position: Change<PositionSnapshot>,
    /// Currency minted (increase) or burned (decrease)
    pub debt_value_delta: Delta<Rad>,
    /// Real debt of the position after the change
    pub debt_value: Rad,
}

/// Lock or free collateral and draw or repay debt on one position.
///
/// Collateral moves between the position and `collateral_owner`'s unlocked
/// balance; currency is minted to or burned from `currency_owner`.
/// Making the position riskier (drawing debt or freeing collateral) needs the
/// position owner's consent; debiting a balance needs its owner's consent.
pub fn adjust_position(
    accounts: AdjustPositionAccounts<'_>,
    authority: &Authority,
    collateral_delta: Delta<Wad>,
    debt_share_delta: Delta<Wad>,
) -> Result<AdjustOutcome> {
    let AdjustPositionAccounts {
        ledger,
        pool,
        position,
        collateral_owner,
        currency_owner,
    } = accounts;

    ledger.require_not_paused()?;
    ledger.require_live()?;
    pool.require_initialized()?;

    let rate = pool.debt_accumulated_rate;

    let after = PositionSnapshot {
        locked_collateral: apply_to_balance(position.locked_collateral, collateral_delta)?,
        debt_share: apply_to_balance(position.debt_share, debt_share_delta)?,
    };
    let total_debt_share = apply_to_total(pool.total_debt_share, debt_share_delta)?;

    let debt_value_delta = debt_share_delta
        .mul_ray(rate)
        .ok_or(error!(LedgerError::MathOverflow))?;
    let pool_currency_issued = apply_to_total(pool.currency_issued, debt_value_delta)?;
    let total_currency_issued = apply_to_total(ledger.total_currency_issued, debt_value_delta)?;

    let debt_value = after
        .debt_share
        .mul_ray(rate)
        .ok_or(error!(LedgerError::MathOverflow))?;
    let collateral_value = after
        .locked_collateral
        .mul_ray(pool.price_with_safety_margin)
        .ok_or(error!(LedgerError::MathOverflow))?;

    let draws_debt = debt_share_delta.is_positive();
    let risk_increasing = draws_debt || collateral_delta.is_negative();

    if draws_debt {
        require!(
            pool_currency_issued <= pool.debt_ceiling
                && total_currency_issued <= ledger.total_debt_ceiling,
            LedgerError::CeilingExceeded
        );
    }

    if risk_increasing {
        require!(debt_value <= collateral_value, LedgerError::NotSafe);
    }

    if draws_debt {
        require!(
            debt_value <= pool.position_debt_ceiling,
            LedgerError::PositionDebtCeilingExceeded
        );
    }

    if risk_increasing {
        authority.require_may_act_for(&position.owner)?;
    }
    if collateral_delta.is_positive() {
        authority.require_may_act_for(&collateral_owner.owner)?;
    }
    if debt_share_delta.is_negative() {
        authority.require_may_act_for(&currency_owner.owner)?;
    }

    require!(
        debt_value.is_zero() || debt_value >= pool.debt_floor,
        LedgerError::DebtFloor
    );

    // Collateral flows opposite to the position: locking debits the owner.
    let collateral_balance = apply_to_balance(collateral_owner.amount, collateral_delta.negate())?;
    let currency_balance = apply_to_balance(currency_owner.amount, debt_value_delta)?;

    let before = PositionSnapshot::from(&*position);

    position.locked_collateral = after.locked_collateral;
    position.debt_share = after.debt_share;
    pool.total_debt_share = total_debt_share;
    pool.currency_issued = pool_currency_issued;
    ledger.total_currency_issued = total_currency_issued;
    collateral_owner.amount = collateral_balance;
    currency_owner.amount = currency_balance;

    Ok(AdjustOutcome {
        position: Change { before, after },
        debt_value_delta,
        debt_value,
    })
}

/// Move collateral and debt from `src` to `dst`, two positions of the same
/// pool. Supply is unaffected; both sides must stay safe, within the position
/// ceiling and above the floor.
pub fn move_position(
    ledger: &Ledger,
    pool: &CollateralPool,
    authority: &Authority,
    src: &mut Position,
    dst: &mut Position,
    collateral_delta: Delta<Wad>,
    debt_share_delta: Delta<Wad>,
) -> Result<(Change<PositionSnapshot>, Change<PositionSnapshot>)> {
    ledger.require_not_paused()?;
    pool.require_initialized()?;
    require!(src.owner != dst.owner, LedgerError::SamePosition);

    require!(
        authority.may_act_for(&src.owner) && authority.may_act_for(&dst.owner),
        LedgerError::PermissionDenied
    );

    let src_after = Position {
        locked_collateral: apply_to_balance(src.locked_collateral, collateral_delta.negate())?,
        debt_share: apply_to_balance(src.debt_share, debt_share_delta.negate())?,
        ..Default::default()
    };
    let dst_after = Position {
        locked_collateral: apply_to_balance(dst.locked_collateral, collateral_delta)?,
        debt_share: apply_to_balance(dst.debt_share, debt_share_delta)?,
        ..Default::default()
    };

    require!(src_after.is_safe(pool)?, LedgerError::NotSafeSrc);
    require!(dst_after.is_safe(pool)?, LedgerError::NotSafeDst);

    require!(
        dst_after.debt_value(pool)? <= pool.position_debt_ceiling,
        LedgerError::PositionDebtCeilingExceededDst
    );
    // A negative delta pulls debt from dst into src.
    if debt_share_delta.is_negative() {
        require!(
            src_after.debt_value(pool)? <= pool.position_debt_ceiling,
            LedgerError::PositionDebtCeilingExceededSrc
        );
    }

    require!(src_after.is_above_floor(pool)?, LedgerError::DebtFloorSrc);
    require!(dst_after.is_above_floor(pool)?, LedgerError::DebtFloorDst);

    let src_change = Change {
        before: PositionSnapshot::from(&*src),
        after: PositionSnapshot::from(&src_after),
    };
    let dst_change = Change {
        before: PositionSnapshot::from(&*dst),
        after: PositionSnapshot::from(&dst_after),
    };

    src.locked_collateral = src_after.locked_collateral;
    src.debt_share = src_after.debt_share;
    dst.locked_collateral = dst_after.locked_collateral;
    dst.debt_share = dst_after.debt_share;

    Ok((src_change, dst_change))
}

/// Records touched by [`confiscate_position`]
pub struct ConfiscateAccounts<'a> {
    pub ledger: &'a mut Ledger,
    pub pool: &'a mut CollateralPool,
    pub position: &'a mut Position,
    /// Receives the seized collateral
    pub collateral_creditor: &'a mut CollateralBalance,
    /// Takes on the seized debt as system bad debt
    pub debt_debtor: &'a mut SystemBadDebt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfiscateOutcome {
    pub position: Change<PositionSnapshot>,
    pub debt_value_delta: Delta<Rad>,
    pub bad_debt: Change<Rad>,
}

/// Seize collateral and debt from a position without any safety check.
///
/// Deltas are signed like [`adjust_position`]: a seizure passes decreases.
/// The creditor is credited the collateral removed from the position and the
/// debt value removed becomes bad debt of the debtor.
pub fn confiscate_position(
    accounts: ConfiscateAccounts<'_>,
    collateral_delta: Delta<Wad>,
    debt_share_delta: Delta<Wad>,
) -> Result<ConfiscateOutcome> {
    let ConfiscateAccounts {
        ledger,
        pool,
        position,
        collateral_creditor,
        debt_debtor,
    } = accounts;

    ledger.require_not_paused()?;
    pool.require_initialized()?;

    let after = PositionSnapshot {
        locked_collateral: apply_to_balance(position.locked_collateral, collateral_delta)?,
        debt_share: apply_to_balance(position.debt_share, debt_share_delta)?,
    };
    let total_debt_share = apply_to_total(pool.total_debt_share, debt_share_delta)?;

    let debt_value_delta = debt_share_delta
        .mul_ray(pool.debt_accumulated_rate)
        .ok_or(error!(LedgerError::MathOverflow))?;

    let creditor_balance = apply_to_balance(collateral_creditor.amount, collateral_delta.negate())?;
    let bad_debt = apply_to_balance(debt_debtor.amount, debt_value_delta.negate())?;
    let total_unbacked = apply_to_total(ledger.total_unbacked_currency, debt_value_delta.negate())?;
    let pool_currency_issued = apply_to_total(pool.currency_issued, debt_value_delta)?;

    let before = PositionSnapshot::from(&*position);
    let bad_debt_change = Change { before: debt_debtor.amount, after: bad_debt };

    position.locked_collateral = after.locked_collateral;
    position.debt_share = after.debt_share;
    pool.total_debt_share = total_debt_share;
    pool.currency_issued = pool_currency_issued;
    collateral_creditor.amount = creditor_balance;
    debt_debtor.amount = bad_debt;
    ledger.total_unbacked_currency = total_unbacked;

    Ok(ConfiscateOutcome {
        position: Change { before, after },
        debt_value_delta,
        bad_debt: bad_debt_change,
    })
}

/// Mint currency to `to` backed by nothing but bad debt recorded against `from`
pub fn mint_unbacked_currency(
    ledger: &mut Ledger,
    from: &mut SystemBadDebt,
    to: &mut CurrencyBalance,
    value: Rad,
) -> Result<(Change<Rad>, Change<Rad>)> {
    ledger.require_not_paused()?;

    let bad_debt = increase(from.amount, value)?;
    let currency = increase(to.amount, value)?;
    let total_unbacked = increase(ledger.total_unbacked_currency, value)?;
    let total_issued = increase(ledger.total_currency_issued, value)?;

    let bad_debt_change = Change { before: from.amount, after: bad_debt };
    let currency_change = Change { before: to.amount, after: currency };

    from.amount = bad_debt;
    to.amount = currency;
    ledger.total_unbacked_currency = total_unbacked;
    ledger.total_currency_issued = total_issued;

    Ok((bad_debt_change, currency_change))
}

/// Burn an account's currency against its own bad debt.
/// Both records must belong to the same account.
pub fn settle_system_bad_debt(
    ledger: &mut Ledger,
    bad_debt: &mut SystemBadDebt,
    currency: &mut CurrencyBalance,
    value: Rad,
) -> Result<(Change<Rad>, Change<Rad>)> {
    ledger.require_not_paused()?;

    let bad_debt_after = debit(bad_debt.amount, value)?;
    let currency_after = debit(currency.amount, value)?;
    let total_unbacked = apply_to_total(ledger.total_unbacked_currency, Delta::Decrease(value))?;
    let total_issued = apply_to_total(ledger.total_currency_issued, Delta::Decrease(value))?;

    let bad_debt_change = Change { before: bad_debt.amount, after: bad_debt_after };
    let currency_change = Change { before: currency.amount, after: currency_after };

    bad_debt.amount = bad_debt_after;
    currency.amount = currency_after;
    ledger.total_unbacked_currency = total_unbacked;
    ledger.total_currency_issued = total_issued;

    Ok((bad_debt_change, currency_change))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccrualOutcome {
    pub rate: Change<Ray>,
    /// Currency minted to the fee recipient
    pub fee: Rad,
}

/// Compose the pool's accumulated rate with `rate_multiplier` and mint the
/// resulting interest on the whole pool to `recipient` in one step.
///
/// Positions are not touched: their real debt grows because it is always
/// computed as `debt_share * rate`.
pub fn accrue_stability_fee(
    ledger: &mut Ledger,
    pool: &mut CollateralPool,
    recipient: &mut CurrencyBalance,
    rate_multiplier: Ray,
) -> Result<AccrualOutcome> {
    ledger.require_not_paused()?;
    ledger.require_live()?;
    pool.require_initialized()?;
    require!(rate_multiplier >= Ray::one(), LedgerError::InvalidRateMultiplier);

    let rate_before = pool.debt_accumulated_rate;
    let rate_after = rate_before
        .rmul(rate_multiplier)
        .ok_or(error!(LedgerError::MathOverflow))?;
    let rate_delta = rate_after
        .checked_sub(rate_before)
        .ok_or(error!(LedgerError::MathOverflow))?;

    let fee = pool
        .total_debt_share
        .mul_ray(rate_delta)
        .ok_or(error!(LedgerError::MathOverflow))?;

    let recipient_balance = increase(recipient.amount, fee)?;
    let pool_currency_issued = increase(pool.currency_issued, fee)?;
    let total_issued = increase(ledger.total_currency_issued, fee)?;

    pool.debt_accumulated_rate = rate_after;
    pool.currency_issued = pool_currency_issued;
    recipient.amount = recipient_balance;
    ledger.total_currency_issued = total_issued;

    Ok(AccrualOutcome {
        rate: Change { before: rate_before, after: rate_after },
        fee,
    })
}
