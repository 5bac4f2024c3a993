//! In-memory balances and event log.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Coin, Denom, SwapEvent};
use crate::error::AmmError;
use crate::traits::{Bank, EventSink};

/// Balances per account and denomination, plus every emitted
/// [`SwapEvent`] in order.
///
/// # Examples
///
/// ```
/// use hydra_clmm::domain::{AccountId, Amount, Coin, Denom};
/// use hydra_clmm::store::MemoryBank;
/// use hydra_clmm::traits::Bank;
///
/// let alice = AccountId::new("alice").expect("ok");
/// let bob = AccountId::new("bob").expect("ok");
/// let usdc = Denom::new("usdc").expect("ok");
///
/// let mut bank = MemoryBank::new();
/// bank.mint(&alice, &Coin::new(usdc.clone(), Amount::new(100))).expect("mint");
/// bank.send(&alice, &bob, &Coin::new(usdc.clone(), Amount::new(40))).expect("covered");
/// assert_eq!(bank.balance(&alice, &usdc), Amount::new(60));
/// assert!(bank.send(&bob, &alice, &Coin::new(usdc, Amount::new(41))).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBank {
    balances: BTreeMap<AccountId, BTreeMap<Denom, Amount>>,
    events: Vec<SwapEvent>,
}

impl MemoryBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `denom` held by `account`.
    #[must_use]
    pub fn balance(&self, account: &AccountId, denom: &Denom) -> Amount {
        self.balances
            .get(account)
            .and_then(|m| m.get(denom))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Credits `coin` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would overflow.
    pub fn mint(&mut self, account: &AccountId, coin: &Coin) -> Result<(), AmmError> {
        let next = self
            .balance(account, coin.denom())
            .checked_add(&coin.amount())
            .ok_or(AmmError::Overflow("balance"))?;
        self.set_balance(account, coin.denom(), next);
        Ok(())
    }

    /// Swap events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    fn set_balance(&mut self, account: &AccountId, denom: &Denom, amount: Amount) {
        self.balances
            .entry(account.clone())
            .or_default()
            .insert(denom.clone(), amount);
    }
}

impl Bank for MemoryBank {
    fn send(&mut self, from: &AccountId, to: &AccountId, coin: &Coin) -> Result<(), AmmError> {
        let debited = self
            .balance(from, coin.denom())
            .checked_sub(&coin.amount())
            .ok_or(AmmError::TransferFailed("insufficient balance"))?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to, coin.denom())
            .checked_add(&coin.amount())
            .ok_or(AmmError::TransferFailed("recipient balance overflow"))?;
        self.set_balance(from, coin.denom(), debited);
        self.set_balance(to, coin.denom(), credited);
        Ok(())
    }
}

impl EventSink for MemoryBank {
    fn emit(&mut self, event: SwapEvent) {
        self.events.push(event);
    }
}
