//! Defines the ledger the transfer application moves coins on.

use ibc_app_transfer_types::error::TokenTransferError;
use ibc_app_transfer_types::Coins;
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use ibc_core::router::types::event::ModuleEventAttribute;

/// Read access to the account balances of the host chain.
pub trait TokenTransferValidationContext {
    /// Returns the coins held by `account`. Unknown accounts hold nothing.
    fn get_coins(&self, account: &Signer) -> Result<Coins, TokenTransferError>;

    /// Validates that `coins` can be debited from `account`.
    fn subtract_coins_validate(
        &self,
        account: &Signer,
        coins: &Coins,
    ) -> Result<(), TokenTransferError> {
        let balance = self.get_coins(account)?;
        match balance.checked_sub(coins) {
            Some(_) => Ok(()),
            None => Err(TokenTransferError::InsufficientFunds {
                send_attempt: coins.to_string(),
                available_funds: balance.to_string(),
            }),
        }
    }

    /// Validates that `coins` can be credited to `account`.
    fn add_coins_validate(&self, account: &Signer, coins: &Coins) -> Result<(), TokenTransferError> {
        self.get_coins(account)?.checked_add(coins).map(|_| ())
    }
}

/// Balance mutations of the host chain's ledger.
///
/// Each mutation is atomic: it either applies in full and returns the new
/// balance together with the tags the ledger reports for auditing, or fails
/// without touching the balance.
pub trait TokenTransferExecutionContext: TokenTransferValidationContext {
    /// Debits `coins` from `account`.
    fn subtract_coins(
        &mut self,
        account: &Signer,
        coins: &Coins,
    ) -> Result<(Coins, Vec<ModuleEventAttribute>), TokenTransferError>;

    /// Credits `coins` to `account`.
    fn add_coins(
        &mut self,
        account: &Signer,
        coins: &Coins,
    ) -> Result<(Coins, Vec<ModuleEventAttribute>), TokenTransferError>;
}
