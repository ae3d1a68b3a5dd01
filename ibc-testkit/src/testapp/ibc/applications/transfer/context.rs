use ibc::apps::transfer::context::{
    TokenTransferExecutionContext, TokenTransferValidationContext,
};
use ibc::apps::transfer::types::error::TokenTransferError;
use ibc::apps::transfer::types::Coins;
use ibc::core::host::types::error::HostError;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc::core::router::types::event::ModuleEventAttribute;

use super::types::BalancePath;
use crate::testapp::ibc::core::types::MockIbcStore;

impl MockIbcStore {
    fn store_balance(
        &mut self,
        account: &Signer,
        balance: Coins,
    ) -> Result<(), TokenTransferError> {
        let path = BalancePath::new(account);
        if balance.is_empty() {
            self.bank.balances.delete(path);
            return Ok(());
        }
        self.bank.balances.set(path, balance).map_err(|_| {
            HostError::failed_to_store(format!("balance of {account}"))
        })?;
        Ok(())
    }
}

impl TokenTransferValidationContext for MockIbcStore {
    fn get_coins(&self, account: &Signer) -> Result<Coins, TokenTransferError> {
        Ok(self.bank.balance(account))
    }
}

impl TokenTransferExecutionContext for MockIbcStore {
    fn subtract_coins(
        &mut self,
        account: &Signer,
        coins: &Coins,
    ) -> Result<(Coins, Vec<ModuleEventAttribute>), TokenTransferError> {
        let balance = self.get_coins(account)?;
        let new_balance =
            balance
                .checked_sub(coins)
                .ok_or_else(|| TokenTransferError::InsufficientFunds {
                    send_attempt: coins.to_string(),
                    available_funds: balance.to_string(),
                })?;

        self.store_balance(account, new_balance.clone())?;

        let tags = vec![("sender", account).into(), ("amount", coins).into()];
        Ok((new_balance, tags))
    }

    fn add_coins(
        &mut self,
        account: &Signer,
        coins: &Coins,
    ) -> Result<(Coins, Vec<ModuleEventAttribute>), TokenTransferError> {
        let new_balance = self.get_coins(account)?.checked_add(coins)?;

        self.store_balance(account, new_balance.clone())?;

        let tags = vec![("recipient", account).into(), ("amount", coins).into()];
        Ok((new_balance, tags))
    }
}
