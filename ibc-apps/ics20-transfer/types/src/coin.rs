//! Defines coins and well-formed coin sets.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_primitives::prelude::*;
use ibc_proto::cosmos::base::v1beta1::Coin as RawCoin;

use crate::error::TokenTransferError;
use crate::{Amount, Denom};

/// An amount of a single denomination.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coin {
    pub denom: Denom,
    pub amount: Amount,
}

impl Coin {
    pub fn new(amount: impl Into<Amount>, denom: Denom) -> Self {
        Self {
            denom,
            amount: amount.into(),
        }
    }
}

impl FromStr for Coin {
    type Err = TokenTransferError;

    /// Parses a coin written as its amount immediately followed by its
    /// denomination, e.g. `10foo`.
    fn from_str(coin_str: &str) -> Result<Self, Self::Err> {
        let split_at = coin_str
            .find(|c: char| !c.is_ascii_digit())
            .filter(|&idx| idx > 0)
            .ok_or_else(|| TokenTransferError::InvalidCoin {
                coin: coin_str.to_string(),
            })?;
        let (amount, denom) = coin_str.split_at(split_at);

        Ok(Self {
            amount: amount.parse()?,
            denom: denom.parse()?,
        })
    }
}

impl TryFrom<RawCoin> for Coin {
    type Error = TokenTransferError;

    fn try_from(raw: RawCoin) -> Result<Self, Self::Error> {
        Ok(Self {
            denom: raw.denom.parse()?,
            amount: raw.amount.parse()?,
        })
    }
}

impl From<Coin> for RawCoin {
    fn from(coin: Coin) -> Self {
        Self {
            denom: coin.denom.to_string(),
            amount: coin.amount.to_string(),
        }
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A set of coins kept sorted by denomination, with at most one coin per
/// denomination and only strictly positive amounts.
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coin>", into = "Vec<Coin>")
)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coins(Vec<Coin>);

#[cfg(feature = "borsh")]
impl borsh::BorshDeserialize for Coins {
    fn deserialize_reader<R: borsh::io::Read>(reader: &mut R) -> borsh::io::Result<Self> {
        let coins = <Vec<Coin> as borsh::BorshDeserialize>::deserialize_reader(reader)?;
        Self::new(coins).map_err(|e| {
            borsh::io::Error::new(borsh::io::ErrorKind::InvalidData, e.to_string())
        })
    }
}

impl Coins {
    /// Builds a coin set, sorting the coins by denomination. Fails when a
    /// denomination repeats or an amount is zero.
    pub fn new(mut coins: Vec<Coin>) -> Result<Self, TokenTransferError> {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        for pair in coins.windows(2) {
            if pair[0].denom == pair[1].denom {
                return Err(TokenTransferError::DuplicateDenom {
                    denom: pair[0].denom.to_string(),
                });
            }
        }

        if let Some(coin) = coins.iter().find(|coin| coin.amount.is_zero()) {
            return Err(TokenTransferError::NonPositiveAmount {
                coin: coin.to_string(),
            });
        }

        Ok(Self(coins))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A non-empty set of positive coins, as a transfer requires.
    pub fn is_positive(&self) -> bool {
        !self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// The amount held of `denom`, zero when absent.
    pub fn amount_of(&self, denom: &Denom) -> Amount {
        self.0
            .iter()
            .find(|coin| &coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or_default()
    }

    /// Adds `other` to this set. Fails when an amount overflows.
    pub fn checked_add(&self, other: &Coins) -> Result<Coins, TokenTransferError> {
        let mut sum = self.0.clone();
        for coin in other.iter() {
            match sum.iter_mut().find(|held| held.denom == coin.denom) {
                Some(held) => {
                    held.amount = held.amount.checked_add(coin.amount).ok_or_else(|| {
                        TokenTransferError::AmountOverflow {
                            coin: coin.to_string(),
                        }
                    })?;
                }
                None => sum.push(coin.clone()),
            }
        }
        Self::new(sum)
    }

    /// Subtracts `other` from this set, dropping the denominations that
    /// reach zero. Returns `None` when any amount would go negative.
    pub fn checked_sub(&self, other: &Coins) -> Option<Coins> {
        let mut diff = self.0.clone();
        for coin in other.iter() {
            let held = diff.iter_mut().find(|held| held.denom == coin.denom)?;
            held.amount = held.amount.checked_sub(coin.amount)?;
        }
        diff.retain(|coin| !coin.amount.is_zero());
        Some(Self(diff))
    }
}

impl FromStr for Coins {
    type Err = TokenTransferError;

    /// Parses a comma separated list of coins, e.g. `10foo,5bar`.
    fn from_str(coins_str: &str) -> Result<Self, Self::Err> {
        let coins_str = coins_str.trim();
        if coins_str.is_empty() {
            return Ok(Self::empty());
        }

        let coins = coins_str
            .split(',')
            .map(|coin| coin.trim().parse())
            .collect::<Result<Vec<Coin>, _>>()?;

        Self::new(coins)
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = TokenTransferError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Self::new(coins)
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

impl TryFrom<Vec<RawCoin>> for Coins {
    type Error = TokenTransferError;

    fn try_from(raw: Vec<RawCoin>) -> Result<Self, Self::Error> {
        let coins = raw
            .into_iter()
            .map(Coin::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coins)
    }
}

impl From<Coins> for Vec<RawCoin> {
    fn from(coins: Coins) -> Self {
        coins.0.into_iter().map(Into::into).collect()
    }
}

impl Display for Coins {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let coins = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{}", coins.join(","))
    }
}
