//! The four pieces of page state the drop controller keeps consistent
//! with the outside world, and the mint-button logic derived from them.

use alloy_primitives::U256;

/// Supply, loading and price state for one drop page.
///
/// `total_supply` is a wide integer: on-chain supply may exceed native
/// integer range, and the sold-out check must compare exactly over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropState {
    /// Count of tokens already claimed from the drop.
    pub claimed_supply: usize,
    /// Absent until the first successful supply fetch.
    pub total_supply: Option<U256>,
    /// True while the supply fetch or a mint is in flight.
    pub loading: bool,
    /// Display price of the first claim-condition tier.
    pub price_display: Option<String>,
}

impl Default for DropState {
    fn default() -> Self {
        // A fresh page starts in the loading state until supply arrives.
        Self {
            claimed_supply: 0,
            total_supply: None,
            loading: true,
            price_display: None,
        }
    }
}

impl DropState {
    /// Exact wide-integer equality; false while total supply is unknown.
    pub fn sold_out(&self) -> bool {
        self.total_supply
            .is_some_and(|total| U256::from(self.claimed_supply) == total)
    }

    /// The mint control is disabled iff a fetch or mint is in flight,
    /// the drop is sold out, or no wallet is connected.
    pub fn mint_disabled(&self, wallet_connected: bool) -> bool {
        self.loading || self.sold_out() || !wallet_connected
    }

    /// Label precedence: loading, then sold out (regardless of wallet),
    /// then sign-in, then the priced mint label.
    pub fn button_label(&self, wallet_connected: bool) -> MintButtonLabel {
        if self.loading {
            MintButtonLabel::Loading
        } else if self.sold_out() {
            MintButtonLabel::SoldOut
        } else if !wallet_connected {
            MintButtonLabel::SignIn
        } else {
            MintButtonLabel::Mint {
                price_display: self.price_display.clone(),
            }
        }
    }
}

/// What the mint button shows. `SignIn` is the one label whose click
/// action connects the wallet instead of minting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintButtonLabel {
    Loading,
    SoldOut,
    SignIn,
    Mint { price_display: Option<String> },
}

impl std::fmt::Display for MintButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::SoldOut => write!(f, "SOLD OUT"),
            Self::SignIn => write!(f, "Sign in to mint"),
            Self::Mint { price_display } => {
                let price = price_display.as_deref().unwrap_or_default();
                write!(f, "Mint NFT ({price} ETH)")
            }
        }
    }
}
