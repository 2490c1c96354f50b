//! Wallet session context.
//!
//! The wallet itself (extension, keys, signing) is an external
//! collaborator; the storefront only ever reads the connected identity.
//! The session is an explicit object injected into the controller, not
//! ambient state.

use alloy_primitives::Address;

/// Connect / disconnect / current-identity operations on a wallet session.
pub trait WalletSession {
    /// The connected EOA address, absent when disconnected.
    fn address(&self) -> Option<Address>;
    fn connect(&mut self, address: Address);
    fn disconnect(&mut self);
}

/// In-memory session holding at most one connected identity.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    address: Option<Address>,
}

impl MemorySession {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }
}

impl WalletSession for MemorySession {
    fn address(&self) -> Option<Address> {
        self.address
    }

    fn connect(&mut self, address: Address) {
        self.address = Some(address);
    }

    fn disconnect(&mut self) {
        self.address = None;
    }
}
