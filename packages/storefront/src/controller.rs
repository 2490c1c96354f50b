//! The drop page controller.
//!
//! Orchestrates the read-only contract queries and the single write
//! (claim) against one drop, keeping the page's supply / loading / price
//! state consistent with asynchronous outcomes. Collaborators are
//! injected: the contract SDK, the wallet session, and the notifier.
//!
//! The reads behave as on the original page: the price fetch and the
//! supply fetch are independent tasks with no ordering guarantee between
//! them, and only the supply fetch owns the loading flag. A mint attempt
//! sets the flag, shows a pending toast, claims one token for the
//! connected address, then on either outcome dismisses the pending toast
//! and clears the flag before returning.

use crate::contract::{ClaimReceipt, DropSdk};
use crate::notify::{self, Notifier, ToastKind};
use crate::wallet::WalletSession;
use alloy_primitives::U256;
use storefront_types::{DropState, MintButtonLabel};
use tracing::{info, warn};

/// Tokens claimed per mint attempt.
const MINT_QUANTITY: u64 = 1;

/// What a click on the mint control should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Disconnected wallet: the click connects instead of minting.
    ConnectWallet,
    Mint,
}

/// Result of one mint attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// Missing contract or wallet identity; nothing happened and no
    /// notification was shown.
    Ignored,
    Minted(Vec<ClaimReceipt>),
    Failed,
}

pub struct DropPageController<C, S, N> {
    contract: Option<C>,
    session: S,
    notifier: N,
    state: DropState,
}

impl<C, S, N> DropPageController<C, S, N>
where
    C: DropSdk,
    S: WalletSession,
    N: Notifier,
{
    /// A fresh controller starts in the loading state and stays there
    /// until a contract reference lets the supply fetch complete.
    pub fn new(contract: Option<C>, session: S, notifier: N) -> Self {
        Self {
            contract,
            session,
            notifier,
            state: DropState::default(),
        }
    }

    pub fn state(&self) -> &DropState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn mint_disabled(&self) -> bool {
        self.state.mint_disabled(self.session.address().is_some())
    }

    pub fn button_label(&self) -> MintButtonLabel {
        self.state.button_label(self.session.address().is_some())
    }

    pub fn click_action(&self) -> ClickAction {
        if self.session.address().is_none() {
            ClickAction::ConnectWallet
        } else {
            ClickAction::Mint
        }
    }

    /// Run the two page reads. No-op while the contract reference is
    /// absent. A failed read leaves its fields not-yet-loaded so a later
    /// call can retry; the loading flag clears either way.
    pub async fn load(&mut self) {
        let Some(contract) = self.contract.as_ref() else {
            return;
        };

        let state = &mut self.state;
        state.loading = true;

        // The supply read alone owns the loading flag: it clears when the
        // supply reads finish, whatever the price read is still doing.
        let supply_state = &mut *state;
        let supply = async move {
            match fetch_supply(contract).await {
                Ok((claimed, total)) => {
                    supply_state.claimed_supply = claimed;
                    supply_state.total_supply = Some(total);
                }
                Err(e) => warn!(error = %e, "supply fetch failed"),
            }
            supply_state.loading = false;
        };

        let (price, ()) = tokio::join!(fetch_price(contract), supply);

        match price {
            Ok(price_display) => state.price_display = price_display,
            Err(e) => warn!(error = %e, "price fetch failed"),
        }
    }

    /// One mint attempt: claim a single token for the connected address.
    ///
    /// Silent no-op when the contract or wallet identity is absent. On
    /// success the claimed count is re-fetched (total supply is not).
    /// Failure causes are not distinguished; the user sees one generic
    /// failure toast.
    pub async fn mint(&mut self) -> MintOutcome {
        let (Some(contract), Some(address)) = (self.contract.as_ref(), self.session.address())
        else {
            return MintOutcome::Ignored;
        };

        self.state.loading = true;
        let pending = self.notifier.begin_pending(notify::MSG_MINTING);

        let outcome = match contract.claim_to(address, MINT_QUANTITY).await {
            Ok(receipts) => {
                info!(to = %address, count = receipts.len(), "claim succeeded");
                self.notifier.push(ToastKind::Success, notify::MSG_SUCCESS);

                // Refresh the claimed count; total supply keeps its value.
                match contract.get_all_claimed().await {
                    Ok(claimed) => self.state.claimed_supply = claimed.len(),
                    Err(e) => warn!(error = %e, "claimed refresh failed"),
                }
                MintOutcome::Minted(receipts)
            }
            Err(e) => {
                warn!(error = %e, "claim rejected");
                self.notifier.push(ToastKind::Failure, notify::MSG_FAILURE);
                MintOutcome::Failed
            }
        };

        // Both arms fall through here exactly once per attempt.
        self.notifier.dismiss(pending);
        self.state.loading = false;

        outcome
    }
}

async fn fetch_price<C: DropSdk>(contract: &C) -> Result<Option<String>, crate::Error> {
    let conditions = contract.get_claim_conditions().await?;
    Ok(conditions
        .first()
        .map(|tier| tier.currency_metadata.display_value.clone()))
}

async fn fetch_supply<C: DropSdk>(contract: &C) -> Result<(usize, U256), crate::Error> {
    let claimed = contract.get_all_claimed().await?;
    let total = contract.total_supply().await?;
    Ok((claimed.len(), total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{ClaimCondition, ClaimedToken, CurrencyMetadata};
    use crate::notify::RecordingNotifier;
    use crate::wallet::MemorySession;
    use crate::Error;
    use alloy_primitives::Address;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn wallet() -> Address {
        "0x00000000000000000000000000000000000000a1".parse().unwrap()
    }

    /// Hand-built drop contract fake with togglable failure modes.
    struct FakeDrop {
        total: U256,
        claimed: Mutex<usize>,
        price: &'static str,
        fail_reads: Mutex<bool>,
        fail_claim: bool,
        fail_price: bool,
        slow_price: bool,
        claim_calls: AtomicUsize,
    }

    impl FakeDrop {
        fn with_supply(claimed: usize, total: u64) -> Self {
            Self {
                total: U256::from(total),
                claimed: Mutex::new(claimed),
                price: "0.01",
                fail_reads: Mutex::new(false),
                fail_claim: false,
                fail_price: false,
                slow_price: false,
                claim_calls: AtomicUsize::new(0),
            }
        }
    }

    impl DropSdk for FakeDrop {
        async fn get_claim_conditions(&self) -> Result<Vec<ClaimCondition>, Error> {
            if self.slow_price {
                // Finish after the supply reads have resolved.
                for _ in 0..8 {
                    tokio::task::yield_now().await;
                }
            }
            if self.fail_price || *self.fail_reads.lock().unwrap() {
                return Err(Error::Rpc("read failed".into()));
            }
            Ok(vec![ClaimCondition {
                currency_metadata: CurrencyMetadata {
                    display_value: self.price.into(),
                },
            }])
        }

        async fn total_supply(&self) -> Result<U256, Error> {
            if *self.fail_reads.lock().unwrap() {
                return Err(Error::Rpc("read failed".into()));
            }
            Ok(self.total)
        }

        async fn get_all_claimed(&self) -> Result<Vec<ClaimedToken>, Error> {
            if *self.fail_reads.lock().unwrap() {
                return Err(Error::Rpc("read failed".into()));
            }
            let n = *self.claimed.lock().unwrap();
            Ok((0..n)
                .map(|i| ClaimedToken {
                    id: U256::from(i),
                    owner: Address::ZERO,
                })
                .collect())
        }

        async fn claim_to(&self, _to: Address, quantity: u64) -> Result<Vec<ClaimReceipt>, Error> {
            self.claim_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_claim {
                return Err(Error::Claim("rejected".into()));
            }
            let mut claimed = self.claimed.lock().unwrap();
            *claimed += quantity as usize;
            Ok((0..quantity)
                .map(|i| ClaimReceipt {
                    id: U256::from(*claimed as u64 - quantity + i),
                    tx_hash: format!("0xtx{i}"),
                })
                .collect())
        }
    }

    fn controller(
        drop: FakeDrop,
        session: MemorySession,
    ) -> DropPageController<FakeDrop, MemorySession, RecordingNotifier> {
        DropPageController::new(Some(drop), session, RecordingNotifier::new())
    }

    #[tokio::test]
    async fn load_populates_price_and_supply() {
        let mut page = controller(FakeDrop::with_supply(9, 10), MemorySession::disconnected());
        page.load().await;

        let state = page.state();
        assert_eq!(state.claimed_supply, 9);
        assert_eq!(state.total_supply, Some(U256::from(10)));
        assert_eq!(state.price_display.as_deref(), Some("0.01"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn load_handles_reads_finishing_in_either_order() {
        let mut drop = FakeDrop::with_supply(3, 10);
        drop.slow_price = true;

        let mut page = controller(drop, MemorySession::disconnected());
        page.load().await;

        assert_eq!(page.state().claimed_supply, 3);
        assert_eq!(page.state().price_display.as_deref(), Some("0.01"));
        assert!(!page.state().loading);
    }

    #[tokio::test]
    async fn price_failure_does_not_hold_the_loading_flag() {
        let mut drop = FakeDrop::with_supply(6, 10);
        drop.fail_price = true;

        let mut page = controller(drop, MemorySession::disconnected());
        page.load().await;

        // Supply reads own the flag; a dead price read leaves only the
        // price field unloaded.
        assert!(!page.state().loading);
        assert_eq!(page.state().claimed_supply, 6);
        assert_eq!(page.state().total_supply, Some(U256::from(10)));
        assert!(page.state().price_display.is_none());
    }

    #[tokio::test]
    async fn load_without_contract_stays_loading() {
        let mut page: DropPageController<FakeDrop, _, _> =
            DropPageController::new(None, MemorySession::disconnected(), RecordingNotifier::new());
        page.load().await;

        assert!(page.state().loading);
        assert!(page.state().total_supply.is_none());
    }

    #[tokio::test]
    async fn failed_reads_stay_retryable() {
        let drop = FakeDrop::with_supply(4, 10);
        *drop.fail_reads.lock().unwrap() = true;

        let mut page = controller(drop, MemorySession::disconnected());
        page.load().await;

        // Fields untouched, flag cleared: the page can retry.
        assert_eq!(page.state().claimed_supply, 0);
        assert!(page.state().total_supply.is_none());
        assert!(page.state().price_display.is_none());
        assert!(!page.state().loading);

        *page.contract.as_ref().unwrap().fail_reads.lock().unwrap() = false;
        page.load().await;
        assert_eq!(page.state().claimed_supply, 4);
    }

    #[tokio::test]
    async fn mint_increments_claimed_and_respects_total() {
        let mut page = controller(
            FakeDrop::with_supply(9, 10),
            MemorySession::connected(wallet()),
        );
        page.load().await;
        assert!(!page.mint_disabled());

        let outcome = page.mint().await;
        let MintOutcome::Minted(receipts) = outcome else {
            panic!("expected a successful mint");
        };
        assert_eq!(receipts.len(), 1);

        // Claimed rose by exactly the minted quantity, never past total.
        assert_eq!(page.state().claimed_supply, 10);
        assert_eq!(page.state().total_supply, Some(U256::from(10)));
        assert!(page.state().sold_out());
        assert!(page.mint_disabled());
        assert_eq!(page.button_label(), MintButtonLabel::SoldOut);
        assert!(!page.state().loading);
    }

    #[tokio::test]
    async fn mint_success_toasts_and_dismisses_pending_once() {
        let mut page = controller(
            FakeDrop::with_supply(0, 10),
            MemorySession::connected(wallet()),
        );
        page.mint().await;

        let toasts = page.notifier().toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Pending);
        assert_eq!(toasts[0].message, notify::MSG_MINTING);
        assert_eq!(toasts[0].dismissals, 1);
        assert_eq!(toasts[1].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, notify::MSG_SUCCESS);
    }

    #[tokio::test]
    async fn mint_failure_shows_one_generic_toast() {
        let mut drop = FakeDrop::with_supply(2, 10);
        drop.fail_claim = true;

        let mut page = controller(drop, MemorySession::connected(wallet()));
        page.load().await;
        let outcome = page.mint().await;

        assert_eq!(outcome, MintOutcome::Failed);
        // Supply untouched on failure.
        assert_eq!(page.state().claimed_supply, 2);
        assert!(!page.state().loading);

        let toasts = page.notifier().toasts();
        assert_eq!(toasts.len(), 2); // load itself never toasts
        assert_eq!(toasts[0].kind, ToastKind::Pending);
        assert_eq!(toasts[0].dismissals, 1);
        assert_eq!(toasts[1].kind, ToastKind::Failure);
        assert_eq!(toasts[1].message, notify::MSG_FAILURE);
    }

    #[tokio::test]
    async fn mint_without_wallet_is_a_silent_noop() {
        let mut page = controller(FakeDrop::with_supply(0, 10), MemorySession::disconnected());
        page.load().await;

        let outcome = page.mint().await;
        assert_eq!(outcome, MintOutcome::Ignored);
        assert_eq!(
            page.contract.as_ref().unwrap().claim_calls.load(Ordering::SeqCst),
            0
        );
        assert!(page.notifier().toasts().is_empty());
        assert!(!page.state().loading);
    }

    #[tokio::test]
    async fn mint_without_contract_is_a_silent_noop() {
        let mut page: DropPageController<FakeDrop, _, _> = DropPageController::new(
            None,
            MemorySession::connected(wallet()),
            RecordingNotifier::new(),
        );
        assert_eq!(page.mint().await, MintOutcome::Ignored);
        assert!(page.notifier().toasts().is_empty());
    }

    #[tokio::test]
    async fn disconnected_click_connects_instead_of_minting() {
        let mut page = controller(FakeDrop::with_supply(5, 10), MemorySession::disconnected());
        page.load().await;

        assert_eq!(page.button_label(), MintButtonLabel::SignIn);
        assert_eq!(page.click_action(), ClickAction::ConnectWallet);

        page.session_mut().connect(wallet());
        assert_eq!(page.click_action(), ClickAction::Mint);
        assert_eq!(
            page.button_label(),
            MintButtonLabel::Mint {
                price_display: Some("0.01".into())
            }
        );
    }
}
