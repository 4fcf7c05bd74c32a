//! View-state store: the single source of truth beneath the UI.

use tokio::sync::broadcast;

use crate::registry::WalletRegistry;
use crate::service::{AssetInfo, ServiceClient, TokenTransferItem, TransactionItem};
use crate::storage::{StorageBackend, Wallet};

/// State-change notifications for reactive UI refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    WalletsChanged,
    SelectionChanged,
    AssetsUpdated,
    TransactionsUpdated,
    TokenTransfersUpdated,
    LoadingChanged,
}

const EVENT_CAPACITY: usize = 64;

/// Holds the current wallet selection, fetched balances, both history lists,
/// loading flags, and pagination cursors. Orchestrates the service client
/// and the wallet registry.
///
/// Single-task cooperative model: fetches suspend the caller, loading flags
/// guard UI affordances only, and there is no cancellation or retry. A fetch
/// in flight across a wallet switch can still land afterwards; `&mut self`
/// on every mutation leaves that synchronization to the caller.
pub struct WalletStore<S: StorageBackend> {
    registry: WalletRegistry<S>,
    client: ServiceClient,

    assets: Vec<AssetInfo>,
    transactions: Vec<TransactionItem>,
    token_transfers: Vec<TokenTransferItem>,

    loading: bool,
    transactions_loading: bool,
    token_transfers_loading: bool,

    transactions_cursor: Option<String>,
    token_transfers_cursor: Option<String>,
    has_more_transactions: bool,
    has_more_token_transfers: bool,

    events: broadcast::Sender<StoreEvent>,
}

impl<S: StorageBackend> WalletStore<S> {
    pub fn new(client: ServiceClient, registry: WalletRegistry<S>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            registry,
            client,
            assets: Vec::new(),
            transactions: Vec::new(),
            token_transfers: Vec::new(),
            loading: false,
            transactions_loading: false,
            token_transfers_loading: false,
            transactions_cursor: None,
            token_transfers_cursor: None,
            has_more_transactions: false,
            has_more_token_transfers: false,
            events,
        }
    }

    /// Subscribe to state-change events. Missed events (slow receivers) are
    /// dropped by the broadcast channel; a UI treats any event as "refresh".
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn wallets(&self) -> &[Wallet] {
        self.registry.wallets()
    }

    pub fn current_wallet(&self) -> Option<&Wallet> {
        self.registry.current()
    }

    pub fn assets(&self) -> &[AssetInfo] {
        &self.assets
    }

    pub fn transactions(&self) -> &[TransactionItem] {
        &self.transactions
    }

    pub fn token_transfers(&self) -> &[TokenTransferItem] {
        &self.token_transfers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn transactions_loading(&self) -> bool {
        self.transactions_loading
    }

    pub fn token_transfers_loading(&self) -> bool {
        self.token_transfers_loading
    }

    pub fn has_more_transactions(&self) -> bool {
        self.has_more_transactions
    }

    pub fn has_more_token_transfers(&self) -> bool {
        self.has_more_token_transfers
    }

    pub fn transactions_cursor(&self) -> Option<&str> {
        self.transactions_cursor.as_deref()
    }

    pub fn token_transfers_cursor(&self) -> Option<&str> {
        self.token_transfers_cursor.as_deref()
    }

    /// Register and select a new address. See [`WalletRegistry::add`] for
    /// the validation rules.
    pub fn add_wallet(&mut self, address: &str, name: Option<&str>) -> bool {
        if !self.registry.add(address, name) {
            return false;
        }
        self.emit(StoreEvent::WalletsChanged);
        // Adding always selects the new wallet.
        self.clear_view_state();
        self.emit(StoreEvent::SelectionChanged);
        true
    }

    /// Remove an address. Clears view state if the selection changed as a
    /// result.
    pub fn remove_wallet(&mut self, address: &str) -> bool {
        let before = self.registry.current().map(|w| w.address.clone());
        if !self.registry.remove(address) {
            return false;
        }
        self.emit(StoreEvent::WalletsChanged);

        let after = self.registry.current().map(|w| w.address.clone());
        if before != after {
            self.clear_view_state();
            self.emit(StoreEvent::SelectionChanged);
        }
        true
    }

    /// Make a wallet current, unconditionally dropping all fetched state so
    /// no stale cross-wallet data survives the switch.
    pub fn select_wallet(&mut self, address: &str) -> bool {
        if !self.registry.select(address) {
            return false;
        }
        self.clear_view_state();
        self.emit(StoreEvent::SelectionChanged);
        true
    }

    /// Fetch balances for the current wallet, replacing the asset list
    /// wholesale. No-op when nothing is selected.
    pub async fn fetch_balance(&mut self) {
        let Some(address) = self.current_address() else {
            return;
        };

        self.loading = true;
        self.emit(StoreEvent::LoadingChanged);

        self.assets = self.client.get_balance(&address).await;
        self.emit(StoreEvent::AssetsUpdated);

        self.loading = false;
        self.emit(StoreEvent::LoadingChanged);
    }

    /// Fetch raw transaction history. `load_more == false` replaces the list
    /// from the head of the history; `true` continues from the stored cursor
    /// and appends.
    pub async fn fetch_transactions(&mut self, load_more: bool) {
        let Some(address) = self.current_address() else {
            return;
        };

        self.transactions_loading = true;
        self.emit(StoreEvent::LoadingChanged);

        let cursor = if load_more {
            self.transactions_cursor.clone()
        } else {
            None
        };
        let page = self.client.get_transactions(&address, cursor.as_deref()).await;

        if load_more {
            self.transactions.extend(page.items);
        } else {
            self.transactions = page.items;
        }
        // Cursor state always reflects the latest response, replaces included.
        self.transactions_cursor = page.next_cursor;
        self.has_more_transactions = page.has_more;
        self.emit(StoreEvent::TransactionsUpdated);

        self.transactions_loading = false;
        self.emit(StoreEvent::LoadingChanged);
    }

    /// Fetch token-transfer history; same replace/append semantics as
    /// [`fetch_transactions`](Self::fetch_transactions).
    pub async fn fetch_token_transactions(&mut self, load_more: bool) {
        let Some(address) = self.current_address() else {
            return;
        };

        self.token_transfers_loading = true;
        self.emit(StoreEvent::LoadingChanged);

        let cursor = if load_more {
            self.token_transfers_cursor.clone()
        } else {
            None
        };
        let page = self
            .client
            .get_token_transactions(&address, cursor.as_deref())
            .await;

        if load_more {
            self.token_transfers.extend(page.items);
        } else {
            self.token_transfers = page.items;
        }
        self.token_transfers_cursor = page.next_cursor;
        self.has_more_token_transfers = page.has_more;
        self.emit(StoreEvent::TokenTransfersUpdated);

        self.token_transfers_loading = false;
        self.emit(StoreEvent::LoadingChanged);
    }

    /// Total USD balance across all assets, formatted to two decimal places
    /// with half-up rounding applied once to the sum. Unparsable balances
    /// count as zero.
    pub fn total_balance(&self) -> String {
        let mills: i64 = self.assets.iter().map(|a| parse_usd_mills(&a.balance_usd)).sum();
        format_usd(mills)
    }

    fn current_address(&self) -> Option<String> {
        self.registry.current().map(|w| w.address.clone())
    }

    fn clear_view_state(&mut self) {
        self.assets.clear();
        self.transactions.clear();
        self.token_transfers.clear();
        self.transactions_cursor = None;
        self.token_transfers_cursor = None;
        self.has_more_transactions = false;
        self.has_more_token_transfers = false;
    }

    fn emit(&self, event: StoreEvent) {
        // No receivers is fine; nothing is listening yet.
        let _ = self.events.send(event);
    }
}

/// Parses a signed decimal USD amount into 1/1000-dollar units, rounding
/// half-up at the fourth fraction digit. Unparsable input counts as zero.
/// Amounts are summed at this precision so sub-cent values accumulate; the
/// total is rounded to cents only once, in [`format_usd`]. Integer units
/// also keep `"10.005"` rounding to `10.01` where f64 arithmetic would land
/// below the midpoint.
fn parse_usd_mills(value: &str) -> i64 {
    let value = value.trim();
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let (whole, frac) = match unsigned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (unsigned, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return 0;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    let whole: i64 = whole.parse().unwrap_or(0);
    let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let thousandths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    sign * (whole * 1000 + tenths * 100 + hundredths * 10 + thousandths + i64::from(round_up))
}

/// Rounds a 1/1000-dollar total half-up (away from zero) to cents and
/// formats it with two decimal places.
fn format_usd(mills: i64) -> String {
    let cents = if mills >= 0 {
        (mills + 5) / 10
    } else {
        -((-mills + 5) / 10)
    };
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_mills_parsing() {
        assert_eq!(parse_usd_mills("10.005"), 10005);
        assert_eq!(parse_usd_mills("10.0004"), 10000);
        assert_eq!(parse_usd_mills("10.0005"), 10001);
        assert_eq!(parse_usd_mills("10"), 10000);
        assert_eq!(parse_usd_mills("0.1"), 100);
        assert_eq!(parse_usd_mills(".5"), 500);
        assert_eq!(parse_usd_mills("1999.99"), 1999990);
        assert_eq!(parse_usd_mills("-0.004"), -4);
        assert_eq!(parse_usd_mills("+1.25"), 1250);
        assert_eq!(parse_usd_mills("bad"), 0);
        assert_eq!(parse_usd_mills(""), 0);
        assert_eq!(parse_usd_mills("-"), 0);
        assert_eq!(parse_usd_mills("."), 0);
        assert_eq!(parse_usd_mills("1.2.3"), 0);
    }

    #[test]
    fn usd_formatting_rounds_the_total_once() {
        assert_eq!(format_usd(0), "0.00");
        assert_eq!(format_usd(10005), "10.01");
        // Sub-cent amounts accumulate before rounding: 3 x 0.004 = 0.012.
        assert_eq!(format_usd(4 + 4 + 4), "0.01");
        assert_eq!(format_usd(2100750), "2100.75");
        assert_eq!(format_usd(-12), "-0.01");
        assert_eq!(format_usd(-4), "0.00");
    }
}
