//! Counting session: owns the lists and the screen state, and is the only
//! place that talks to the store.

use crate::capability::{BarcodeSource, TallyView};
use crate::model::{Product, TallyEntry};
use crate::mvi::Reducer;
use crate::reconcile::{self, EditBuffer};
use crate::scan::{ScanIntent, ScanReducer, ScanState};
use crate::store::{KvStore, TallyStore};

/// Outcome of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub entry: TallyEntry,
    pub created: bool,
    /// False when the store rejected the write. The in-memory list keeps
    /// the change either way.
    pub persisted: bool,
}

pub struct TallySession<S> {
    store: TallyStore<S>,
    products: Vec<Product>,
    tallies: Vec<TallyEntry>,
    state: ScanState,
    default_quantity: i64,
}

impl<S: KvStore> TallySession<S> {
    /// Load both collections once. Unreadable blobs start as empty lists.
    pub fn open(store: TallyStore<S>, default_quantity: i64) -> Self {
        let products = store.list_products();
        let tallies = store.list_tallies();
        tracing::debug!(
            products = products.len(),
            tallies = tallies.len(),
            "session opened"
        );
        Self {
            store,
            products,
            tallies,
            state: ScanState::Idle,
            default_quantity,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn tallies(&self) -> &[TallyEntry] {
        &self.tallies
    }

    pub fn store(&self) -> &TallyStore<S> {
        &self.store
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.state.buffer()
    }

    fn dispatch(&mut self, intent: ScanIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ScanReducer::reduce(state, intent);
    }

    /// Replace the catalog and persist it.
    pub fn import_products(&mut self, products: Vec<Product>) -> bool {
        let persisted = self.store.save_products(&products);
        tracing::info!(count = products.len(), persisted, "product catalog replaced");
        self.products = products;
        persisted
    }

    pub fn begin_scan(&mut self) {
        self.dispatch(ScanIntent::BeginScan);
    }

    /// Resolve `barcode` against the current lists and open the edit.
    pub fn complete_scan(&mut self, barcode: &str) {
        if self.buffer().is_some() {
            tracing::debug!(barcode, "scan ignored while an edit is open");
            return;
        }
        let buffer = reconcile::lookup(barcode, self.default_quantity, &self.products, &self.tallies);
        tracing::debug!(
            barcode,
            known = !buffer.name.is_empty(),
            existing = !buffer.is_new(),
            "scan resolved"
        );
        self.dispatch(ScanIntent::Scanned { buffer });
    }

    /// Run one scan through `source`. Returns whether an edit is now open.
    pub fn scan_with<B: BarcodeSource>(&mut self, source: &mut B) -> bool {
        self.begin_scan();
        match source.next_scan() {
            Some(code) => {
                self.complete_scan(&code);
                self.buffer().is_some()
            }
            None => {
                self.dispatch(ScanIntent::ScanAborted);
                false
            }
        }
    }

    pub fn increment(&mut self) {
        self.dispatch(ScanIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(ScanIntent::Decrement);
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.dispatch(ScanIntent::SetQuantity { quantity });
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch(ScanIntent::Rename { name: name.into() });
    }

    pub fn cancel(&mut self) {
        self.dispatch(ScanIntent::Cancel);
    }

    /// Commit the open edit, persist the whole tally list, and clear the
    /// buffer. Returns `None` when no edit is open.
    pub fn save(&mut self) -> Option<SaveOutcome> {
        let buffer = self.buffer()?.clone();
        let tallies = std::mem::take(&mut self.tallies);
        let (tallies, committed) = reconcile::commit(tallies, buffer);
        self.tallies = tallies;

        let persisted = self.store.save_tallies(&self.tallies);
        self.dispatch(ScanIntent::Saved);

        tracing::info!(
            id = committed.entry.id,
            barcode = %committed.entry.barcode,
            quantity = committed.entry.quantity,
            created = committed.created,
            persisted,
            "tally saved"
        );
        Some(SaveOutcome {
            entry: committed.entry,
            created: committed.created,
            persisted,
        })
    }

    pub fn render<V: TallyView>(&self, view: &mut V) {
        view.render(&self.tallies);
    }
}
