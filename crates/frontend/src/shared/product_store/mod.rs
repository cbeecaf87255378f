//! In-memory pallet list of the live entries screen.
//!
//! Lives for the lifetime of the browser tab; provided once in `App` so the
//! list survives navigation between pages.

pub mod model;

use contracts::domain::a002_pallet_product::ProductData;
use leptos::prelude::*;

pub use model::ProductList;

#[derive(Clone, Copy)]
pub struct ProductStore {
    state: RwSignal<ProductList>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ProductList::new()),
        }
    }

    pub fn products(&self) -> Vec<ProductData> {
        self.state.with(|s| s.products().to_vec())
    }

    /// Untracked snapshot, for use inside event handlers.
    pub fn get_products(&self) -> Vec<ProductData> {
        self.state.with_untracked(|s| s.products().to_vec())
    }

    pub fn selected(&self) -> Option<ProductData> {
        self.state.with(|s| s.selected().cloned())
    }

    pub fn selected_untracked(&self) -> Option<ProductData> {
        self.state.with_untracked(|s| s.selected().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.products().is_empty())
    }

    pub fn pending_count(&self) -> usize {
        self.state.with(|s| s.pending_count())
    }

    pub fn contains_epc(&self, epc: &str) -> bool {
        self.state.with_untracked(|s| s.contains_epc(epc))
    }

    pub fn add(&self, product: ProductData) {
        log::debug!("store: add {} ({})", product.id(), product.epc());
        self.state.update(|s| s.add(product));
    }

    pub fn select(&self, product: ProductData) {
        self.state.update(|s| s.select(product));
    }

    pub fn select_manual(&self, product: ProductData) {
        self.state.update(|s| s.select_manual(product));
    }

    pub fn update_operator(&self, id: &str, operator: &str) {
        self.state.update(|s| {
            if !s.update_operator(id, operator) {
                log::warn!("store: update_operator for unknown product {}", id);
            }
        });
    }

    pub fn mark_assigned(&self, id: &str, operator: &str) {
        self.state.update(|s| {
            s.mark_assigned(id, operator);
        });
    }

    pub fn remove(&self, id: &str) {
        self.state.update(|s| {
            s.remove(id);
        });
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_product_store() -> ProductStore {
    use_context::<ProductStore>().expect("ProductStore not provided in context")
}
