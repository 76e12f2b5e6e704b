use std::rc::Rc;

use serde::{Deserialize, Serialize};
use shared::CartItem;
use yew::prelude::*;

use super::StorageAdapter;

const CART_KEY: &str = "feastly.cart";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn merchant_id(&self) -> Option<u64> {
        self.items.first().map(|item| item.merchant_id)
    }

    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add an item, merging quantities for an existing product. Carts hold
    /// a single merchant's items: adding from a different merchant replaces
    /// the cart.
    pub fn with_item(&self, item: CartItem) -> CartState {
        let mut items = match self.merchant_id() {
            Some(current) if current != item.merchant_id => Vec::new(),
            _ => self.items.clone(),
        };
        if let Some(existing) = items.iter_mut().find(|i| i.product_id == item.product_id) {
            existing.quantity += item.quantity;
        } else {
            items.push(item);
        }
        CartState { items }
    }

    /// Set an item's quantity; zero removes the line.
    pub fn with_quantity(&self, product_id: u64, quantity: u32) -> CartState {
        let mut items = self.items.clone();
        if quantity == 0 {
            items.retain(|item| item.product_id != product_id);
        } else if let Some(existing) = items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = quantity;
        }
        CartState { items }
    }

    pub fn without_item(&self, product_id: u64) -> CartState {
        let mut items = self.items.clone();
        items.retain(|item| item.product_id != product_id);
        CartState { items }
    }
}

pub enum CartAction {
    Add(CartItem),
    SetQuantity { product_id: u64, quantity: u32 },
    Remove { product_id: u64 },
    Clear,
}

/// Cart state container: pure transitions plus persistence through the
/// injected adapter on every mutation.
#[derive(Clone)]
pub struct CartStore {
    pub state: CartState,
    adapter: Rc<dyn StorageAdapter>,
}

impl PartialEq for CartStore {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl CartStore {
    pub fn hydrate(adapter: Rc<dyn StorageAdapter>) -> Self {
        let state = adapter
            .load(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { state, adapter }
    }

    fn persist(&self, next: CartState) -> Self {
        if let Ok(raw) = serde_json::to_string(&next) {
            self.adapter.save(CART_KEY, &raw);
        }
        Self {
            state: next,
            adapter: Rc::clone(&self.adapter),
        }
    }
}

impl Reducible for CartStore {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: CartAction) -> Rc<Self> {
        let next = match action {
            CartAction::Add(item) => self.state.with_item(item),
            CartAction::SetQuantity { product_id, quantity } => {
                self.state.with_quantity(product_id, quantity)
            }
            CartAction::Remove { product_id } => self.state.without_item(product_id),
            CartAction::Clear => CartState::default(),
        };
        Rc::new(self.persist(next))
    }
}

pub type CartHandle = UseReducerHandle<CartStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryAdapter;

    fn item(product_id: u64, merchant_id: u64, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id,
            merchant_id,
            name: format!("product {product_id}"),
            price,
            quantity,
            image: None,
        }
    }

    #[test]
    fn adding_same_product_merges_quantity() {
        let state = CartState::default()
            .with_item(item(1, 10, 2000.0, 1))
            .with_item(item(1, 10, 2000.0, 2));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 3);
        assert_eq!(state.subtotal(), 6000.0);
    }

    #[test]
    fn adding_from_another_merchant_replaces_the_cart() {
        let state = CartState::default()
            .with_item(item(1, 10, 2000.0, 1))
            .with_item(item(2, 10, 500.0, 1))
            .with_item(item(3, 99, 1500.0, 1));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.merchant_id(), Some(99));
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let state = CartState::default()
            .with_item(item(1, 10, 2000.0, 2))
            .with_quantity(1, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn store_persists_through_the_adapter() {
        let adapter = Rc::new(MemoryAdapter::default());
        let store = Rc::new(CartStore::hydrate(adapter.clone()));
        let store = store.reduce(CartAction::Add(item(1, 10, 2000.0, 2)));
        assert_eq!(store.state.count(), 2);

        // A fresh store hydrated from the same adapter sees the cart.
        let rehydrated = CartStore::hydrate(adapter);
        assert_eq!(rehydrated.state, store.state);
    }

    #[test]
    fn clear_empties_cart_and_persists() {
        let adapter = Rc::new(MemoryAdapter::default());
        let store = Rc::new(CartStore::hydrate(adapter.clone()));
        let store = store.reduce(CartAction::Add(item(1, 10, 2000.0, 2)));
        let store = store.reduce(CartAction::Clear);
        assert!(store.state.items.is_empty());
        assert!(CartStore::hydrate(adapter).state.items.is_empty());
    }
}
