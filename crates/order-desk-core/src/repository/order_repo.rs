//! Order Repository
//!
//! Orders add edit support on top of the shared operations: a full
//! replacement (`edit`, all-or-nothing) and a single-field inline edit
//! (`update_field`, used by the inventory view).

use crate::domain::{Order, OrderDraft, OrderField, RecordId, ValidationError};
use super::repo::Repository;
use super::traits::KeyValueStore;

pub type OrderRepository<S> = Repository<Order, S>;

impl<S: KeyValueStore> Repository<Order, S> {
    /// Append a validated, pending order
    pub fn add(&mut self, draft: &OrderDraft) -> Result<RecordId, ValidationError> {
        let order = draft.validate()?;
        Ok(self.add_order(order))
    }

    /// Append an order already checked by the caller
    pub(crate) fn add_order(&mut self, mut order: Order) -> RecordId {
        order.done = false;
        log::info!("[ORDER] Added: {} ({} x {})", order.text, order.price, order.quantity);
        let id = self.insert(order);
        self.persist();
        id
    }

    /// Replace name, price and quantity, keeping the completion flag.
    ///
    /// Returns `Ok(false)` for unknown ids. Invalid drafts change nothing.
    pub fn edit(&mut self, id: RecordId, draft: &OrderDraft) -> Result<bool, ValidationError> {
        if self.get(id).is_none() {
            self.not_found(id);
            return Ok(false);
        }
        let replacement = draft.validate()?;
        Ok(self.replace(id, replacement))
    }

    /// Replace an existing order's fields with checked values
    pub(crate) fn replace(&mut self, id: RecordId, replacement: Order) -> bool {
        let Some(order) = self.get_mut(id) else {
            return false;
        };
        order.text = replacement.text;
        order.price = replacement.price;
        order.quantity = replacement.quantity;
        self.persist();
        log::info!("[ORDER] Edited {}", id);
        true
    }

    /// Inline edit of one field; an invalid value keeps the old one.
    ///
    /// Returns `Ok(true)` when the stored value changed.
    pub fn update_field(
        &mut self,
        id: RecordId,
        field: OrderField,
        raw: &str,
        currency_symbol: &str,
    ) -> Result<bool, ValidationError> {
        let Some(order) = self.get_mut(id) else {
            return Ok(false);
        };
        let changed = order.apply_field(field, raw, currency_symbol)?;
        if changed {
            self.persist();
            log::info!("[ORDER] Updated {} of {}", field, id);
        }
        Ok(changed)
    }
}
