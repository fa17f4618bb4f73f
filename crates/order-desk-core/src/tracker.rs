//! Tracker
//!
//! Owns both repositories and the configuration. This is the surface the
//! UI calls into; every operation is total. Only validation failures are
//! returned, for the UI to report and highlight.

use crate::aggregate::Dashboard;
use crate::config::TrackerConfig;
use crate::domain::{Order, OrderDraft, OrderField, OrderInput, RecordId, Task, ValidationError};
use crate::render::{render, RenderModel};
use crate::repository::{KeyValueStore, OrderRepository, TaskRepository};

pub struct Tracker<S> {
    config: TrackerConfig,
    tasks: TaskRepository<S>,
    orders: OrderRepository<S>,
}

impl<S: KeyValueStore + Clone> Tracker<S> {
    /// Load both collections from `store`
    pub fn load(store: S, config: TrackerConfig) -> Self {
        let tasks = TaskRepository::load(store.clone(), config.tasks_key.clone());
        let orders = OrderRepository::load(store, config.orders_key.clone());
        log::info!("[TRACKER] Loaded {} task(s), {} order(s)", tasks.len(), orders.len());
        Self { config, tasks, orders }
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn tasks(&self) -> &TaskRepository<S> {
        &self.tasks
    }

    pub fn orders(&self) -> &OrderRepository<S> {
        &self.orders
    }

    // ========================
    // Tasks
    // ========================

    pub fn add_task(&mut self, text: &str) -> Result<RecordId, ValidationError> {
        self.tasks.add(text)
    }

    pub fn toggle_task_done(&mut self, id: RecordId) -> bool {
        self.tasks.toggle_done(id)
    }

    pub fn delete_task(&mut self, id: RecordId) -> bool {
        self.tasks.delete(id)
    }

    pub fn task(&self, id: RecordId) -> Option<&Task> {
        self.tasks.get(id)
    }

    // ========================
    // Orders
    // ========================

    /// Add from raw form values
    pub fn add_order(&mut self, input: &OrderInput) -> Result<RecordId, ValidationError> {
        let order = input.parse()?;
        Ok(self.orders.add_order(order))
    }

    /// Add from typed values
    pub fn add_order_draft(&mut self, draft: &OrderDraft) -> Result<RecordId, ValidationError> {
        self.orders.add(draft)
    }

    pub fn toggle_order_done(&mut self, id: RecordId) -> bool {
        self.orders.toggle_done(id)
    }

    /// Replace an order from raw form values, all-or-nothing
    pub fn edit_order(&mut self, id: RecordId, input: &OrderInput) -> Result<bool, ValidationError> {
        if self.orders.get(id).is_none() {
            self.orders.not_found(id);
            return Ok(false);
        }
        let replacement = input.parse()?;
        Ok(self.orders.replace(id, replacement))
    }

    pub fn delete_order(&mut self, id: RecordId) -> bool {
        self.orders.delete(id)
    }

    pub fn order(&self, id: RecordId) -> Option<&Order> {
        self.orders.get(id)
    }

    // ========================
    // Inventory (view over orders)
    // ========================

    /// Inline edit of one field (`"text"`, `"price"` or `"quantity"`);
    /// an invalid value keeps the old one
    pub fn update_inventory_item(
        &mut self,
        id: RecordId,
        field: &str,
        raw: &str,
    ) -> Result<bool, ValidationError> {
        let field: OrderField = field.parse()?;
        self.orders.update_field(id, field, raw, &self.config.currency_symbol)
    }

    pub fn delete_inventory_item(&mut self, id: RecordId) -> bool {
        self.orders.delete(id)
    }

    // ========================
    // Derived output
    // ========================

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::compute(self.tasks.entries(), self.orders.entries())
    }

    pub fn render(&self) -> RenderModel {
        render(self.tasks.entries(), self.orders.entries(), &self.config.currency_symbol)
    }
}
