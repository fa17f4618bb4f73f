//! Renderer
//!
//! Stateless projection of both collections into presentational rows and
//! counters. Rebuilt in full after every mutation; rows carry the record id
//! and its position as of this pass.

use crate::aggregate::Dashboard;
use crate::domain::{Entry, Order, RecordId, Task};

/// Named render containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    PendingTasks,
    CompletedTasks,
    PendingOrders,
    CompletedOrders,
    Inventory,
}

impl RenderTarget {
    pub fn element_id(&self) -> &'static str {
        match self {
            RenderTarget::PendingTasks => "tasksList",
            RenderTarget::CompletedTasks => "completedTasksList",
            RenderTarget::PendingOrders => "ordersList",
            RenderTarget::CompletedOrders => "completedOrdersList",
            RenderTarget::Inventory => "inventoryTable",
        }
    }
}

/// Items split by completion, each half in original relative order
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<R> {
    pub pending: Vec<R>,
    pub completed: Vec<R>,
}

impl<R> Default for Partition<R> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            completed: Vec::new(),
        }
    }
}

impl<R> Partition<R> {
    fn push(&mut self, done: bool, row: R) {
        if done {
            self.completed.push(row);
        } else {
            self.pending.push(row);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: RecordId,
    pub index: usize,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: RecordId,
    pub index: usize,
    pub text: String,
    pub price: f64,
    pub quantity: u64,
    pub done: bool,
    /// `"Pen — $1.50 x 10"`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub id: RecordId,
    pub index: usize,
    pub text: String,
    pub price_label: String,
    pub quantity: u64,
    pub total_label: String,
}

/// Full presentational output for one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    pub tasks: Partition<TaskRow>,
    pub orders: Partition<OrderRow>,
    pub inventory: Vec<InventoryRow>,
    pub dashboard: Dashboard,
}

/// Format an amount as `<symbol><amount:.2>`
pub fn money(currency_symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

pub fn render(tasks: &[Entry<Task>], orders: &[Entry<Order>], currency_symbol: &str) -> RenderModel {
    let mut model = RenderModel {
        dashboard: Dashboard::compute(tasks, orders),
        ..Default::default()
    };

    for (index, entry) in tasks.iter().enumerate() {
        let task = &entry.record;
        model.tasks.push(task.done, TaskRow {
            id: entry.id,
            index,
            text: task.text.clone(),
            done: task.done,
        });
    }

    for (index, entry) in orders.iter().enumerate() {
        let order = &entry.record;
        model.orders.push(order.done, OrderRow {
            id: entry.id,
            index,
            text: order.text.clone(),
            price: order.price,
            quantity: order.quantity,
            done: order.done,
            label: format!("{} — {} x {}", order.text, money(currency_symbol, order.price), order.quantity),
        });
        model.inventory.push(InventoryRow {
            id: entry.id,
            index,
            text: order.text.clone(),
            price_label: money(currency_symbol, order.price),
            quantity: order.quantity,
            total_label: money(currency_symbol, order.total_value()),
        });
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    fn entry<T>(id: u32, record: T) -> Entry<T> {
        Entry { id: RecordId::new(id), record }
    }

    fn task(text: &str, done: bool) -> Task {
        Task { text: text.to_string(), done }
    }

    #[test]
    fn test_partition_keeps_relative_order() {
        let tasks = vec![
            entry(1, task("a", false)),
            entry(2, task("b", true)),
            entry(3, task("c", false)),
            entry(4, task("d", true)),
        ];
        let model = render(&tasks, &[], "$");

        let pending: Vec<_> = model.tasks.pending.iter().map(|r| (r.text.as_str(), r.index)).collect();
        let completed: Vec<_> = model.tasks.completed.iter().map(|r| (r.text.as_str(), r.index)).collect();
        assert_eq!(pending, vec![("a", 0), ("c", 2)]);
        assert_eq!(completed, vec![("b", 1), ("d", 3)]);
        assert_eq!(model.dashboard.tasks.total, 4);
        assert_eq!(model.dashboard.tasks.completed, 2);
    }

    #[test]
    fn test_order_and_inventory_labels() {
        let orders = vec![entry(7, Order { text: "Pen".to_string(), price: 1.5, quantity: 10, done: false })];
        let model = render(&[], &orders, "$");

        let row = &model.orders.pending[0];
        assert_eq!(row.id, RecordId::new(7));
        assert_eq!(row.label, "Pen — $1.50 x 10");

        let inv = &model.inventory[0];
        assert_eq!(inv.price_label, "$1.50");
        assert_eq!(inv.total_label, "$15.00");
        assert_eq!(inv.quantity, 10);
    }

    #[test]
    fn test_inventory_lists_completed_orders_too() {
        let orders = vec![
            entry(1, Order { text: "A".to_string(), price: 2.0, quantity: 1, done: true }),
            entry(2, Order { text: "B".to_string(), price: 3.0, quantity: 0, done: false }),
        ];
        let model = render(&[], &orders, "€");
        assert_eq!(model.inventory.len(), 2);
        assert_eq!(model.inventory[1].total_label, "€0.00");
        assert_eq!(model.orders.completed.len(), 1);
        assert_eq!(model.orders.pending.len(), 1);
    }

    #[test]
    fn test_target_ids() {
        assert_eq!(RenderTarget::PendingTasks.element_id(), "tasksList");
        assert_eq!(RenderTarget::Inventory.element_id(), "inventoryTable");
    }
}
