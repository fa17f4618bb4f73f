//! Aggregator
//!
//! Counts derived from a collection on demand. Nothing is cached.

use crate::domain::{Entry, Order, Record, Task};

/// Total / completed / pending counts for one collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Counts {
    pub fn of<'a, T: Record + 'a>(records: impl IntoIterator<Item = &'a T>) -> Self {
        let (total, completed) = records
            .into_iter()
            .fold((0, 0), |(total, done), r| (total + 1, done + usize::from(r.is_done())));
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn of_entries<T: Record>(entries: &[Entry<T>]) -> Self {
        Self::of(entries.iter().map(|e| &e.record))
    }
}

/// Named counter displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    TasksTotal,
    TasksCompleted,
    TasksPending,
    OrdersTotal,
    OrdersCompleted,
    OrdersPending,
}

impl Counter {
    pub const ALL: [Counter; 6] = [
        Counter::TasksTotal,
        Counter::TasksCompleted,
        Counter::TasksPending,
        Counter::OrdersTotal,
        Counter::OrdersCompleted,
        Counter::OrdersPending,
    ];

    /// Element id of the dashboard display
    pub fn element_id(&self) -> &'static str {
        match self {
            Counter::TasksTotal => "tasksTotal",
            Counter::TasksCompleted => "tasksCompleted",
            Counter::TasksPending => "tasksPending",
            Counter::OrdersTotal => "ordersTotal",
            Counter::OrdersCompleted => "ordersCompleted",
            Counter::OrdersPending => "ordersPending",
        }
    }

    /// Element id of the mirror shown in the orders section, if any
    pub fn section_element_id(&self) -> Option<&'static str> {
        match self {
            Counter::OrdersTotal => Some("sectionOrdersTotal"),
            Counter::OrdersCompleted => Some("sectionOrdersCompleted"),
            Counter::OrdersPending => Some("sectionOrdersPending"),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Counter::TasksTotal => "Total Tasks",
            Counter::TasksCompleted => "Completed Tasks",
            Counter::TasksPending => "Pending Tasks",
            Counter::OrdersTotal => "Total Orders",
            Counter::OrdersCompleted => "Completed Orders",
            Counter::OrdersPending => "Pending Orders",
        }
    }
}

/// The six dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub tasks: Counts,
    pub orders: Counts,
}

impl Dashboard {
    pub fn compute(tasks: &[Entry<Task>], orders: &[Entry<Order>]) -> Self {
        Self {
            tasks: Counts::of_entries(tasks),
            orders: Counts::of_entries(orders),
        }
    }

    pub fn value(&self, counter: Counter) -> usize {
        match counter {
            Counter::TasksTotal => self.tasks.total,
            Counter::TasksCompleted => self.tasks.completed,
            Counter::TasksPending => self.tasks.pending,
            Counter::OrdersTotal => self.orders.total,
            Counter::OrdersCompleted => self.orders.completed,
            Counter::OrdersPending => self.orders.pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(done: bool) -> Task {
        Task { text: "t".to_string(), done }
    }

    #[test]
    fn test_counts() {
        let tasks = vec![task(true), task(false), task(true)];
        let counts = Counts::of(&tasks);
        assert_eq!(counts, Counts { total: 3, completed: 2, pending: 1 });
        assert_eq!(counts.pending + counts.completed, counts.total);
    }

    #[test]
    fn test_empty_counts() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(Counts::of(&tasks), Counts::default());
    }

    #[test]
    fn test_counter_ids() {
        let ids: Vec<_> = Counter::ALL.iter().map(Counter::element_id).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(Counter::OrdersPending.section_element_id(), Some("sectionOrdersPending"));
        assert_eq!(Counter::TasksTotal.section_element_id(), None);
    }
}
