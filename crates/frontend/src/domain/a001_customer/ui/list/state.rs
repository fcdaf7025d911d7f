use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

/// Rows and counters of the customer table; filters live in [`super::filters`].
#[derive(Clone, Debug, Default)]
pub struct CustomerListState {
    pub items: Vec<Customer>,
    pub total_count: usize,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}
