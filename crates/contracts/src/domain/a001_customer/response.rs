use serde::{Deserialize, Serialize};

use super::aggregate::Customer;

/// One page of `GET /admin/customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerListResponse {
    pub customers: Vec<Customer>,
    /// Total number of customers matching the filter, across all pages.
    pub count: usize,
    pub offset: usize,
    pub limit: usize,
}

impl CustomerListResponse {
    /// Number of pages for the given page size, never less than one.
    pub fn page_count(&self, limit: usize) -> usize {
        if limit == 0 {
            return 1;
        }
        self.count.div_ceil(limit).max(1)
    }
}

/// Single customer envelope of `GET /admin/customers/{id}` and `POST /admin/customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer: Customer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: usize) -> CustomerListResponse {
        CustomerListResponse {
            customers: Vec::new(),
            count,
            offset: 0,
            limit: 15,
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page(0).page_count(15), 1);
        assert_eq!(page(15).page_count(15), 1);
        assert_eq!(page(16).page_count(15), 2);
        assert_eq!(page(45).page_count(15), 3);
        assert_eq!(page(10).page_count(0), 1);
    }
}
