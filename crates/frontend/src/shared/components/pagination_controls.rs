use crate::shared::icons::icon;
use leptos::prelude::*;

/// Zero-based page index plus page count, derived from an offset/limit cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    /// First row shown (1-based), 0 on an empty page.
    pub first_row: usize,
    /// Last row shown (1-based), 0 on an empty page.
    pub last_row: usize,
    pub total_count: usize,
}

impl PageInfo {
    pub fn new(offset: usize, limit: usize, rows_on_page: usize, total_count: usize) -> Self {
        let limit = limit.max(1);
        let (first_row, last_row) = if rows_on_page == 0 {
            (0, 0)
        } else {
            (offset + 1, offset + rows_on_page)
        };
        Self {
            page_index: offset / limit,
            page_count: total_count.div_ceil(limit).max(1),
            first_row,
            last_row,
            total_count,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

/// Previous/next pager for offset-paginated tables
#[component]
pub fn PaginationControls(
    #[prop(into)] info: Signal<PageInfo>,

    /// Noun shown in the row counter, e.g. "customers"
    #[prop(into)]
    title: String,

    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let i = info.get();
                    format!("{} - {} of {} {}", i.first_row, i.last_row, i.total_count, title)
                }}
            </span>
            <span class="pagination-pages">
                {move || {
                    let i = info.get();
                    format!("{} of {}", i.page_index + 1, i.page_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if info.get_untracked().has_prev() {
                        on_prev.run(());
                    }
                }
                disabled=move || !info.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if info.get_untracked().has_next() {
                        on_next.run(());
                    }
                }
                disabled=move || !info.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let info = PageInfo::new(0, 15, 15, 40);
        assert_eq!(info.page_index, 0);
        assert_eq!(info.page_count, 3);
        assert_eq!((info.first_row, info.last_row), (1, 15));
        assert!(!info.has_prev());
        assert!(info.has_next());
    }

    #[test]
    fn test_last_page() {
        let info = PageInfo::new(30, 15, 10, 40);
        assert_eq!(info.page_index, 2);
        assert_eq!((info.first_row, info.last_row), (31, 40));
        assert!(info.has_prev());
        assert!(!info.has_next());
    }

    #[test]
    fn test_empty_result() {
        let info = PageInfo::new(0, 15, 0, 0);
        assert_eq!(info.page_count, 1);
        assert_eq!((info.first_row, info.last_row), (0, 0));
        assert!(!info.has_prev());
        assert!(!info.has_next());
    }

    #[test]
    fn test_offset_past_the_end() {
        let info = PageInfo::new(300, 15, 0, 40);
        assert_eq!((info.first_row, info.last_row), (0, 0));
        assert_eq!(info.page_count, 3);
        assert!(info.has_prev());
        assert!(!info.has_next());
    }
}
