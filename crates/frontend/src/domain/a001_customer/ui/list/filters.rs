//! Filter state of the customer table.
//!
//! Holds the free-text search, the dealer scope and offset/limit paging.
//! Two projections are derived from it: the query sent to
//! `/admin/customers` (with the caller's constant filters merged in) and
//! the representation written to the address bar (without them).
//!
//! Parsing never fails: unknown keys are ignored and numbers that do not
//! parse keep their defaults.

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Rows per page when the address bar does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Constant filters merged into every remote query, e.g. `expand=orders`.
pub type AdditionalFilters = BTreeMap<String, String>;

/// Keys owned by [`FilterState`]; additional filters may not shadow them.
const RESERVED_KEYS: [&str; 4] = ["q", "offset", "limit", "user_id"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: Option<String>,
    pub user_id: Option<String>,
    pub offset: u32,
    pub limit: u32,
    pub additional_filters: AdditionalFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetQuery(Option<String>),
    SetUser(Option<String>),
    SetOffset(u32),
    SetFilters(FilterState),
    SetDefaults(AdditionalFilters),
    Reset,
}

/// Flat query object. `additional` is empty for the address-bar representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterQuery {
    #[serde(flatten)]
    pub additional: AdditionalFilters,
    pub offset: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl FilterQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|e| {
            log::warn!("Failed to encode filter query: {}", e);
            String::new()
        })
    }
}

/// Raw recognized parameters of one `key=value` pair.
#[derive(Debug, Deserialize)]
struct RawParams {
    q: Option<String>,
    offset: Option<String>,
    limit: Option<String>,
    user_id: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: None,
            user_id: None,
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
            additional_filters: AdditionalFilters::new(),
        }
    }
}

impl FilterState {
    /// Builds the initial state from the current `location.search` and the
    /// caller's constant filters.
    pub fn from_query_string(existing: Option<&str>, defaults: AdditionalFilters) -> Self {
        let mut state = Self {
            additional_filters: defaults,
            ..Self::default()
        };

        let Some(existing) = existing else {
            return state;
        };
        let existing = existing.strip_prefix('?').unwrap_or(existing);

        // Pairs are decoded one at a time so that a single malformed or
        // nested pair drops only itself.
        for pair in existing.split('&').filter(|p| !p.is_empty()) {
            let Ok(raw) = serde_qs::from_str::<RawParams>(pair) else {
                continue;
            };
            if let Some(q) = raw.q {
                state.query = Some(q);
            }
            if let Some(user_id) = raw.user_id {
                state.user_id = Some(user_id);
            }
            if let Some(offset) = raw.offset.and_then(|v| v.parse::<u32>().ok()) {
                state.offset = offset;
            }
            if let Some(limit) = raw
                .limit
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|limit| *limit > 0)
            {
                state.limit = limit;
            }
        }

        state
    }

    /// Pure transition function; `self` is left untouched.
    pub fn apply(&self, action: FilterAction) -> FilterState {
        match action {
            FilterAction::SetQuery(query) => FilterState {
                query,
                offset: 0,
                ..self.clone()
            },
            FilterAction::SetUser(user_id) => FilterState {
                user_id,
                offset: 0,
                ..self.clone()
            },
            FilterAction::SetOffset(offset) => FilterState {
                offset,
                ..self.clone()
            },
            FilterAction::SetFilters(state) => state,
            FilterAction::SetDefaults(additional_filters) => FilterState {
                additional_filters,
                ..self.clone()
            },
            // limit and additional filters stay sticky across resets
            FilterAction::Reset => FilterState {
                query: None,
                user_id: None,
                offset: 0,
                ..self.clone()
            },
        }
    }

    pub fn paginate(&self, direction: PageDirection) -> FilterState {
        let offset = match direction {
            PageDirection::Next => self.offset.saturating_add(self.limit),
            PageDirection::Previous => self.offset.saturating_sub(self.limit),
        };
        self.apply(FilterAction::SetOffset(offset))
    }

    /// Zero-based page the offset falls on.
    pub fn page_index(&self) -> u32 {
        self.offset / self.limit.max(1)
    }

    pub fn query_object(&self) -> FilterQuery {
        let additional = self
            .additional_filters
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        FilterQuery {
            additional,
            ..self.representation_object()
        }
    }

    pub fn representation_object(&self) -> FilterQuery {
        FilterQuery {
            additional: AdditionalFilters::new(),
            offset: self.offset,
            limit: self.limit,
            q: non_empty(&self.query),
            user_id: non_empty(&self.user_id),
        }
    }

    pub fn query_string(&self) -> String {
        self.query_object().to_query_string()
    }

    pub fn representation_string(&self) -> String {
        self.representation_object().to_query_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Reactive handle over [`FilterState`] for the customer table view.
///
/// Actions replace the whole state; the memos recompute only when the
/// snapshot they are derived from changes.
#[derive(Clone, Copy)]
pub struct CustomerFilters {
    state: RwSignal<FilterState>,
    pub query_object: Memo<FilterQuery>,
    pub representation_object: Memo<FilterQuery>,
    pub representation_string: Memo<String>,
}

impl CustomerFilters {
    pub fn new(existing: Option<&str>, defaults: AdditionalFilters) -> Self {
        let state = RwSignal::new(FilterState::from_query_string(existing, defaults));
        let query_object = Memo::new(move |_| state.with(|s| s.query_object()));
        let representation_object = Memo::new(move |_| state.with(|s| s.representation_object()));
        let representation_string =
            Memo::new(move |_| representation_object.with(|r| r.to_query_string()));

        Self {
            state,
            query_object,
            representation_object,
            representation_string,
        }
    }

    pub fn state(&self) -> Signal<FilterState> {
        self.state.into()
    }

    pub fn dispatch(&self, action: FilterAction) {
        self.state.update(|s| *s = s.apply(action));
    }

    pub fn set_query(&self, query: Option<String>) {
        self.dispatch(FilterAction::SetQuery(query));
    }

    pub fn set_user(&self, user_id: Option<String>) {
        self.dispatch(FilterAction::SetUser(user_id));
    }

    pub fn set_filters(&self, filters: FilterState) {
        self.dispatch(FilterAction::SetFilters(filters));
    }

    pub fn set_default_filters(&self, defaults: AdditionalFilters) {
        self.dispatch(FilterAction::SetDefaults(defaults));
    }

    pub fn reset(&self) {
        self.dispatch(FilterAction::Reset);
    }

    pub fn paginate(&self, direction: PageDirection) {
        self.state.update(|s| *s = s.paginate(direction));
    }

    pub fn query_string(&self) -> String {
        self.query_object.with(|q| q.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn expand_orders() -> AdditionalFilters {
        AdditionalFilters::from([("expand".to_string(), "orders".to_string())])
    }

    #[test]
    fn test_parse_recognized_keys() {
        let state = FilterState::from_query_string(
            Some("offset=30&limit=10&q=shoes"),
            AdditionalFilters::new(),
        );
        assert_eq!(state.query.as_deref(), Some("shoes"));
        assert_eq!(state.offset, 30);
        assert_eq!(state.limit, 10);
        assert_eq!(state.user_id, None);
    }

    #[test]
    fn test_parse_strips_leading_question_mark() {
        let state = FilterState::from_query_string(
            Some("?user_id=usr_42&offset=15"),
            AdditionalFilters::new(),
        );
        assert_eq!(state.user_id.as_deref(), Some("usr_42"));
        assert_eq!(state.offset, 15);
    }

    #[test]
    fn test_parse_without_query_string_uses_defaults() {
        let state = FilterState::from_query_string(None, expand_orders());
        assert_eq!(state.offset, 0);
        assert_eq!(state.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(state.query, None);
        assert_eq!(state.additional_filters, expand_orders());

        let empty = FilterState::from_query_string(Some(""), AdditionalFilters::new());
        assert_eq!(empty, FilterState::default());
    }

    #[test]
    fn test_malformed_numbers_fall_back_to_defaults() {
        let state = FilterState::from_query_string(
            Some("offset=abc&limit=-5"),
            AdditionalFilters::new(),
        );
        assert_eq!(state.offset, 0);
        assert_eq!(state.limit, DEFAULT_PAGE_SIZE);

        let zero_limit = FilterState::from_query_string(Some("limit=0"), AdditionalFilters::new());
        assert_eq!(zero_limit.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_unknown_and_nested_keys_are_ignored() {
        let state = FilterState::from_query_string(
            Some("expand=orders&q[nested]=x&order=-created_at&q=jan"),
            AdditionalFilters::new(),
        );
        assert_eq!(state.query.as_deref(), Some("jan"));
        assert!(state.additional_filters.is_empty());
        assert_eq!(
            state,
            FilterState {
                query: Some("jan".to_string()),
                ..FilterState::default()
            }
        );
    }

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let state = FilterState::from_query_string(
            Some("q=jan%20de%20vries%26co"),
            AdditionalFilters::new(),
        );
        assert_eq!(state.query.as_deref(), Some("jan de vries&co"));
    }

    #[test]
    fn test_query_change_resets_offset() {
        let state = FilterState::default()
            .apply(FilterAction::SetQuery(Some("abc".to_string())))
            .paginate(PageDirection::Next);
        assert_eq!(state.offset, 15);

        let state = state.apply(FilterAction::SetQuery(Some("xyz".to_string())));
        assert_eq!(state.offset, 0);
        assert_eq!(state.query.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_user_change_resets_offset() {
        let state = FilterState::default()
            .paginate(PageDirection::Next)
            .paginate(PageDirection::Next)
            .apply(FilterAction::SetUser(Some("usr_1".to_string())));
        assert_eq!(state.offset, 0);
        assert_eq!(state.user_id.as_deref(), Some("usr_1"));
    }

    #[test]
    fn test_paginate_never_goes_negative() {
        let state = FilterState::default().paginate(PageDirection::Previous);
        assert_eq!(state.offset, 0);

        let state = FilterState {
            offset: 10,
            ..FilterState::default()
        }
        .paginate(PageDirection::Previous);
        assert_eq!(state.offset, 0);

        let state = FilterState {
            offset: 45,
            ..FilterState::default()
        }
        .paginate(PageDirection::Previous);
        assert_eq!(state.offset, 30);
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_reset_keeps_limit_and_additional_filters() {
        let state = FilterState::from_query_string(
            Some("q=shoes&user_id=usr_7&offset=40&limit=20"),
            expand_orders(),
        );
        let reset = state.apply(FilterAction::Reset);
        assert_eq!(reset.query, None);
        assert_eq!(reset.user_id, None);
        assert_eq!(reset.offset, 0);
        assert_eq!(reset.limit, 20);
        assert_eq!(reset.additional_filters, expand_orders());
    }

    #[test]
    fn test_set_filters_overwrites_everything() {
        let replacement = FilterState {
            query: Some("new".to_string()),
            user_id: Some("usr_2".to_string()),
            offset: 60,
            limit: 30,
            additional_filters: AdditionalFilters::new(),
        };
        let state = FilterState::from_query_string(Some("q=old"), expand_orders())
            .apply(FilterAction::SetFilters(replacement.clone()));
        assert_eq!(state, replacement);
    }

    #[test]
    fn test_set_defaults_replaces_additional_filters_only() {
        let state = FilterState::from_query_string(Some("q=x&offset=15"), expand_orders());
        let fields = AdditionalFilters::from([("fields".to_string(), "id,email".to_string())]);
        let next = state.apply(FilterAction::SetDefaults(fields.clone()));
        assert_eq!(next.additional_filters, fields);
        assert_eq!(next.offset, 15);
        assert_eq!(next.query.as_deref(), Some("x"));
    }

    #[test]
    fn test_query_object_merges_additional_filters() {
        let state = FilterState::from_query_string(Some("q=shoes&offset=15"), expand_orders());
        let query = state.query_object();
        assert_eq!(query.additional, expand_orders());
        assert_eq!(query.q.as_deref(), Some("shoes"));
        assert_eq!(query.offset, 15);
        assert_eq!(query.limit, 15);
        assert_eq!(state.query_string(), "expand=orders&offset=15&limit=15&q=shoes");
    }

    #[test]
    fn test_additional_filters_cannot_shadow_state() {
        let defaults = AdditionalFilters::from([
            ("offset".to_string(), "999".to_string()),
            ("expand".to_string(), "orders".to_string()),
        ]);
        let state = FilterState::from_query_string(None, defaults);
        assert_eq!(state.query_string(), "expand=orders&offset=0&limit=15");
    }

    #[test]
    fn test_representation_excludes_additional_filters() {
        let state = FilterState::from_query_string(Some("user_id=usr_3"), expand_orders());
        let representation = state.representation_object();
        assert!(representation.additional.is_empty());
        assert!(state.query_object().additional.contains_key("expand"));
        assert_eq!(state.representation_string(), "offset=0&limit=15&user_id=usr_3");
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let state = FilterState {
            query: Some(String::new()),
            user_id: Some(String::new()),
            ..FilterState::default()
        };
        assert_eq!(state.representation_string(), "offset=0&limit=15");
        assert!(!state.query_string().contains("null"));
    }

    #[test]
    fn test_query_string_round_trips() {
        for qs in [
            "offset=30&limit=10&q=shoes",
            "offset=0&limit=15",
            "offset=15&limit=15&q=jan%20jansen&user_id=usr_01H",
        ] {
            let state = FilterState::from_query_string(Some(qs), AdditionalFilters::new());
            let reparsed =
                FilterState::from_query_string(Some(&state.query_string()), AdditionalFilters::new());
            assert_eq!(reparsed, state, "round trip of {qs}");
            assert_eq!(reparsed.query_object(), state.query_object());
        }
    }

    #[test]
    fn test_projections_are_idempotent() {
        let state = FilterState::from_query_string(Some("q=a&offset=15"), expand_orders());
        assert_eq!(state.query_object(), state.query_object());
        assert_eq!(state.representation_string(), state.representation_string());
    }

    #[test]
    fn test_reactive_handle_tracks_actions() {
        let owner = Owner::new();
        owner.set();

        let filters = CustomerFilters::new(Some("?q=jan&offset=30"), expand_orders());
        assert_eq!(
            filters.query_object.get_untracked().additional,
            expand_orders()
        );
        assert_eq!(
            filters.representation_string.get_untracked(),
            "offset=30&limit=15&q=jan"
        );

        filters.paginate(PageDirection::Next);
        assert_eq!(filters.query_object.get_untracked().offset, 45);
        assert_eq!(
            filters.representation_string.get_untracked(),
            "offset=45&limit=15&q=jan"
        );

        filters.paginate(PageDirection::Previous);
        filters.paginate(PageDirection::Previous);
        filters.paginate(PageDirection::Previous);
        filters.paginate(PageDirection::Previous);
        assert_eq!(filters.query_object.get_untracked().offset, 0);

        filters.dispatch(FilterAction::SetUser(Some("usr_3".to_string())));
        assert_eq!(
            filters.representation_string.get_untracked(),
            "offset=0&limit=15&q=jan&user_id=usr_3"
        );
        assert_eq!(
            filters.query_string(),
            "expand=orders&offset=0&limit=15&q=jan&user_id=usr_3"
        );

        filters.reset();
        assert_eq!(filters.representation_string.get_untracked(), "offset=0&limit=15");
        assert_eq!(filters.state().get_untracked().additional_filters, expand_orders());
        assert_eq!(
            filters.representation_object.get_untracked().additional,
            AdditionalFilters::new()
        );
    }

    #[test]
    fn test_reactive_handle_set_filters_and_defaults() {
        let owner = Owner::new();
        owner.set();

        let filters = CustomerFilters::new(None, AdditionalFilters::new());
        filters.set_query(Some("shoes".to_string()));
        filters.set_default_filters(expand_orders());
        assert_eq!(
            filters.query_string(),
            "expand=orders&offset=0&limit=15&q=shoes"
        );

        filters.set_filters(FilterState {
            offset: 60,
            limit: 30,
            ..FilterState::default()
        });
        assert_eq!(filters.query_string(), "offset=60&limit=30");
        assert_eq!(filters.state().get_untracked().page_index(), 2);
    }
}
