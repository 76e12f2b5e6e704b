//! State machine behind every infinite-scroll list in the app.
//!
//! The reducer is deliberately pure so the pagination contract can be
//! tested without a browser. [`super::use_paginated_list`] drives it from
//! effects and owns the actual network requests.

use std::rc::Rc;

use yew::Reducible;

/// Outcome of the most recent page fetch for one list instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Failed(String),
    Success,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Accumulated pagination state for one scoping key.
///
/// `epoch` is a staleness token: every [`ListAction::Reset`] bumps it, and
/// completions carrying an older epoch are discarded whole, so a request
/// that resolves after a key switch or refresh can never touch the new
/// list. `attempt` only exists to re-run the fetch effect when the user
/// retries the same page after a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
    pub status: FetchStatus,
    pub epoch: u32,
    pub attempt: u32,
}

impl<T> ListState<T> {
    pub fn new(per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            per_page,
            has_more: true,
            status: FetchStatus::Idle,
            epoch: 0,
            attempt: 0,
        }
    }

    fn reset(&self) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            per_page: self.per_page,
            has_more: true,
            status: FetchStatus::Idle,
            epoch: self.epoch + 1,
            attempt: 0,
        }
    }
}

pub enum ListAction<T> {
    /// Back to page 1 with an empty list. Scoping-key changes and explicit
    /// refreshes both land here.
    Reset,
    /// A request for the current page went out.
    FetchStarted,
    /// A page resolved. Page 1 replaces the list, later pages append.
    PageLoaded { epoch: u32, page: u32, items: Vec<T> },
    /// A page failed. The accumulated list is left untouched and further
    /// loading stops until an explicit retry.
    FetchFailed { epoch: u32, message: String },
    /// Ask for the next page. No-op while loading or exhausted.
    LoadNext,
    /// Re-issue the page that just failed.
    Retry,
}

impl<T: Clone> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ListAction::Reset => Rc::new(self.reset()),
            ListAction::FetchStarted => Rc::new(Self {
                status: FetchStatus::Loading,
                ..(*self).clone()
            }),
            ListAction::PageLoaded { epoch, page, items } => {
                if epoch != self.epoch {
                    return self;
                }
                let has_more = items.len() as u32 >= self.per_page;
                let accumulated = if page <= 1 {
                    items
                } else {
                    let mut all = self.items.clone();
                    all.extend(items);
                    all
                };
                Rc::new(Self {
                    items: accumulated,
                    has_more,
                    status: FetchStatus::Success,
                    ..(*self).clone()
                })
            }
            ListAction::FetchFailed { epoch, message } => {
                if epoch != self.epoch {
                    return self;
                }
                Rc::new(Self {
                    has_more: false,
                    status: FetchStatus::Failed(message),
                    ..(*self).clone()
                })
            }
            ListAction::LoadNext => {
                if self.status.is_loading() || !self.has_more {
                    return self;
                }
                Rc::new(Self {
                    page: self.page + 1,
                    ..(*self).clone()
                })
            }
            ListAction::Retry => match self.status {
                FetchStatus::Failed(_) => Rc::new(Self {
                    has_more: true,
                    status: FetchStatus::Idle,
                    attempt: self.attempt + 1,
                    ..(*self).clone()
                }),
                _ => self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<ListState<u32>>, action: ListAction<u32>) -> Rc<ListState<u32>> {
        state.reduce(action)
    }

    fn loaded(state: Rc<ListState<u32>>, page: u32, items: Vec<u32>) -> Rc<ListState<u32>> {
        let epoch = state.epoch;
        let state = dispatch(state, ListAction::FetchStarted);
        dispatch(state, ListAction::PageLoaded { epoch, page, items })
    }

    #[test]
    fn pages_accumulate_in_request_order() {
        let state = Rc::new(ListState::new(3));
        let state = loaded(state, 1, vec![1, 2, 3]);
        let state = dispatch(state, ListAction::LoadNext);
        let state = loaded(state, 2, vec![4, 5, 6]);
        let state = dispatch(state, ListAction::LoadNext);
        let state = loaded(state, 3, vec![7]);

        assert_eq!(state.items, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!state.has_more, "short page must exhaust the list");
        assert_eq!(state.status, FetchStatus::Success);
    }

    #[test]
    fn full_page_keeps_has_more_true() {
        let state = loaded(Rc::new(ListState::new(2)), 1, vec![1, 2]);
        assert!(state.has_more);
    }

    #[test]
    fn load_next_is_a_no_op_while_loading_or_exhausted() {
        let state = Rc::new(ListState::new(2));
        let loading = dispatch(state, ListAction::FetchStarted);
        let after = dispatch(loading.clone(), ListAction::LoadNext);
        assert_eq!(after.page, loading.page);

        let exhausted = loaded(Rc::new(ListState::new(2)), 1, vec![1]);
        assert!(!exhausted.has_more);
        let after = dispatch(exhausted.clone(), ListAction::LoadNext);
        assert_eq!(after.page, exhausted.page);
        assert_eq!(after.items, exhausted.items);
    }

    #[test]
    fn stale_epoch_completions_are_discarded() {
        let state = loaded(Rc::new(ListState::new(2)), 1, vec![1, 2]);
        let old_epoch = state.epoch;
        let state = dispatch(state, ListAction::Reset);
        assert!(state.items.is_empty());
        assert_eq!(state.page, 1);
        assert!(state.has_more);

        // The old key's in-flight request resolves late.
        let state = dispatch(
            state,
            ListAction::PageLoaded {
                epoch: old_epoch,
                page: 2,
                items: vec![9, 9],
            },
        );
        assert!(state.items.is_empty(), "stale page must not leak through");

        let state = dispatch(
            state,
            ListAction::FetchFailed {
                epoch: old_epoch,
                message: "late failure".to_string(),
            },
        );
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn merchant_scenario_two_pages_then_exhausted() {
        // per_page 10: page 1 returns 10, page 2 returns 4.
        let state = loaded(Rc::new(ListState::new(10)), 1, (1..=10).collect());
        assert!(state.has_more);
        let state = dispatch(state, ListAction::LoadNext);
        assert_eq!(state.page, 2);
        let state = loaded(state, 2, (11..=14).collect());

        assert_eq!(state.items.len(), 14);
        assert!(!state.has_more);
        let frozen = dispatch(state.clone(), ListAction::LoadNext);
        assert_eq!(frozen.page, state.page);
    }

    #[test]
    fn key_switch_resets_before_the_new_page_one() {
        let d1 = loaded(Rc::new(ListState::new(5)), 1, vec![1, 2, 3, 4, 5]);
        assert_eq!(d1.items.len(), 5);

        let d2 = dispatch(d1, ListAction::Reset);
        assert!(d2.items.is_empty());
        assert_eq!(d2.page, 1);
        assert!(d2.has_more);

        let d2 = loaded(d2, 1, vec![10, 11]);
        assert_eq!(d2.items, vec![10, 11]);
    }

    #[test]
    fn failure_keeps_items_and_retry_reissues_the_same_page() {
        let state = loaded(Rc::new(ListState::new(3)), 1, vec![1, 2, 3]);
        let state = dispatch(state, ListAction::LoadNext);
        let epoch = state.epoch;
        let state = dispatch(state, ListAction::FetchStarted);
        let state = dispatch(
            state,
            ListAction::FetchFailed {
                epoch,
                message: "Network error".to_string(),
            },
        );

        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.has_more);
        assert_eq!(state.status.error(), Some("Network error"));

        let retried = dispatch(state, ListAction::Retry);
        assert_eq!(retried.page, 2, "retry targets the identical page");
        assert!(retried.has_more);
        assert_eq!(retried.status, FetchStatus::Idle);
        assert_eq!(retried.attempt, 1);

        let done = loaded(retried, 2, vec![4]);
        assert_eq!(done.items, vec![1, 2, 3, 4]);
        assert!(!done.has_more, "short retry page recomputes has_more");
    }

    #[test]
    fn retry_outside_failure_does_nothing() {
        let state = loaded(Rc::new(ListState::new(2)), 1, vec![1, 2]);
        let after = dispatch(state.clone(), ListAction::Retry);
        assert_eq!(*after, *state);
    }

    #[test]
    fn page_one_reload_replaces_instead_of_appending() {
        let state = loaded(Rc::new(ListState::new(2)), 1, vec![1, 2]);
        let state = loaded(state, 1, vec![3, 4]);
        assert_eq!(state.items, vec![3, 4]);
    }
}
