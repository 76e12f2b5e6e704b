use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use shared::PageQuery;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use super::list_state::{ListAction, ListState};
use crate::services::api::FetchError;
use crate::services::logging::Logger;

pub type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, FetchError>>>>;

/// The one-page fetch a list instance delegates to. Implementations must
/// honor the abort signal; a cancelled request resolves as
/// [`FetchError::Cancelled`] and is dropped without touching state.
pub struct PageFetcher<F, T> {
    run: Rc<dyn Fn(F, PageQuery, Option<AbortSignal>) -> PageFuture<T>>,
}

impl<F, T> Clone for PageFetcher<F, T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<F, T> PageFetcher<F, T> {
    pub fn new<Fut>(run: impl Fn(F, PageQuery, Option<AbortSignal>) -> Fut + 'static) -> Self
    where
        Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
    {
        Self {
            run: Rc::new(move |filter, query, signal| Box::pin(run(filter, query, signal))),
        }
    }

    fn fetch(&self, filter: F, query: PageQuery, signal: Option<AbortSignal>) -> PageFuture<T> {
        (self.run)(filter, query, signal)
    }
}

pub struct UsePaginatedListResult<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub has_more: bool,
    pub error: Option<String>,
    pub load_next: Callback<()>,
    pub refresh: Callback<()>,
    pub retry: Callback<()>,
}

/// Pagination controller for one remote collection.
///
/// Owns the accumulated items, the current page and the single in-flight
/// request for one `filter` value. When the filter's identity changes the
/// controller aborts any in-flight request, clears the list and fetches
/// page 1 for the new identity; stale responses are discarded by epoch.
#[hook]
pub fn use_paginated_list<F, T>(
    filter: F,
    per_page: u32,
    fetcher: PageFetcher<F, T>,
) -> UsePaginatedListResult<T>
where
    F: Clone + PartialEq + 'static,
    T: Clone + 'static,
{
    let state = use_reducer(|| ListState::<T>::new(per_page));
    let inflight = use_mut_ref(|| Option::<AbortController>::None);
    let last_filter = use_mut_ref(|| Option::<F>::None);

    {
        let state = state.clone();
        let inflight = inflight.clone();
        let last_filter = last_filter.clone();
        let fetcher = fetcher.clone();
        let deps = (filter, state.page, state.epoch, state.attempt);

        use_effect_with(deps, move |(filter, page, epoch, _attempt)| {
            // Explicit previous-vs-current identity comparison: a changed
            // filter resets first; the epoch bump re-runs this effect and
            // issues exactly one page-1 request for the new identity.
            let filter_changed = last_filter.borrow().as_ref() != Some(filter);
            if filter_changed {
                *last_filter.borrow_mut() = Some(filter.clone());
                if let Some(controller) = inflight.borrow_mut().take() {
                    controller.abort();
                }
                state.dispatch(ListAction::Reset);
                return Box::new(|| {}) as Box<dyn FnOnce()>;
            }

            state.dispatch(ListAction::FetchStarted);

            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(AbortController::signal);
            *inflight.borrow_mut() = controller.clone();

            let query = PageQuery {
                page: *page,
                per_page,
            };
            let future = fetcher.fetch(filter.clone(), query, signal);
            let epoch = *epoch;
            let page = *page;
            let state = state.clone();

            spawn_local(async move {
                match future.await {
                    Ok(items) => state.dispatch(ListAction::PageLoaded { epoch, page, items }),
                    Err(error) if error.is_cancelled() => {
                        // Caller-initiated abort; silently dropped.
                    }
                    Err(error) => {
                        Logger::warn_with_component(
                            "pagination",
                            &format!("page {page} failed: {error}"),
                        );
                        state.dispatch(ListAction::FetchFailed {
                            epoch,
                            message: error.to_string(),
                        });
                    }
                }
            });

            Box::new(move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }) as Box<dyn FnOnce()>
        });
    }

    let load_next = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ListAction::LoadNext))
    };
    let refresh = {
        let state = state.clone();
        let inflight = inflight.clone();
        Callback::from(move |_| {
            if let Some(controller) = inflight.borrow_mut().take() {
                controller.abort();
            }
            state.dispatch(ListAction::Reset);
        })
    };
    let retry = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ListAction::Retry))
    };

    UsePaginatedListResult {
        items: state.items.clone(),
        is_loading: state.status.is_loading(),
        has_more: state.has_more,
        error: state.status.error().map(str::to_string),
        load_next,
        refresh,
        retry,
    }
}
