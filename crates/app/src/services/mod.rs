//! Thin data layer between pages and server functions.
//!
//! Lists are `use_resource` wrappers whose `.restart()` is the refresh
//! mechanism after a mutation. Mutations go through [`use_mutation`],
//! which owns the pending flag and converts transport errors back into
//! structured `AppError`s.

pub mod clients;
pub mod orders;
pub mod recipes;

use dioxus::prelude::*;
use shared_types::AppError;
use std::future::Future;

/// Recover the structured error a server function serialized, falling
/// back to a generic internal error with a friendly message.
pub(crate) fn map_server_error(err: ServerFnError) -> AppError {
    let raw = err.to_string();
    AppError::from_server_error(&raw)
        .unwrap_or_else(|| AppError::internal(AppError::friendly_message(&raw)))
}

/// Handle returned by [`use_mutation`]: call `mutate` with the payload,
/// read `is_pending` to disable buttons while the call is in flight.
pub struct MutationHandle<P: 'static> {
    pending: Signal<bool>,
    runner: Callback<P>,
}

impl<P> MutationHandle<P> {
    pub fn mutate(&self, payload: P) {
        self.runner.call(payload);
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }
}

impl<P> Clone for MutationHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for MutationHandle<P> {}

/// Generic mutation hook. No retries, no optimistic updates — callers
/// refresh their list resource in `on_success`.
pub fn use_mutation<P, T, Fut>(
    op: impl Fn(P) -> Fut + Clone + 'static,
    on_success: impl FnMut(T) + Clone + 'static,
    on_error: impl FnMut(AppError) + Clone + 'static,
) -> MutationHandle<P>
where
    P: 'static,
    T: 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let mut pending = use_signal(|| false);

    let runner = use_callback(move |payload: P| {
        let op = op.clone();
        let mut on_success = on_success.clone();
        let mut on_error = on_error.clone();

        pending.set(true);
        spawn(async move {
            match op(payload).await {
                Ok(value) => on_success(value),
                Err(err) => on_error(map_server_error(err)),
            }
            pending.set(false);
        });
    });

    MutationHandle { pending, runner }
}
