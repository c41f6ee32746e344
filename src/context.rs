//! Fields carried by the current task.
//!
//! A [`FieldContext`] is installed for the duration of a future with
//! [`scope`] (or a closure with [`sync_scope`]) and read back anywhere below
//! it with [`current`] / [`current_fields`]. Tasks spawned from inside a scope
//! start without one; pass the context along explicitly.

use std::future::Future;
use std::sync::Arc;

use crate::field::Field;
use crate::logger::Logger;

tokio::task_local! {
    static CONTEXT: FieldContext;
}

/// An immutable, shared list of fields.
#[derive(Debug, Clone)]
pub struct FieldContext {
    fields: Arc<[Field]>,
}

impl Default for FieldContext {
    fn default() -> Self {
        Self {
            fields: Arc::from(Vec::new()),
        }
    }
}

impl FieldContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new context carrying the existing fields followed by `fields`.
    pub fn with_fields(&self, fields: &[Field]) -> Self {
        if fields.is_empty() {
            return self.clone();
        }
        let mut extended = Vec::with_capacity(self.fields.len() + fields.len());
        extended.extend_from_slice(&self.fields);
        extended.extend_from_slice(fields);
        Self {
            fields: extended.into(),
        }
    }

    /// A copy of the carried fields.
    pub fn fields(&self) -> Vec<Field> {
        self.fields.to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Runs `future` with `ctx` as the current context.
pub async fn scope<F: Future>(ctx: FieldContext, future: F) -> F::Output {
    CONTEXT.scope(ctx, future).await
}

/// Runs `f` with `ctx` as the current context.
pub fn sync_scope<R>(ctx: FieldContext, f: impl FnOnce() -> R) -> R {
    CONTEXT.sync_scope(ctx, f)
}

/// The current context, empty outside any scope.
pub fn current() -> FieldContext {
    CONTEXT.try_with(FieldContext::clone).unwrap_or_default()
}

/// A copy of the current context's fields.
pub fn current_fields() -> Vec<Field> {
    CONTEXT.try_with(FieldContext::fields).unwrap_or_default()
}

/// Runs `future` in the current context extended by `fields`.
///
/// The context is captured when this is called, not when the future is
/// first polled.
pub fn with_fields<F: Future>(fields: &[Field], future: F) -> impl Future<Output = F::Output> {
    let ctx = current().with_fields(fields);
    CONTEXT.scope(ctx, future)
}

impl Logger {
    /// Appends the current context's fields to the logger.
    pub fn with_context_fields(self) -> Self {
        let fields = current_fields();
        self.with_fields(&fields)
    }
}
