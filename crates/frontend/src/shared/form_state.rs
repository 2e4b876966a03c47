//! Add/edit form state shared by the record dialogs.

use contracts::shared::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::system::auth::context::SessionContext;

/// Form signals plus the outcome of the last submit
pub struct FormViewModel<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    /// Id of the record being edited, `None` when adding
    pub editing_id: Option<i64>,
    pub error: RwSignal<Option<String>>,
    server_error: RwSignal<Option<ApiError>>,
    pub saving: RwSignal<bool>,
    session: Option<SessionContext>,
}

impl<F: Send + Sync + 'static> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormViewModel<F> {}

impl<F: Clone + Send + Sync + 'static> FormViewModel<F> {
    /// Must be created inside the owning component
    pub fn new(form: F, editing_id: Option<i64>) -> Self {
        Self {
            form: RwSignal::new(form),
            editing_id,
            error: RwSignal::new(None),
            server_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session: use_context::<SessionContext>(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Server message for a single input, shown next to it
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let server_error = self.server_error;
        Signal::derive(move || {
            server_error.with(|e| e.as_ref().and_then(|e| e.field_error(field)).map(str::to_string))
        })
    }

    /// Validates locally, then sends the form and calls `on_saved` on success
    pub fn submit<Fut>(
        &self,
        validate: impl Fn(&F) -> Result<(), String>,
        request: impl FnOnce(F, Option<i64>) -> Fut,
        on_saved: Callback<()>,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(msg) = validate(&current) {
            self.error.set(Some(msg));
            return;
        }

        let fut = request(current, self.editing_id);
        let (error, server_error, saving) = (self.error, self.server_error, self.saving);
        let session = self.session;
        saving.set(true);
        error.set(None);
        server_error.set(None);

        spawn_local(async move {
            let result = fut.await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::warn!("save failed: {}", e);
                    if e == ApiError::Unauthenticated {
                        if let Some(session) = session {
                            session.expire();
                        }
                    }
                    error.set(Some(format!("Gagal menyimpan: {}", e.user_message())));
                    server_error.set(Some(e));
                }
            }
        });
    }
}

/// State of a pending delete confirmation
#[derive(Clone, Copy)]
pub struct DeleteState {
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DeleteState {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.busy.set(false);
        self.error.set(None);
    }

    /// Runs the delete request; `on_done` fires only on success
    pub fn run<Fut>(&self, request: Fut, on_done: Callback<()>)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }
        let (busy, error) = (self.busy, self.error);
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            let result = request.await;
            busy.set(false);
            match result {
                Ok(()) => on_done.run(()),
                Err(e) => {
                    log::warn!("delete failed: {}", e);
                    error.set(Some(format!("Gagal menghapus: {}", e.user_message())));
                }
            }
        });
    }
}

impl Default for DeleteState {
    fn default() -> Self {
        Self::new()
    }
}
