use std::sync::Arc;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::events::{Command, EventBindings, UiEvent};
use crate::domain::inventory::services::{Confirmer, Notifier};
use crate::domain::inventory::view::InventoryView;
use crate::domain::logger::Logger;
use crate::domain::product::form::ProductForm;

use super::store::InventoryStore;

/// Routes UI events to store operations through the binding table.
///
/// Validation failures are reported through the [`Notifier`] and do not count
/// as errors; only persistence failures are returned.
pub struct EventDispatcher {
    pub bindings: EventBindings,
    pub logger: Arc<dyn Logger>,
}

impl EventDispatcher {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            bindings: EventBindings::default(),
            logger,
        }
    }

    /// Handles one event to completion and returns the view to paint.
    ///
    /// `form` is the current content of the four inputs, when the host sent it.
    pub async fn dispatch(
        &self,
        store: &mut InventoryStore,
        event: UiEvent,
        form: Option<ProductForm>,
        confirmer: &dyn Confirmer,
        notifier: &dyn Notifier,
    ) -> Result<InventoryView, InventoryError> {
        let Some(command) = self.bindings.resolve(&event) else {
            self.logger
                .debug(&format!("No binding for event: {:?}", event));
            return Ok(store.view());
        };
        self.logger.debug(&format!("Dispatching {:?}", command));

        if let Some(form) = form {
            store.set_form(form);
        }
        let current = store.form().clone();

        let result = match command {
            Command::Add => store.add(current).await.map(|_| ()),
            Command::Update => store.update(current).await.map(|_| ()),
            Command::SubmitCurrentMode => store.submit_current_mode(current).await.map(|_| ()),
            Command::CancelEdit => {
                store.cancel_edit();
                Ok(())
            }
            Command::ResetForm => {
                store.reset_form();
                Ok(())
            }
            Command::ClearAll => store.clear_all(confirmer).await.map(|_| ()),
            Command::Search(term) => {
                store.search(&term);
                Ok(())
            }
            Command::BeginEdit(id) => {
                store.begin_edit(&id);
                Ok(())
            }
            Command::Delete(id) => store.delete(&id, confirmer).await.map(|_| ()),
        };

        match result {
            Ok(()) => Ok(store.view()),
            Err(InventoryError::Validation(e)) => {
                notifier.alert(e.user_message());
                Ok(store.view())
            }
            Err(e) => Err(e),
        }
    }
}
