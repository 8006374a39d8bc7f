use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use tokio::sync::Mutex;

use business::application::inventory::dispatcher::EventDispatcher;
use business::application::inventory::store::InventoryStore;
use business::domain::product::search::filter_by_name;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::inventory::dto::{EventResponse, ProductResponse, UiEventRequest, ViewResponse};
use crate::api::inventory::interaction::RequestInteraction;
use crate::api::tags::ApiTags;

pub struct InventoryApi {
    store: Arc<Mutex<InventoryStore>>,
    dispatcher: Arc<EventDispatcher>,
}

impl InventoryApi {
    pub fn new(store: Arc<Mutex<InventoryStore>>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { store, dispatcher }
    }
}

/// Inventory API
///
/// The page forwards its DOM events here and paints the returned view.
#[OpenApi]
impl InventoryApi {
    /// Current view
    ///
    /// Returns the table, form and button state as last left by an event.
    #[oai(path = "/api/view", method = "get", tag = "ApiTags::Inventory")]
    async fn get_view(&self) -> Json<ViewResponse> {
        let store = self.store.lock().await;
        Json(store.view().into())
    }

    /// Dispatch a UI event
    ///
    /// Delete and clear events sent without `confirmed` change nothing and
    /// return the prompt in `confirmation`. Validation failures come back in
    /// `alert` with status 200.
    #[oai(path = "/api/events", method = "post", tag = "ApiTags::Inventory")]
    async fn dispatch_event(&self, body: Json<UiEventRequest>) -> DispatchEventResponse {
        let event = match body.0.to_event() {
            Ok(event) => event,
            Err(message) => {
                return DispatchEventResponse::BadRequest(ErrorResponse::bad_event(message));
            }
        };
        let form = body.0.form.map(|f| f.into());
        let interaction = RequestInteraction::new(body.0.confirmed);

        let mut store = self.store.lock().await;
        let result = self
            .dispatcher
            .dispatch(&mut store, event, form, &interaction, &interaction)
            .await;

        match result {
            Ok(view) => {
                let (alert, confirmation) = interaction.into_parts();
                DispatchEventResponse::Ok(Json(EventResponse {
                    view: view.into(),
                    alert,
                    confirmation,
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DispatchEventResponse::BadRequest(json),
                    _ => DispatchEventResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns the stored records in insertion order, optionally filtered by
    /// a case-insensitive name search. Does not touch the page's filter.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Inventory")]
    async fn list_products(&self, search: Query<Option<String>>) -> Json<Vec<ProductResponse>> {
        let store = self.store.lock().await;
        let term = search.0.unwrap_or_default();
        let products = filter_by_name(store.products(), &term)
            .into_iter()
            .map(ProductResponse::from)
            .collect();
        Json(products)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DispatchEventResponse {
    #[oai(status = 200)]
    Ok(Json<EventResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
