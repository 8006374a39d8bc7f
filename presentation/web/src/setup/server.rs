use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn app(container: DependencyContainer, server_url: &str) -> impl Endpoint + 'static {
        let api_service = OpenApiService::new(
            (
                container.page_api,
                container.health_api,
                container.inventory_api,
            ),
            "Inventory Manager",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", api_service)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::json;

    use business::domain::inventory::services::{CLEAR_ALL_PROMPT, DELETE_PROMPT};
    use persistence::product::repository::ProductRepositoryKeyValue;
    use persistence::storage::{DEFAULT_STORAGE_KEY, InMemoryKeyValueStore, KeyValueStore};

    use super::*;

    async fn client_with(store: Arc<InMemoryKeyValueStore>) -> TestClient<impl Endpoint> {
        let repository = Arc::new(ProductRepositoryKeyValue::new(store, DEFAULT_STORAGE_KEY));
        let container = DependencyContainer::with_repository(repository, "$")
            .await
            .unwrap();
        TestClient::new(Server::app(container, "http://localhost"))
    }

    async fn client() -> TestClient<impl Endpoint> {
        client_with(Arc::new(InMemoryKeyValueStore::new())).await
    }

    fn add_event(name: &str, brand: &str, quantity: &str, price: &str) -> serde_json::Value {
        json!({
            "kind": "click",
            "target": "addBtn",
            "form": {"name": name, "brand": brand, "quantity": quantity, "price": price}
        })
    }

    #[tokio::test]
    async fn should_serve_page_with_element_ids() {
        let cli = client().await;

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        let body = resp.0.into_body().into_string().await.unwrap();
        for id in [
            "productName",
            "productBrand",
            "productQuantity",
            "productPrice",
            "searchInput",
            "addBtn",
            "updateBtn",
            "cancelBtn",
            "resetBtn",
            "clearAllBtn",
            "clearInventoryBtn",
            "inventoryBody",
            "emptyMessage",
        ] {
            assert!(body.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
    }

    #[tokio::test]
    async fn should_report_health() {
        let cli = client().await;

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
        json.value().object().get("products").assert_i64(0);
    }

    #[tokio::test]
    async fn should_start_with_empty_view() {
        let cli = client().await;

        let resp = cli.get("/api/view").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let view = json.value().object();
        view.get("empty").assert_bool(true);
        view.get("mode").assert_string("add");
        view.get("show_add_button").assert_bool(true);
        view.get("show_update_button").assert_bool(false);
        view.get("total").assert_i64(0);
    }

    #[tokio::test]
    async fn should_add_product_and_persist_it() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let cli = client_with(store.clone()).await;

        let resp = cli
            .post("/api/events")
            .body_json(&add_event("Widget", "Acme", "10", "2.5"))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let view = json.value().object().get("view").object();
        view.get("total").assert_i64(1);
        view.get("empty").assert_bool(false);
        let row = view.get("rows").array().get(0).object();
        row.get("name").assert_string("Widget");
        row.get("price").assert_string("$2.50");

        let saved = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert!(saved.contains("\"price\":\"2.50\""));
    }

    #[tokio::test]
    async fn should_return_alert_for_invalid_form() {
        let cli = client().await;

        let resp = cli
            .post("/api/events")
            .body_json(&add_event("Widget", "Acme", "-1", "2"))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value()
            .object()
            .get("alert")
            .assert_string("Quantity and price must be positive numbers");
        json.value()
            .object()
            .get("view")
            .object()
            .get("total")
            .assert_i64(0);
    }

    #[tokio::test]
    async fn should_ask_for_confirmation_before_delete() {
        let cli = client().await;
        cli.post("/api/events")
            .body_json(&add_event("Widget", "Acme", "10", "2.5"))
            .send()
            .await
            .assert_status_is_ok();
        let products = cli.get("/api/products").send().await.json().await;
        let id = products
            .value()
            .array()
            .get(0)
            .object()
            .get("id")
            .string()
            .to_string();

        let pending = cli
            .post("/api/events")
            .body_json(&json!({"kind": "delete_row", "product_id": id}))
            .send()
            .await
            .json()
            .await;
        pending
            .value()
            .object()
            .get("confirmation")
            .assert_string(DELETE_PROMPT);
        pending
            .value()
            .object()
            .get("view")
            .object()
            .get("total")
            .assert_i64(1);

        let confirmed = cli
            .post("/api/events")
            .body_json(&json!({"kind": "delete_row", "product_id": id, "confirmed": true}))
            .send()
            .await
            .json()
            .await;
        confirmed
            .value()
            .object()
            .get("view")
            .object()
            .get("empty")
            .assert_bool(true);
    }

    #[tokio::test]
    async fn should_clear_all_after_confirmation() {
        let cli = client().await;
        for name in ["Widget", "Gadget"] {
            cli.post("/api/events")
                .body_json(&add_event(name, "Acme", "1", "1"))
                .send()
                .await
                .assert_status_is_ok();
        }

        let pending = cli
            .post("/api/events")
            .body_json(&json!({"kind": "click", "target": "clearAllBtn"}))
            .send()
            .await
            .json()
            .await;
        pending
            .value()
            .object()
            .get("confirmation")
            .assert_string(CLEAR_ALL_PROMPT);

        cli.post("/api/events")
            .body_json(&json!({"kind": "click", "target": "clearInventoryBtn", "confirmed": true}))
            .send()
            .await
            .assert_status_is_ok();

        let view = cli.get("/api/view").send().await.json().await;
        view.value().object().get("total").assert_i64(0);
    }

    #[tokio::test]
    async fn should_filter_products_by_query() {
        let cli = client().await;
        for name in ["Widget", "Gadget"] {
            cli.post("/api/events")
                .body_json(&add_event(name, "Acme", "1", "1"))
                .send()
                .await
                .assert_status_is_ok();
        }

        let resp = cli
            .get("/api/products")
            .query("search", &"WID")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let products = json.value().array();
        products.assert_len(1);
        products.get(0).object().get("name").assert_string("Widget");
    }

    #[tokio::test]
    async fn should_reject_unknown_target() {
        let cli = client().await;

        let resp = cli
            .post("/api/events")
            .body_json(&json!({"kind": "click", "target": "launchBtn"}))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_fail_to_start_on_corrupted_slot() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(DEFAULT_STORAGE_KEY, "{\"not\":\"a list\"}").unwrap();
        let repository = Arc::new(ProductRepositoryKeyValue::new(store, DEFAULT_STORAGE_KEY));

        let result = DependencyContainer::with_repository(repository, "$").await;

        assert!(result.is_err());
    }
}
