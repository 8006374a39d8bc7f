use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// Serves the inventory page.
pub struct PageApi;

impl PageApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl PageApi {
    /// Inventory page
    #[oai(path = "/", method = "get", tag = "ApiTags::Page")]
    async fn index(&self) -> Html<&'static str> {
        Html(INDEX_HTML)
    }
}
