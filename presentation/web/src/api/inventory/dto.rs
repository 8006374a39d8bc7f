use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::inventory::events::{ElementId, UiEvent};
use business::domain::inventory::session::FormMode;
use business::domain::inventory::view::{InventoryView, TableRow};
use business::domain::product::form::ProductForm;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum EventKindDto {
    #[oai(rename = "click")]
    Click,
    #[oai(rename = "input")]
    Input,
    #[oai(rename = "keypress")]
    KeyPress,
    #[oai(rename = "edit_row")]
    EditRow,
    #[oai(rename = "delete_row")]
    DeleteRow,
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum FormModeDto {
    #[oai(rename = "add")]
    Add,
    #[oai(rename = "edit")]
    Edit,
}

impl From<FormMode> for FormModeDto {
    fn from(mode: FormMode) -> Self {
        match mode {
            FormMode::Add => FormModeDto::Add,
            FormMode::Edit => FormModeDto::Edit,
        }
    }
}

#[derive(Debug, Clone, Default, Object)]
pub struct ProductFormDto {
    /// Product name input
    #[oai(default)]
    pub name: String,
    /// Brand input
    #[oai(default)]
    pub brand: String,
    /// Quantity input, as typed
    #[oai(default)]
    pub quantity: String,
    /// Price input, as typed
    #[oai(default)]
    pub price: String,
}

impl From<ProductFormDto> for ProductForm {
    fn from(dto: ProductFormDto) -> Self {
        ProductForm::new(dto.name, dto.brand, dto.quantity, dto.price)
    }
}

impl From<ProductForm> for ProductFormDto {
    fn from(form: ProductForm) -> Self {
        Self {
            name: form.name,
            brand: form.brand,
            quantity: form.quantity,
            price: form.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UiEventRequest {
    /// Kind of DOM event
    pub kind: EventKindDto,
    /// Element id for click, input and keypress events
    #[oai(skip_serializing_if_is_none)]
    pub target: Option<String>,
    /// Input value for input events
    #[oai(skip_serializing_if_is_none)]
    pub value: Option<String>,
    /// Key name for keypress events
    #[oai(skip_serializing_if_is_none)]
    pub key: Option<String>,
    /// Row product id for edit_row and delete_row events
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<String>,
    /// Current content of the form inputs
    #[oai(skip_serializing_if_is_none)]
    pub form: Option<ProductFormDto>,
    /// Answer to a confirmation prompt returned by a previous call
    #[oai(skip_serializing_if_is_none)]
    pub confirmed: Option<bool>,
}

impl UiEventRequest {
    fn target(&self) -> Result<ElementId, String> {
        self.target
            .as_deref()
            .ok_or_else(|| "event.target_missing".to_string())?
            .parse::<ElementId>()
            .map_err(|_| "event.target_unknown".to_string())
    }

    fn product_id(&self) -> Result<ProductId, String> {
        self.product_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(ProductId::from)
            .ok_or_else(|| "event.product_id_missing".to_string())
    }

    /// Builds the domain event; the error is a code-style message.
    pub fn to_event(&self) -> Result<UiEvent, String> {
        let event = match self.kind {
            EventKindDto::Click => UiEvent::Click(self.target()?),
            EventKindDto::Input => UiEvent::Input {
                target: self.target()?,
                value: self.value.clone().unwrap_or_default(),
            },
            EventKindDto::KeyPress => UiEvent::KeyPress {
                target: self.target()?,
                key: self.key.clone().unwrap_or_default(),
            },
            EventKindDto::EditRow => UiEvent::EditRow(self.product_id()?),
            EventKindDto::DeleteRow => UiEvent::DeleteRow(self.product_id()?),
        };
        Ok(event)
    }
}

#[derive(Debug, Clone, Object)]
pub struct TableRowResponse {
    /// 1-based position in the displayed table
    pub sequence: u64,
    /// Product unique identifier
    pub id: String,
    /// Product name (raw, not escaped)
    pub name: String,
    /// Brand (raw, not escaped)
    pub brand: String,
    /// Units in stock
    pub quantity: u64,
    /// Price with currency symbol, e.g. "$2.50"
    pub price: String,
}

impl From<TableRow> for TableRowResponse {
    fn from(row: TableRow) -> Self {
        Self {
            sequence: row.sequence as u64,
            id: row.id.to_string(),
            name: row.name,
            brand: row.brand,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ViewResponse {
    /// Displayed rows
    pub rows: Vec<TableRowResponse>,
    /// Escaped table body markup, ready to insert
    pub table_html: String,
    /// Whether the empty-state indicator is shown
    pub empty: bool,
    /// Current form inputs
    pub form: ProductFormDto,
    /// Form mode
    pub mode: FormModeDto,
    pub show_add_button: bool,
    pub show_update_button: bool,
    pub show_cancel_button: bool,
    /// Id of the record being edited
    #[oai(skip_serializing_if_is_none)]
    pub editing_id: Option<String>,
    /// Active search filter
    #[oai(skip_serializing_if_is_none)]
    pub search_term: Option<String>,
    /// Number of stored records, ignoring any filter
    pub total: u64,
}

impl From<InventoryView> for ViewResponse {
    fn from(view: InventoryView) -> Self {
        Self {
            table_html: view.table.to_html(),
            empty: view.table.is_empty(),
            rows: view.table.rows.into_iter().map(|r| r.into()).collect(),
            form: view.form.into(),
            mode: view.mode.into(),
            show_add_button: view.affordances.add,
            show_update_button: view.affordances.update,
            show_cancel_button: view.affordances.cancel,
            editing_id: view.editing.map(|id| id.to_string()),
            search_term: view.search_term,
            total: view.total as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct EventResponse {
    /// View to paint after the event
    pub view: ViewResponse,
    /// Validation message to show in an alert
    #[oai(skip_serializing_if_is_none)]
    pub alert: Option<String>,
    /// Prompt to confirm; re-send the event with `confirmed` set to apply it
    #[oai(skip_serializing_if_is_none)]
    pub confirmation: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Brand
    pub brand: String,
    /// Units in stock
    pub quantity: u64,
    /// Price with two fraction digits
    pub price: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            quantity: product.quantity.value(),
            price: product.price.formatted(),
        }
    }
}
