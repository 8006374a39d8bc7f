use std::fmt::Write;

use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::session::{Affordances, FormMode};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// One displayed table row. Values are raw; escaping happens when the row is
/// turned into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position in the rendered list, not in the stored list.
    pub sequence: usize,
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub quantity: u64,
    /// Two-digit price prefixed with the currency symbol, e.g. "$2.50".
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// True when the empty-state indicator should be shown instead of rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Markup for the table body. Empty when there is nothing to show.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            let id = escape_html(row.id.as_str());
            // Writing into a String cannot fail.
            let _ = write!(
                html,
                "<tr>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td><div class=\"action-buttons\">\
                 <button class=\"btn-edit\" data-action=\"edit\" data-id=\"{id}\">Edit</button>\
                 <button class=\"btn-delete\" data-action=\"delete\" data-id=\"{id}\">Delete</button>\
                 </div></td>\
                 </tr>",
                row.sequence,
                escape_html(&row.name),
                escape_html(&row.brand),
                row.quantity,
                escape_html(&row.price),
            );
        }
        html
    }
}

/// Projects records onto table rows, numbered in the order given.
pub fn render<'a, I>(records: I, currency_symbol: &str) -> TableView
where
    I: IntoIterator<Item = &'a Product>,
{
    let rows = records
        .into_iter()
        .enumerate()
        .map(|(index, product)| TableRow {
            sequence: index + 1,
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            quantity: product.quantity.value(),
            price: format!("{}{}", currency_symbol, product.price.formatted()),
        })
        .collect();

    TableView { rows }
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Everything a host needs to paint the page after an event.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView {
    pub table: TableView,
    pub form: ProductForm,
    pub mode: FormMode,
    pub affordances: Affordances,
    pub editing: Option<ProductId>,
    /// Active filter, if the table shows search results.
    pub search_term: Option<String>,
    /// Size of the stored list, independent of any filter.
    pub total: usize,
}
