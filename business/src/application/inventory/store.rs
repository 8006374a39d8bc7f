use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::services::{CLEAR_ALL_PROMPT, Confirmer, DELETE_PROMPT};
use crate::domain::inventory::session::{EditSession, FormMode};
use crate::domain::inventory::view::{self, InventoryView, TableView};
use crate::domain::logger::Logger;
use crate::domain::product::form::ProductForm;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::filter_by_name;
use crate::domain::product::value_objects::ProductId;

/// Result of a confirmed destructive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The user confirmed; this many records were removed.
    Removed(usize),
    /// The user confirmed but the id was not in the list.
    NotFound,
    /// The user declined; nothing changed.
    Declined,
}

/// Owns the product list, the editing session and the form.
///
/// Every mutation writes the whole candidate list to the repository first and
/// only then replaces the in-memory list, so both always agree.
pub struct InventoryStore {
    products: Vec<Product>,
    session: EditSession,
    form: ProductForm,
    filter: Option<String>,
    currency_symbol: String,
    repository: Arc<dyn ProductRepository>,
    logger: Arc<dyn Logger>,
}

impl InventoryStore {
    /// Reads the persisted list once and builds a store in add mode.
    pub async fn load(
        repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
        currency_symbol: impl Into<String>,
    ) -> Result<Self, RepositoryError> {
        let products = repository.load_all().await?;
        logger.info(&format!("Loaded {} products", products.len()));

        Ok(Self {
            products,
            session: EditSession::default(),
            form: ProductForm::default(),
            filter: None,
            currency_symbol: currency_symbol.into(),
            repository,
            logger,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn editing(&self) -> Option<&ProductId> {
        self.session.current()
    }

    pub fn mode(&self) -> FormMode {
        self.session.mode()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Records what the user currently has typed into the form.
    pub fn set_form(&mut self, form: ProductForm) {
        self.form = form;
    }

    async fn persist(&mut self, candidate: Vec<Product>) -> Result<(), InventoryError> {
        if let Err(e) = self.repository.replace_all(&candidate).await {
            self.logger
                .error(&format!("Failed to persist product list: {}", e));
            return Err(e.into());
        }
        self.products = candidate;
        Ok(())
    }

    fn reject(&self, operation: &str, error: InventoryError) -> InventoryError {
        self.logger
            .warn(&format!("Rejected {} input: {}", operation, error));
        error
    }

    pub async fn add(&mut self, form: ProductForm) -> Result<Product, InventoryError> {
        self.form = form;
        let details = self
            .form
            .validate()
            .map_err(|e| self.reject("add", e.into()))?;

        let product = Product::new(details);
        self.logger
            .info(&format!("Adding product: {}", product.id));

        let mut candidate = self.products.clone();
        candidate.push(product.clone());
        self.persist(candidate).await?;

        self.form = ProductForm::default();
        self.filter = None;
        self.logger.info(&format!("Product added: {}", product.id));
        Ok(product)
    }

    /// Returns `Ok(None)` when there is no session or the edited record is gone.
    pub async fn update(&mut self, form: ProductForm) -> Result<Option<Product>, InventoryError> {
        self.form = form;
        let details = self
            .form
            .validate()
            .map_err(|e| self.reject("update", e.into()))?;

        let Some(id) = self.session.current().cloned() else {
            self.logger.debug("Update requested outside an editing session");
            return Ok(None);
        };

        let Some(index) = self.products.iter().position(|product| product.id == id) else {
            self.logger
                .warn(&format!("Edited product no longer exists: {}", id));
            return Ok(None);
        };

        self.logger.info(&format!("Updating product: {}", id));
        let mut candidate = self.products.clone();
        candidate[index].apply(details);
        let updated = candidate[index].clone();
        self.persist(candidate).await?;

        self.session.end();
        self.form = ProductForm::default();
        self.filter = None;
        self.logger.info(&format!("Product updated: {}", id));
        Ok(Some(updated))
    }

    /// Enter key in the form: update while editing, add otherwise.
    pub async fn submit_current_mode(
        &mut self,
        form: ProductForm,
    ) -> Result<Option<Product>, InventoryError> {
        match self.mode() {
            FormMode::Edit => self.update(form).await,
            FormMode::Add => self.add(form).await.map(Some),
        }
    }

    /// Loads a record into the form. A session already in progress is
    /// replaced without prompting.
    pub fn begin_edit(&mut self, id: &ProductId) -> bool {
        let Some(product) = self.find(id) else {
            self.logger
                .debug(&format!("Cannot edit unknown product: {}", id));
            return false;
        };

        let form = ProductForm::from_product(product);
        if let Some(previous) = self.session.begin(id.clone())
            && &previous != id
        {
            self.logger
                .warn(&format!("Abandoning edit of {} to edit {}", previous, id));
        }
        self.form = form;
        self.logger.info(&format!("Editing product: {}", id));
        true
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.session.end() {
            self.logger.info(&format!("Cancelled edit of {}", id));
        }
        self.form = ProductForm::default();
    }

    /// Clears the inputs; the editing session, if any, stays active.
    pub fn reset_form(&mut self) {
        self.form = ProductForm::default();
    }

    pub async fn delete(
        &mut self,
        id: &ProductId,
        confirmer: &dyn Confirmer,
    ) -> Result<Removal, InventoryError> {
        if !confirmer.confirm(DELETE_PROMPT) {
            return Ok(Removal::Declined);
        }

        let candidate: Vec<Product> = self
            .products
            .iter()
            .filter(|product| &product.id != id)
            .cloned()
            .collect();
        let removed = self.products.len() - candidate.len();
        if removed == 0 {
            self.logger
                .debug(&format!("Nothing to delete for id: {}", id));
            return Ok(Removal::NotFound);
        }

        self.logger.info(&format!("Deleting product: {}", id));
        self.persist(candidate).await?;
        self.filter = None;
        self.logger.info(&format!("Product deleted: {}", id));
        Ok(Removal::Removed(removed))
    }

    pub async fn clear_all(&mut self, confirmer: &dyn Confirmer) -> Result<Removal, InventoryError> {
        if !confirmer.confirm(CLEAR_ALL_PROMPT) {
            return Ok(Removal::Declined);
        }

        let count = self.products.len();
        self.logger.info("Clearing all products");
        self.persist(Vec::new()).await?;
        self.filter = None;
        self.logger.info(&format!("Cleared {} products", count));
        Ok(Removal::Removed(count))
    }

    /// Shows only records whose name contains `term`; the stored list is untouched.
    pub fn search(&mut self, term: &str) -> TableView {
        self.filter = Some(term.to_string());
        self.render()
    }

    /// Table for the current display: search results while a filter is active,
    /// the full list otherwise.
    pub fn render(&self) -> TableView {
        match &self.filter {
            Some(term) => view::render(filter_by_name(&self.products, term), &self.currency_symbol),
            None => view::render(&self.products, &self.currency_symbol),
        }
    }

    pub fn view(&self) -> InventoryView {
        let mode = self.mode();
        InventoryView {
            table: self.render(),
            form: self.form.clone(),
            mode,
            affordances: mode.into(),
            editing: self.session.current().cloned(),
            search_term: self.filter.clone(),
            total: self.products.len(),
        }
    }
}
