use crate::domain::product::value_objects::ProductId;

pub const ENTER_KEY: &str = "Enter";

/// Fixed identifiers of the page elements the store reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    ProductName,
    ProductBrand,
    ProductQuantity,
    ProductPrice,
    SearchInput,
    AddButton,
    UpdateButton,
    CancelButton,
    ResetButton,
    ClearAllButton,
    ClearInventoryButton,
}

impl ElementId {
    pub const FORM_INPUTS: [ElementId; 4] = [
        ElementId::ProductName,
        ElementId::ProductBrand,
        ElementId::ProductQuantity,
        ElementId::ProductPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::ProductName => "productName",
            ElementId::ProductBrand => "productBrand",
            ElementId::ProductQuantity => "productQuantity",
            ElementId::ProductPrice => "productPrice",
            ElementId::SearchInput => "searchInput",
            ElementId::AddButton => "addBtn",
            ElementId::UpdateButton => "updateBtn",
            ElementId::CancelButton => "cancelBtn",
            ElementId::ResetButton => "resetBtn",
            ElementId::ClearAllButton => "clearAllBtn",
            ElementId::ClearInventoryButton => "clearInventoryBtn",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ElementId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productName" => Ok(ElementId::ProductName),
            "productBrand" => Ok(ElementId::ProductBrand),
            "productQuantity" => Ok(ElementId::ProductQuantity),
            "productPrice" => Ok(ElementId::ProductPrice),
            "searchInput" => Ok(ElementId::SearchInput),
            "addBtn" => Ok(ElementId::AddButton),
            "updateBtn" => Ok(ElementId::UpdateButton),
            "cancelBtn" => Ok(ElementId::CancelButton),
            "resetBtn" => Ok(ElementId::ResetButton),
            "clearAllBtn" => Ok(ElementId::ClearAllButton),
            "clearInventoryBtn" => Ok(ElementId::ClearInventoryButton),
            _ => Err(format!("Invalid element id: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    KeyPress,
}

/// A user-interface event as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ElementId),
    Input { target: ElementId, value: String },
    KeyPress { target: ElementId, key: String },
    /// Edit button of a table row.
    EditRow(ProductId),
    /// Delete button of a table row.
    DeleteRow(ProductId),
}

/// What a bound element triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    SubmitCurrentMode,
    CancelEdit,
    ResetForm,
    ClearAll,
    Search,
}

/// A resolved store operation, with the data the event carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Update,
    SubmitCurrentMode,
    CancelEdit,
    ResetForm,
    ClearAll,
    Search(String),
    BeginEdit(ProductId),
    Delete(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub kind: EventKind,
    pub target: ElementId,
    pub action: Action,
}

/// Declarative event-to-operation table.
#[derive(Debug, Clone)]
pub struct EventBindings {
    bindings: Vec<Binding>,
}

impl EventBindings {
    /// A table with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind(mut self, kind: EventKind, target: ElementId, action: Action) -> Self {
        self.bindings.push(Binding {
            kind,
            target,
            action,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    fn lookup(&self, kind: EventKind, target: ElementId) -> Option<Action> {
        self.bindings
            .iter()
            .find(|binding| binding.kind == kind && binding.target == target)
            .map(|binding| binding.action)
    }

    /// Maps an event to the command it triggers. Row actions are always bound;
    /// key presses only count for the Enter key.
    pub fn resolve(&self, event: &UiEvent) -> Option<Command> {
        let (action, value) = match event {
            UiEvent::EditRow(id) => return Some(Command::BeginEdit(id.clone())),
            UiEvent::DeleteRow(id) => return Some(Command::Delete(id.clone())),
            UiEvent::Click(target) => (self.lookup(EventKind::Click, *target)?, None),
            UiEvent::Input { target, value } => {
                (self.lookup(EventKind::Input, *target)?, Some(value))
            }
            UiEvent::KeyPress { target, key } => {
                if key != ENTER_KEY {
                    return None;
                }
                (self.lookup(EventKind::KeyPress, *target)?, None)
            }
        };

        let command = match action {
            Action::Add => Command::Add,
            Action::Update => Command::Update,
            Action::SubmitCurrentMode => Command::SubmitCurrentMode,
            Action::CancelEdit => Command::CancelEdit,
            Action::ResetForm => Command::ResetForm,
            Action::ClearAll => Command::ClearAll,
            Action::Search => Command::Search(value.cloned().unwrap_or_default()),
        };
        Some(command)
    }
}

impl Default for EventBindings {
    fn default() -> Self {
        let bindings = Self::empty()
            .bind(EventKind::Click, ElementId::AddButton, Action::Add)
            .bind(EventKind::Click, ElementId::UpdateButton, Action::Update)
            .bind(EventKind::Click, ElementId::CancelButton, Action::CancelEdit)
            .bind(EventKind::Click, ElementId::ResetButton, Action::ResetForm)
            .bind(EventKind::Click, ElementId::ClearAllButton, Action::ClearAll)
            .bind(
                EventKind::Click,
                ElementId::ClearInventoryButton,
                Action::ClearAll,
            )
            .bind(EventKind::Input, ElementId::SearchInput, Action::Search);

        ElementId::FORM_INPUTS
            .into_iter()
            .fold(bindings, |bindings, input| {
                bindings.bind(EventKind::KeyPress, input, Action::SubmitCurrentMode)
            })
    }
}
