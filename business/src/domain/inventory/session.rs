use crate::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormMode::Add => write!(f, "add"),
            FormMode::Edit => write!(f, "edit"),
        }
    }
}

/// Which form buttons are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub add: bool,
    pub update: bool,
    pub cancel: bool,
}

impl From<FormMode> for Affordances {
    fn from(mode: FormMode) -> Self {
        match mode {
            FormMode::Add => Self {
                add: true,
                update: false,
                cancel: false,
            },
            FormMode::Edit => Self {
                add: false,
                update: true,
                cancel: true,
            },
        }
    }
}

/// The record currently loaded into the form, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    editing: Option<ProductId>,
}

impl EditSession {
    /// Starts editing `id` and returns the session it replaced, if any.
    pub fn begin(&mut self, id: ProductId) -> Option<ProductId> {
        self.editing.replace(id)
    }

    pub fn end(&mut self) -> Option<ProductId> {
        self.editing.take()
    }

    pub fn current(&self) -> Option<&ProductId> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Add
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_add_mode() {
        let session = EditSession::default();
        assert_eq!(session.mode(), FormMode::Add);
        assert_eq!(Affordances::from(session.mode()), Affordances {
            add: true,
            update: false,
            cancel: false,
        });
    }

    #[test]
    fn should_redirect_to_new_record_and_report_abandoned_one() {
        let mut session = EditSession::default();
        assert_eq!(session.begin(ProductId::new("a")), None);

        let abandoned = session.begin(ProductId::new("b"));

        assert_eq!(abandoned, Some(ProductId::new("a")));
        assert_eq!(session.current(), Some(&ProductId::new("b")));
        assert_eq!(session.mode(), FormMode::Edit);
    }

    #[test]
    fn should_show_update_and_cancel_while_editing() {
        let affordances = Affordances::from(FormMode::Edit);
        assert!(!affordances.add);
        assert!(affordances.update);
        assert!(affordances.cancel);
    }

    #[test]
    fn should_return_to_add_mode_when_ended() {
        let mut session = EditSession::default();
        session.begin(ProductId::new("a"));

        assert_eq!(session.end(), Some(ProductId::new("a")));
        assert_eq!(session.mode(), FormMode::Add);
    }
}
