/// Edit mode of a list of editable items.
///
/// A list has at most one item out of display mode. Starting an edit or a
/// creation replaces whatever was in progress, discarding its draft.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum EditState<D> {
    #[default]
    Display,
    Editing { id: String, draft: D },
    /// A new item that only exists in this view until it is saved.
    Creating { draft: D },
}

impl<D> EditState<D> {
    pub fn begin_edit(id: impl Into<String>, draft: D) -> Self {
        EditState::Editing {
            id: id.into(),
            draft,
        }
    }

    pub fn begin_create(draft: D) -> Self {
        EditState::Creating { draft }
    }

    pub fn is_editing(&self, item_id: &str) -> bool {
        matches!(self, EditState::Editing { id, .. } if id == item_id)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, EditState::Creating { .. })
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditState::Display => None,
            EditState::Editing { draft, .. } | EditState::Creating { draft } => Some(draft),
        }
    }

    /// Applies `f` to the draft, leaving display mode untouched.
    pub fn map_draft(self, f: impl FnOnce(D) -> D) -> Self {
        match self {
            EditState::Display => EditState::Display,
            EditState::Editing { id, draft } => EditState::Editing {
                id,
                draft: f(draft),
            },
            EditState::Creating { draft } => EditState::Creating { draft: f(draft) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_another_item_replaces_the_first() {
        let state = EditState::begin_edit("a", 1);
        assert!(state.is_editing("a"));
        let state = EditState::begin_edit("b", 2);
        assert!(!state.is_editing("a"));
        assert!(state.is_editing("b"));
        assert_eq!(state.draft(), Some(&2));
    }

    #[test]
    fn map_draft_ignores_display() {
        let state: EditState<u8> = EditState::Display;
        assert_eq!(state.map_draft(|d| d + 1), EditState::Display);
        let state = EditState::begin_create(1u8).map_draft(|d| d + 1);
        assert_eq!(state, EditState::Creating { draft: 2 });
    }
}
