//! Selection form model
//!
//! Owns the checkbox-list state the view layer renders: one
//! [`SelectableItem`] per candidate plus the derived "at least one
//! checked" flag. The validity is always recomputed from the current
//! item list; there is no captured default to go stale.

use crate::error::{ErrorKind, Result};
use crate::model::structs::{SelectableItem, SelectionState};

type SelectionCallback = Box<dyn Fn(&SelectionState)>;

/// Reactive checkbox-list state with a single derived validity flag.
///
/// One owner per form instance. Every mutation pushes the full
/// [`SelectionState`] to all subscribers synchronously, in mutation
/// order.
#[derive(Default)]
pub struct SelectionFormModel {
    state: SelectionState,
    subscribers: Vec<SelectionCallback>,
}

impl SelectionFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole item set from an iterator of names.
    ///
    /// Every new item starts unchecked, so the form is invalid right
    /// after a rebuild; prior checked state is discarded even for names
    /// that reappear. An empty input is a normal state, not an error.
    pub fn rebuild<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.state.items = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                SelectableItem {
                    key: name.clone(),
                    label: name,
                    checked: false,
                }
            })
            .collect();

        self.revalidate_and_notify();
    }

    /// Flip the checkbox at `index`.
    ///
    /// An out-of-range index is a contract violation on the caller's
    /// side; it is surfaced as `IndexOutOfRange` and must not be
    /// recovered silently.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let len = self.state.items.len();
        let item = self
            .state
            .items
            .get_mut(index)
            .ok_or(ErrorKind::IndexOutOfRange(index, len))?;
        item.checked = !item.checked;

        self.revalidate_and_notify();
        Ok(())
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state.valid
    }

    /// Register a callback invoked with the full state after every
    /// `rebuild` or `toggle`.
    pub fn on_change(&mut self, callback: impl Fn(&SelectionState) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn revalidate_and_notify(&mut self) {
        self.state.valid = self.state.items.iter().any(|item| item.checked);
        for callback in &self.subscribers {
            callback(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rebuild_starts_all_unchecked_and_invalid() {
        let mut form = SelectionFormModel::new();
        form.rebuild(["A", "B", "C"]);

        assert_eq!(form.state().items.len(), 3);
        assert!(form.state().items.iter().all(|item| !item.checked));
        assert!(!form.is_valid());
    }

    #[test]
    fn empty_rebuild_is_a_normal_invalid_state() {
        let mut form = SelectionFormModel::new();
        form.rebuild(Vec::<String>::new());

        assert!(form.state().items.is_empty());
        assert!(!form.is_valid());
    }

    #[test]
    fn toggling_one_item_makes_the_form_valid() {
        let mut form = SelectionFormModel::new();
        form.rebuild(["A", "B", "C"]);

        form.toggle(1).unwrap();
        assert!(form.state().items[1].checked);
        assert!(!form.state().items[0].checked);
        assert!(!form.state().items[2].checked);
        assert!(form.is_valid());

        form.toggle(1).unwrap();
        assert!(!form.is_valid());
    }

    #[test]
    fn rebuild_discards_prior_selections() {
        let mut form = SelectionFormModel::new();
        form.rebuild(["A", "B"]);
        form.toggle(0).unwrap();
        assert!(form.is_valid());

        form.rebuild(["A", "B"]);
        assert!(!form.is_valid());
        assert!(form.state().items.iter().all(|item| !item.checked));
    }

    #[test]
    fn out_of_range_toggle_is_a_contract_violation() {
        let mut form = SelectionFormModel::new();
        form.rebuild(["A"]);

        let err = form.toggle(3).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::IndexOutOfRange(3, 1)));
        // State untouched by the bad call.
        assert!(!form.is_valid());
    }

    #[test]
    fn subscribers_see_every_mutation_in_order() {
        let seen: Rc<RefCell<Vec<(usize, bool)>>> = Rc::new(RefCell::new(Vec::new()));

        let mut form = SelectionFormModel::new();
        let sink = Rc::clone(&seen);
        form.on_change(move |state| {
            sink.borrow_mut().push((state.items.len(), state.valid));
        });

        form.rebuild(["A", "B"]);
        form.toggle(0).unwrap();
        form.toggle(0).unwrap();
        form.rebuild(["A"]);

        assert_eq!(
            *seen.borrow(),
            vec![(2, false), (2, true), (2, false), (1, false)]
        );
    }
}
