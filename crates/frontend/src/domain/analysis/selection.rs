//! Selection rules for the two-image analysis form.

/// Ordered selection of at most two items. Position 0 is the
/// defect-analysis subject, position 1 the ring-count subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPair<T> {
    items: Vec<T>,
}

impl<T> Default for SelectedPair<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> SelectedPair<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection. A batch of more than two is rejected
    /// wholesale, not truncated: the selection empties and the batch comes
    /// back as `Err` so the caller can dispose of it.
    pub fn replace(&mut self, items: Vec<T>) -> Result<(), Vec<T>> {
        if items.len() > 2 {
            self.items.clear();
            Err(items)
        } else {
            self.items = items;
            Ok(())
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Submission is possible only with exactly two selections
    pub fn is_ready(&self) -> bool {
        self.items.len() == 2
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The (defect, ring-count) pair, if the selection is complete
    pub fn as_pair(&self) -> Option<(&T, &T)> {
        match self.items.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}

/// Caption identifying the analysis a slot feeds
pub fn role_label(index: usize) -> &'static str {
    if index == 0 {
        "(Defect Analysis)"
    } else {
        "(Ring Count Analysis)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_selection_is_rejected_wholesale() {
        let mut sel = SelectedPair::new();
        sel.replace(vec!["a", "b"]).unwrap();
        let rejected = sel.replace(vec!["x", "y", "z"]).unwrap_err();
        assert_eq!(rejected, vec!["x", "y", "z"]);
        assert!(sel.is_empty());
        assert!(!sel.is_ready());
    }

    #[test]
    fn exactly_two_enables_submission() {
        let mut sel = SelectedPair::new();
        sel.replace(vec!["defect.jpg"]).unwrap();
        assert!(!sel.is_ready());
        sel.replace(vec!["defect.jpg", "rings.jpg"]).unwrap();
        assert!(sel.is_ready());
        assert_eq!(sel.as_pair(), Some((&"defect.jpg", &"rings.jpg")));
    }

    #[test]
    fn removing_one_of_two_disables_submission() {
        let mut sel = SelectedPair::new();
        sel.replace(vec!["a", "b"]).unwrap();
        assert_eq!(sel.remove(0), Some("a"));
        assert_eq!(sel.len(), 1);
        assert!(!sel.is_ready());
        assert!(sel.as_pair().is_none());
        assert_eq!(sel.items(), ["b"]);
    }

    #[test]
    fn out_of_range_removal_is_a_no_op() {
        let mut sel = SelectedPair::new();
        sel.replace(vec!["a"]).unwrap();
        assert_eq!(sel.remove(5), None);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn positional_labels_match_analysis_roles() {
        assert_eq!(role_label(0), "(Defect Analysis)");
        assert_eq!(role_label(1), "(Ring Count Analysis)");
    }
}
