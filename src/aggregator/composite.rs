//! Composite-key labels for charts that take a single label dimension.
//!
//! Format: "<outer>-<inner>", e.g. "Male-Israeli security forces".
//! Values that already contain the separator can collide; that is accepted.

use super::grouped::GroupedCount;
use crate::utils::config::LABEL_SEPARATOR;
use serde::{Deserialize, Serialize};

/// A two-level count with its joined label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeCount {
    pub label: String,
    pub outer: String,
    pub inner: String,
    pub count: usize,
}

/// Join two category values into one label
pub fn composite_label(outer: &str, inner: &str) -> String {
    format!("{}{}{}", outer, LABEL_SEPARATOR, inner)
}

/// Split a label back into (outer, inner) at the first separator
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    label.split_once(LABEL_SEPARATOR)
}

/// Attach a composite label to every row, keeping order and counts
///
/// **Public** - feeds the kills-by-gender and district pies
pub fn label_rows(rows: &[GroupedCount]) -> Vec<CompositeCount> {
    rows.iter()
        .map(|row| CompositeCount {
            label: composite_label(&row.outer, &row.inner),
            outer: row.outer.clone(),
            inner: row.inner.clone(),
            count: row.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rows() {
        let rows = vec![
            GroupedCount { outer: "Male".to_string(), inner: "Hamas".to_string(), count: 4 },
            GroupedCount { outer: "Female".to_string(), inner: "Hamas".to_string(), count: 1 },
        ];

        let labeled = label_rows(&rows);

        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled[0].label, "Male-Hamas");
        assert_eq!(labeled[1].label, "Female-Hamas");
        assert_eq!(labeled[0].count, 4);
    }

    #[test]
    fn test_split_label_round_trip() {
        let label = composite_label("Female", "Gaza");
        assert_eq!(split_label(&label), Some(("Female", "Gaza")));
        assert_eq!(split_label("nolabel"), None);
    }

    #[test]
    fn test_separator_in_value_collides() {
        // Separator in the inner value only: still splits correctly
        let label = composite_label("Male", "Deir al-Balah");
        assert_eq!(label, "Male-Deir al-Balah");
        assert_eq!(split_label(&label), Some(("Male", "Deir al-Balah")));

        // Separator in the outer value: the pair is not recovered
        let ambiguous = composite_label("a-b", "c");
        assert_eq!(split_label(&ambiguous), Some(("a", "b-c")));
    }
}
