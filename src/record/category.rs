//! Defines the category label attached to each transaction record.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category labels the tracker offers out of the box.
///
/// This set is not exhaustive: records may carry any non-empty label, and
/// the engine aggregates unknown labels normally. The UI uses
/// [Category::is_known] to decide whether to fall back to its default
/// visual treatment.
pub const KNOWN_CATEGORIES: [&str; 15] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Salary",
    "Freelance",
    "Investment",
    "Rent & EMI",
    "Petrol & Fuel",
    "Grocery",
    "Other",
];

/// The category of a transaction record, e.g. "Grocery", "Salary".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a category from a label.
    ///
    /// # Errors
    ///
    /// This function will return an error if `label` is an empty string.
    pub fn new(label: &str) -> Result<Self, Error> {
        if label.is_empty() {
            Err(Error::EmptyCategory)
        } else {
            Ok(Self(label.to_owned()))
        }
    }

    /// Create a category without validation.
    ///
    /// The caller should ensure that the label is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`,
    /// because if the non-empty invariant is violated it will cause
    /// incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(label: &str) -> Self {
        Self(label.to_owned())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label belongs to [KNOWN_CATEGORIES].
    ///
    /// Unknown labels still aggregate under their literal label; this only
    /// tells the UI to use its default visual bucket.
    pub fn is_known(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.0.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::Category;

    #[test]
    fn new_rejects_empty_label() {
        assert_eq!(Category::new(""), Err(Error::EmptyCategory));
    }

    #[test]
    fn known_label_is_known() {
        let category = Category::new("Grocery").unwrap();
        assert!(category.is_known());
    }

    #[test]
    fn unknown_label_is_preserved_but_not_known() {
        let category = Category::new("Pet Supplies").unwrap();
        assert!(!category.is_known());
        assert_eq!(category.as_str(), "Pet Supplies");
    }
}
