//! The declaration model: one `property: value` pair and the ordered block
//! that owns them.
//!
//! [CSS Syntax § 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)

use indexmap::IndexMap;
use serde::Serialize;

/// [§ 3 Declarations](https://www.w3.org/TR/css-syntax-3/#declaration)
///
/// "Conceptually, declarations are a particular instance of associating a
/// property or descriptor name with a value."
///
/// A single declared value with its `!important` flag. The property name is
/// the key it is stored under in a [`DeclarationBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The value text, trimmed and with any `!important` marker removed.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

impl Declaration {
    /// Create a declaration from its value text and importance.
    #[must_use]
    pub fn new(value: impl Into<String>, important: bool) -> Self {
        Self {
            value: value.into(),
            important,
        }
    }
}

/// [CSSOM § 6.6.1 CSS declaration blocks](https://www.w3.org/TR/cssom-1/#css-declaration-blocks)
///
/// "A CSS declaration block is an ordered collection of CSS properties with
/// their associated values."
///
/// Keys are lowercase, trimmed property names. Order is the effective source
/// order: a property re-declared later in the block moves to the position of
/// its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeclarationBlock {
    entries: IndexMap<String, Declaration>,
}

impl DeclarationBlock {
    /// Create an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declarations in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a declaration by (already normalized) property name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Declaration> {
        self.entries.get(property)
    }

    /// Whether `property` is declared in this block.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    /// Look up a declaration together with its position in source order.
    #[must_use]
    pub fn get_full(&self, property: &str) -> Option<(usize, &Declaration)> {
        self.entries.get_full(property).map(|(index, _, declaration)| (index, declaration))
    }

    /// Position of `property` in source order.
    #[must_use]
    pub fn position(&self, property: &str) -> Option<usize> {
        self.entries.get_index_of(property)
    }

    /// Iterate `(property, declaration)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate declarations mutably, in source order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Declaration> {
        self.entries.values_mut()
    }

    /// [§ 6.4.1 Cascade sorting order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// "The last declaration in document order wins."
    ///
    /// Append a declaration. If the property is already present the earlier
    /// entry is dropped, so the property now sits at the end of the block.
    pub fn push(&mut self, property: impl Into<String>, declaration: Declaration) {
        let property = property.into();
        let _ = self.entries.shift_remove(&property);
        let _ = self.entries.insert(property, declaration);
    }

    /// Overwrite `property` in place, or append it if absent.
    pub fn set(&mut self, property: impl Into<String>, declaration: Declaration) {
        let _ = self.entries.insert(property.into(), declaration);
    }

    /// Insert a new property at `index`, shifting later entries right.
    ///
    /// If the property already exists it is moved to `index`.
    pub fn insert_at(
        &mut self,
        index: usize,
        property: impl Into<String>,
        declaration: Declaration,
    ) {
        let _ = self.entries.shift_insert(index, property.into(), declaration);
    }

    /// Remove `property`, preserving the order of the remaining entries.
    pub fn remove(&mut self, property: &str) -> Option<Declaration> {
        self.entries.shift_remove(property)
    }
}

impl<'a> IntoIterator for &'a DeclarationBlock {
    type Item = (&'a String, &'a Declaration);
    type IntoIter = indexmap::map::Iter<'a, String, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Declaration)> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = (K, Declaration)>>(iter: I) -> Self {
        let mut block = Self::new();
        for (property, declaration) in iter {
            block.push(property, declaration);
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_moves_redeclared_property_to_end() {
        let mut block = DeclarationBlock::new();
        block.push("color", Declaration::new("red", false));
        block.push("margin", Declaration::new("0", false));
        block.push("color", Declaration::new("blue", false));

        let order: Vec<&str> = block.iter().map(|(p, _)| p).collect();
        assert_eq!(order, ["margin", "color"]);
        assert_eq!(block.get("color").unwrap().value, "blue");
    }

    #[test]
    fn test_set_keeps_position() {
        let mut block = DeclarationBlock::new();
        block.push("color", Declaration::new("red", false));
        block.push("margin", Declaration::new("0", false));
        block.set("color", Declaration::new("blue", true));

        assert_eq!(block.position("color"), Some(0));
        assert_eq!(block.get("color"), Some(&Declaration::new("blue", true)));
    }

    #[test]
    fn test_insert_at_and_remove() {
        let mut block: DeclarationBlock = [
            ("margin", Declaration::new("1px", false)),
            ("color", Declaration::new("red", false)),
        ]
        .into_iter()
        .collect();

        block.insert_at(0, "margin-top", Declaration::new("1px", false));
        assert_eq!(block.position("margin"), Some(1));

        assert!(block.remove("margin").is_some());
        let order: Vec<&str> = block.iter().map(|(p, _)| p).collect();
        assert_eq!(order, ["margin-top", "color"]);
        assert!(block.remove("margin").is_none());
    }
}
