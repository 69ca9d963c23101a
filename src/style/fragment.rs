//! Mergeable style fragments.

use std::collections::BTreeMap;

use serde::Serialize;

use super::value::StyleValue;

/// A partial, mergeable set of visual-property key/value pairs.
///
/// Fragments are open maps: no key is required, and two fragments combine by
/// later-fragment-wins per key. They are plain values with structural
/// equality and no mutation after composition.
///
/// # Example
///
/// ```rust
/// use calmkit::style::{compose, keys, StyleFragment, StyleValue};
///
/// let base = StyleFragment::new()
///     .set(keys::OPACITY, 1.0)
///     .set(keys::BORDER_RADIUS, 12.0);
/// let overlay = StyleFragment::new().set(keys::OPACITY, 0.5);
///
/// let composed = compose(&[&base, &overlay]);
/// assert_eq!(composed.get(keys::OPACITY), Some(&StyleValue::Number(0.5)));
/// assert_eq!(composed.get(keys::BORDER_RADIUS), Some(&StyleValue::Number(12.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleFragment {
    props: BTreeMap<&'static str, StyleValue>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated fragment for chaining.
    pub fn set<V: Into<StyleValue>>(mut self, key: &'static str, value: V) -> Self {
        self.props.insert(key, value.into());
        self
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.props.get(key)
    }

    /// Overlays `other` onto this fragment; `other`'s entries win on conflict.
    pub fn merge(&mut self, other: &StyleFragment) {
        for (key, value) in &other.props {
            self.props.insert(key, value.clone());
        }
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over the properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (*k, v))
    }
}

/// Layers fragments in order into one fragment.
///
/// Later fragments win on key conflict; non-conflicting keys accumulate.
/// Empty fragments are valid layers and contribute nothing.
pub fn compose(layers: &[&StyleFragment]) -> StyleFragment {
    let mut result = StyleFragment::new();
    for layer in layers {
        result.merge(layer);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{keys, Color};
    use proptest::prelude::*;

    #[test]
    fn test_set_and_get() {
        let f = StyleFragment::new().set(keys::BORDER_RADIUS, 10.0);
        assert_eq!(f.get(keys::BORDER_RADIUS), Some(&StyleValue::Number(10.0)));
        assert_eq!(f.get(keys::OPACITY), None);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let f = StyleFragment::new()
            .set(keys::OPACITY, 1.0)
            .set(keys::OPACITY, 0.5);
        assert_eq!(f.get(keys::OPACITY), Some(&StyleValue::Number(0.5)));
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = StyleFragment::new()
            .set(keys::BACKGROUND_COLOR, Color::rgb(0, 0, 0))
            .set(keys::BORDER_RADIUS, 12.0);
        let overlay = StyleFragment::new().set(keys::BACKGROUND_COLOR, Color::rgb(255, 0, 0));

        base.merge(&overlay);
        assert_eq!(
            base.get(keys::BACKGROUND_COLOR),
            Some(&StyleValue::Color(Color::rgb(255, 0, 0)))
        );
        assert_eq!(base.get(keys::BORDER_RADIUS), Some(&StyleValue::Number(12.0)));
    }

    #[test]
    fn test_compose_order_matters() {
        let a = StyleFragment::new().set(keys::ELEVATION, 2.0);
        let b = StyleFragment::new().set(keys::ELEVATION, 0.0);

        let ab = compose(&[&a, &b]);
        let ba = compose(&[&b, &a]);
        assert_eq!(ab.get(keys::ELEVATION), Some(&StyleValue::Number(0.0)));
        assert_eq!(ba.get(keys::ELEVATION), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn test_compose_skips_empty_layers() {
        let a = StyleFragment::new().set(keys::OPACITY, 0.8);
        let empty = StyleFragment::new();

        let composed = compose(&[&empty, &a, &empty]);
        assert_eq!(composed, a);
    }

    #[test]
    fn test_compose_of_nothing_is_empty() {
        assert!(compose(&[]).is_empty());
    }

    #[test]
    fn test_serialize_as_flat_map() {
        let f = StyleFragment::new()
            .set(keys::FONT_WEIGHT, "700")
            .set(keys::FONT_SIZE, 15.0);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fontSize": 15.0, "fontWeight": "700" })
        );
    }

    // Key set for the precedence laws below.
    const KEYS: [&str; 4] = [
        keys::OPACITY,
        keys::BORDER_RADIUS,
        keys::ELEVATION,
        keys::FONT_SIZE,
    ];

    fn arb_fragment() -> impl Strategy<Value = StyleFragment> {
        proptest::collection::vec((0usize..KEYS.len(), -100.0f32..100.0), 0..8).prop_map(
            |entries| {
                let mut f = StyleFragment::new();
                for (i, v) in entries {
                    f = f.set(KEYS[i], v);
                }
                f
            },
        )
    }

    proptest! {
        #[test]
        fn prop_compose_last_wins(a in arb_fragment(), b in arb_fragment()) {
            let composed = compose(&[&a, &b]);
            for key in KEYS {
                let expected = b.get(key).or_else(|| a.get(key));
                prop_assert_eq!(composed.get(key), expected);
            }
        }

        #[test]
        fn prop_compose_associative(
            a in arb_fragment(),
            b in arb_fragment(),
            c in arb_fragment(),
        ) {
            let left = compose(&[&compose(&[&a, &b]), &c]);
            let right = compose(&[&a, &compose(&[&b, &c])]);
            prop_assert_eq!(left, right);
        }
    }
}
