//! Trained phrase-break model
//!
//! The model is a flat table of feature key → integer weight. Its bias is
//! the negated sum of every weight, so a window with no known features
//! scores negative and the threshold sits at half the total weight.

use crate::error::ResourceError;
use crate::features::MAX_FEATURE_LENGTH;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Bundle holding the Japanese phrase model
pub const MODEL_BUNDLE: &str = "jaml";
/// Subtable with the feature keys
pub const MODEL_KEYS: &str = "modelKeys";
/// Subtable with the weights, aligned with [`MODEL_KEYS`]
pub const MODEL_VALUES: &str = "modelValues";

/// Source of parsed resource tables.
///
/// Implementations resolve a bundle identifier plus a subtable name. The
/// model only needs a string array and an integer vector.
pub trait ResourceLoader {
    /// String array stored under `bundle`/`key`
    fn string_array(&self, bundle: &str, key: &str) -> Result<Vec<String>, ResourceError>;

    /// Integer vector stored under `bundle`/`key`
    fn int_vector(&self, bundle: &str, key: &str) -> Result<Vec<i32>, ResourceError>;
}

/// Immutable feature weights plus derived bias
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStore {
    weights: HashMap<String, i32>,
    bias: i64,
}

impl ModelStore {
    /// Build from aligned key and weight arrays.
    pub fn from_pairs<K>(keys: Vec<K>, values: Vec<i32>) -> Result<Self, ResourceError>
    where
        K: Into<String>,
    {
        if keys.len() != values.len() {
            return Err(ResourceError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut weights = HashMap::with_capacity(keys.len());
        let mut sum: i64 = 0;

        for (idx, (key, value)) in keys.into_iter().zip(values).enumerate() {
            let key = key.into();
            if key.is_empty() {
                return Err(ResourceError::EmptyKey(idx));
            }
            let len = key.encode_utf16().count();
            if len > MAX_FEATURE_LENGTH {
                return Err(ResourceError::KeyTooLong {
                    key,
                    len,
                    max: MAX_FEATURE_LENGTH,
                });
            }
            match weights.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(ResourceError::DuplicateKey(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
            sum += i64::from(value);
        }

        Ok(Self {
            weights,
            bias: -sum,
        })
    }

    /// Load the phrase model through `loader`.
    pub fn load(loader: &dyn ResourceLoader) -> Result<Self, ResourceError> {
        Self::load_bundle(loader, MODEL_BUNDLE)
    }

    /// Load a model stored under a different bundle identifier.
    pub fn load_bundle(loader: &dyn ResourceLoader, bundle: &str) -> Result<Self, ResourceError> {
        let values = loader.int_vector(bundle, MODEL_VALUES)?;
        let keys = loader.string_array(bundle, MODEL_KEYS)?;
        let model = Self::from_pairs(keys, values)?;

        log::debug!(
            "loaded model bundle '{bundle}': {} features, bias {}",
            model.len(),
            model.bias
        );
        Ok(model)
    }

    /// Weight of `key`, or 0 when the model does not know it.
    #[inline]
    pub fn score_contribution(&self, key: &str) -> i32 {
        self.weights.get(key).copied().unwrap_or(0)
    }

    /// Negated sum of all weights
    #[inline]
    pub fn bias(&self) -> i64 {
        self.bias
    }

    /// Whether the model has a weight for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.weights.contains_key(key)
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True for a model without features; it never breaks
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(key, weight)` in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
