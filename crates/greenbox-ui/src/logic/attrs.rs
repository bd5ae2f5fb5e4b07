//! Attributes forwarded to the hidden native input.
//!
//! Only an enumerated set of keys is accepted so the forwarded surface stays
//! checkable: attributes the checkbox manages itself (`id`, `type`, `checked`,
//! `disabled`, `tabindex`, `aria-label`, `title`, `class`) cannot be overridden.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised while building passthrough attributes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttrError {
    /// A `data-*` attribute name was malformed.
    #[error("invalid data attribute name '{key}'")]
    InvalidDataKey {
        /// Offending attribute name.
        key: String,
    },
    /// A value-carrying attribute was given an empty value.
    #[error("attribute '{attr}' requires a non-empty value")]
    EmptyValue {
        /// Attribute name.
        attr: &'static str,
    },
}

/// A validated `data-*` attribute name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataAttr(&'static str);

impl DataAttr {
    /// The full attribute name, including the `data-` prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Attribute keys that may be forwarded to the native input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassthroughAttr {
    /// Form field name.
    Name,
    /// Submitted value.
    Value,
    /// Owning form id.
    Form,
    /// Boolean `required`.
    Required,
    /// Boolean `autofocus`.
    AutoFocus,
    /// Id of a describing element.
    AriaDescribedBy,
    /// Arbitrary `data-*` attribute.
    Data(DataAttr),
}

impl PassthroughAttr {
    /// Builds a `data-*` key from its full name, e.g. `data-section`. The part
    /// after the prefix must be ASCII lowercase letters, digits or `-`.
    ///
    /// # Errors
    /// Returns [`AttrError::InvalidDataKey`] when `name` lacks the `data-`
    /// prefix or its suffix is empty, starts with `-` or has other characters.
    pub fn data(name: &'static str) -> Result<Self, AttrError> {
        let valid = name.strip_prefix("data-").is_some_and(|suffix| {
            !suffix.is_empty()
                && !suffix.starts_with('-')
                && suffix
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        });
        if valid {
            Ok(Self::Data(DataAttr(name)))
        } else {
            Err(AttrError::InvalidDataKey {
                key: name.to_string(),
            })
        }
    }

    /// HTML attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value => "value",
            Self::Form => "form",
            Self::Required => "required",
            Self::AutoFocus => "autofocus",
            Self::AriaDescribedBy => "aria-describedby",
            Self::Data(data) => data.name(),
        }
    }

    /// Boolean attributes carry their own name as value.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Required | Self::AutoFocus)
    }
}

/// Ordered map of forwarded attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassthroughAttrs {
    entries: BTreeMap<PassthroughAttr, String>,
}

impl PassthroughAttrs {
    /// Empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces an attribute.
    ///
    /// # Errors
    /// Returns [`AttrError::EmptyValue`] for an empty value on a
    /// value-carrying attribute (see [`Self::insert`]).
    pub fn with(
        mut self,
        attr: PassthroughAttr,
        value: impl Into<String>,
    ) -> Result<Self, AttrError> {
        self.insert(attr, value)?;
        Ok(self)
    }

    /// Adds a boolean attribute such as `required`.
    #[must_use]
    pub fn flag(mut self, attr: PassthroughAttr) -> Self {
        self.entries.insert(attr, attr.name().to_string());
        self
    }

    /// Inserts an attribute, replacing any previous value. Boolean attributes
    /// given an empty value store their own name.
    ///
    /// # Errors
    /// Returns [`AttrError::EmptyValue`] when `value` is empty and `attr` is
    /// not boolean.
    pub fn insert(
        &mut self,
        attr: PassthroughAttr,
        value: impl Into<String>,
    ) -> Result<(), AttrError> {
        let value = value.into();
        let value = if attr.is_boolean() && value.is_empty() {
            attr.name().to_string()
        } else {
            value
        };
        if value.is_empty() {
            return Err(AttrError::EmptyValue { attr: attr.name() });
        }
        self.entries.insert(attr, value);
        Ok(())
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, attr: PassthroughAttr) -> Option<String> {
        self.entries.remove(&attr)
    }

    /// Value for `attr`, if set.
    #[must_use]
    pub fn get(&self, attr: PassthroughAttr) -> Option<&str> {
        self.entries.get(&attr).map(String::as_str)
    }

    /// Iterates in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PassthroughAttr, &str)> + '_ {
        self.entries
            .iter()
            .map(|(attr, value)| (*attr, value.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
