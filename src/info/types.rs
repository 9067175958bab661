//! Record shapes served by `/info`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default record id.
pub const DEFAULT_ID: i64 = 123;
/// Default record name.
pub const DEFAULT_NAME: &str = "Sier";
/// Default value of the extra field carried by [`ExtendedRecord`].
pub const DEFAULT_OPTIONAL: &str = "Added";

/// Which record shape a counter state selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Plain [`BaseRecord`].
    Base,
    /// [`BaseRecord`] plus the `optional` field.
    Extended,
}

impl Variant {
    /// Get the other variant.
    pub fn opposite(&self) -> Self {
        match self {
            Variant::Base => Variant::Extended,
            Variant::Extended => Variant::Base,
        }
    }
}

/// Nested element of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Always `true` unless built by hand.
    pub inner: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self { inner: true }
    }
}

/// Record present in every `/info` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecord {
    /// Record id.
    pub id: i64,
    /// Record name.
    pub name: String,
    /// Ordered nested elements.
    pub elements: Vec<Element>,
}

impl Default for BaseRecord {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            elements: vec![Element::default()],
        }
    }
}

impl BaseRecord {
    /// Attach the `optional` field, producing the extended shape.
    pub fn extend(self, optional: impl Into<String>) -> ExtendedRecord {
        ExtendedRecord {
            base: self,
            optional: optional.into(),
        }
    }
}

/// [`BaseRecord`] with one extra field.
///
/// The base fields are flattened, so the JSON is the base object with
/// `optional` appended after `elements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedRecord {
    /// Shared base fields.
    #[serde(flatten)]
    pub base: BaseRecord,
    /// The extra field.
    pub optional: String,
}

impl Default for ExtendedRecord {
    fn default() -> Self {
        BaseRecord::default().extend(DEFAULT_OPTIONAL)
    }
}

/// Body of an `/info` response.
///
/// Untagged: the JSON is exactly the inner record. `Extended` is listed
/// first so a body carrying `optional` never parses as `Base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoRecord {
    /// Extended shape.
    Extended(ExtendedRecord),
    /// Base shape.
    Base(BaseRecord),
}

impl InfoRecord {
    /// Build the default record for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Base => InfoRecord::Base(BaseRecord::default()),
            Variant::Extended => InfoRecord::Extended(ExtendedRecord::default()),
        }
    }

    /// Which shape this record has.
    pub fn variant(&self) -> Variant {
        match self {
            InfoRecord::Base(_) => Variant::Base,
            InfoRecord::Extended(_) => Variant::Extended,
        }
    }

    /// Borrow the base fields, whatever the shape.
    pub fn base(&self) -> &BaseRecord {
        match self {
            InfoRecord::Base(base) => base,
            InfoRecord::Extended(extended) => &extended.base,
        }
    }
}

impl From<BaseRecord> for InfoRecord {
    fn from(record: BaseRecord) -> Self {
        InfoRecord::Base(record)
    }
}

impl From<ExtendedRecord> for InfoRecord {
    fn from(record: ExtendedRecord) -> Self {
        InfoRecord::Extended(record)
    }
}
