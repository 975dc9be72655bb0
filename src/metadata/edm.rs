//! EDM primitive type vocabulary.
//!
//! Property types travel through both the authoring model and the projection as plain
//! strings, because a service may declare types this crate does not know about (complex
//! types, enumerations, `Collection(...)`). [`EdmType`] names the primitive types a
//! time-series consumer can map onto columns, and [`FieldKind`] is the column shape each of
//! them maps to.
//!
//! # Examples
//!
//! ```rust
//! use odatascope::metadata::edm::{EdmType, FieldKind};
//!
//! let ty: EdmType = "Edm.DateTimeOffset".parse().unwrap();
//! assert_eq!(ty.kind(), FieldKind::Time);
//! assert_eq!(EdmType::Int64.to_string(), "Edm.Int64");
//! ```

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// An EDM primitive type, identified by its qualified name (`Edm.<Name>`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter, EnumCount,
)]
pub enum EdmType {
    /// `Edm.String`
    #[strum(serialize = "Edm.String")]
    String,
    /// `Edm.Boolean`
    #[strum(serialize = "Edm.Boolean")]
    Boolean,
    /// `Edm.Single`, 32-bit IEEE float
    #[strum(serialize = "Edm.Single")]
    Single,
    /// `Edm.Double`, 64-bit IEEE float
    #[strum(serialize = "Edm.Double")]
    Double,
    /// `Edm.Decimal`
    #[strum(serialize = "Edm.Decimal")]
    Decimal,
    /// `Edm.SByte`
    #[strum(serialize = "Edm.SByte")]
    SByte,
    /// `Edm.Byte`
    #[strum(serialize = "Edm.Byte")]
    Byte,
    /// `Edm.Int16`
    #[strum(serialize = "Edm.Int16")]
    Int16,
    /// `Edm.Int32`
    #[strum(serialize = "Edm.Int32")]
    Int32,
    /// `Edm.Int64`
    #[strum(serialize = "Edm.Int64")]
    Int64,
    /// `Edm.DateTimeOffset`
    #[strum(serialize = "Edm.DateTimeOffset")]
    DateTimeOffset,
    /// `Edm.Guid`
    #[strum(serialize = "Edm.Guid")]
    Guid,
    /// `Edm.Time` (OData v2/v3 duration)
    #[strum(serialize = "Edm.Time")]
    Time,
    /// `Edm.Date`
    #[strum(serialize = "Edm.Date")]
    Date,
    /// `Edm.DateTime` (OData v2/v3)
    #[strum(serialize = "Edm.DateTime")]
    DateTime,
}

/// The column shape a property's values are collected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Boolean values
    Boolean,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Signed 8-bit integer
    Int8,
    /// Unsigned 8-bit integer
    UInt8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Timestamps
    Time,
    /// Anything rendered as text
    String,
}

impl EdmType {
    /// Parses a property type name, returning `None` for anything that is not a known
    /// primitive.
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        type_name.parse().ok()
    }

    /// Column shape for values of this type.
    ///
    /// `Edm.Decimal` widens to [`FieldKind::Float64`]; the date and time-of-day types with an
    /// absolute position map to [`FieldKind::Time`], while `Edm.Time` (a duration),
    /// `Edm.Guid` and `Edm.String` are kept as text.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            EdmType::Boolean => FieldKind::Boolean,
            EdmType::Single => FieldKind::Float32,
            EdmType::Double | EdmType::Decimal => FieldKind::Float64,
            EdmType::SByte => FieldKind::Int8,
            EdmType::Byte => FieldKind::UInt8,
            EdmType::Int16 => FieldKind::Int16,
            EdmType::Int32 => FieldKind::Int32,
            EdmType::Int64 => FieldKind::Int64,
            EdmType::DateTimeOffset | EdmType::DateTime | EdmType::Date => FieldKind::Time,
            EdmType::String | EdmType::Guid | EdmType::Time => FieldKind::String,
        }
    }

    /// Returns `true` for types whose values are numbers.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self.kind(),
            FieldKind::Float32
                | FieldKind::Float64
                | FieldKind::Int8
                | FieldKind::UInt8
                | FieldKind::Int16
                | FieldKind::Int32
                | FieldKind::Int64
        )
    }
}

/// Column shape for an arbitrary property type name; unknown types are text.
#[must_use]
pub fn field_kind(type_name: &str) -> FieldKind {
    EdmType::from_type_name(type_name).map_or(FieldKind::String, EdmType::kind)
}
