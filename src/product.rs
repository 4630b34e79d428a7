use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label reported by entries that were never specialized into a variant.
/// The text (typo included) is the historical sentinel and is kept verbatim.
const UNSPECIFIED_LABEL: &str = "The use didn't specify the Type";

/// A catalog entry: the common record shape plus one variant tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Assigned by an external persistence layer; no uniqueness enforced here.
    pub id: i32,

    pub name: String,

    /// Reserved for an external mapping layer; no constructor populates it.
    pub discriminator: Option<String>,

    // Stamped once at construction, exposed read-only via `add_date()`.
    add_date: DateTime<Utc>,

    /// Caller-supplied domain date (release, purchase), distinct from `add_date`.
    pub date: DateTime<Utc>,

    pub brand: String,

    /// No currency unit, no sign or range validation; stored verbatim.
    pub price: i32,

    pub variant: ProductVariant,
}

impl Product {
    /// Base entry with no variant-specific detail.
    pub fn new(name: String, brand: String, date: DateTime<Utc>, price: i32) -> Self {
        Self::with_variant(name, brand, date, price, ProductVariant::Unspecified)
    }

    /// Laptop entry. `None` details mirror the short construction form and
    /// leave model and GPU type empty.
    pub fn laptop(
        name: String,
        brand: String,
        date: DateTime<Utc>,
        price: i32,
        details: Option<LaptopDetails>,
    ) -> Self {
        let LaptopDetails { model, gpu_type } = details.unwrap_or_default();
        Self::with_variant(name, brand, date, price, ProductVariant::Laptop { model, gpu_type })
    }

    /// Mobile entry. `None` details leave the model empty and the camera
    /// count at zero.
    pub fn mobile(
        name: String,
        brand: String,
        date: DateTime<Utc>,
        price: i32,
        details: Option<MobileDetails>,
    ) -> Self {
        let MobileDetails { model, camera_count } = details.unwrap_or_default();
        Self::with_variant(
            name,
            brand,
            date,
            price,
            ProductVariant::Mobile { model, camera_count },
        )
    }

    fn with_variant(
        name: String,
        brand: String,
        date: DateTime<Utc>,
        price: i32,
        variant: ProductVariant,
    ) -> Self {
        Self {
            id: 0,
            name,
            discriminator: None,
            add_date: Utc::now(),
            date,
            brand,
            price,
            variant,
        }
    }

    /// Moment this entry was created. Stamped once; there is no setter.
    pub fn add_date(&self) -> DateTime<Utc> {
        self.add_date
    }

    pub fn kind(&self) -> ProductKind {
        self.variant.kind()
    }

    /// Category label, computed from the variant tag.
    pub fn type_label(&self) -> &'static str {
        self.variant.type_label()
    }

    /// Variant-specific detail line; empty for unspecified entries.
    pub fn extra_info(&self) -> String {
        self.variant.extra_info()
    }
}

/// Closed set of product variants. Label and detail formatting dispatch over
/// this tag instead of an open subclass hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProductVariant {
    Unspecified,
    Laptop { model: String, gpu_type: String },
    Mobile { model: String, camera_count: i32 },
}

impl ProductVariant {
    pub fn kind(&self) -> ProductKind {
        match self {
            Self::Unspecified => ProductKind::Unspecified,
            Self::Laptop { .. } => ProductKind::Laptop,
            Self::Mobile { .. } => ProductKind::Mobile,
        }
    }

    pub fn type_label(&self) -> &'static str {
        self.kind().label()
    }

    /// Unset detail renders verbatim: a laptop without a GPU yields
    /// `"GPU Type:"`, a mobile without cameras `"Number Of Camera:0"`.
    pub fn extra_info(&self) -> String {
        match self {
            Self::Unspecified => String::new(),
            Self::Laptop { gpu_type, .. } => format!("GPU Type:{gpu_type}"),
            Self::Mobile { camera_count, .. } => format!("Number Of Camera:{camera_count}"),
        }
    }
}

/// Laptop attributes accepted by the long construction form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaptopDetails {
    pub model: String,
    pub gpu_type: String,
}

/// Mobile attributes accepted by the long construction form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MobileDetails {
    pub model: String,
    pub camera_count: i32,
}

/// Fieldless variant tag, usable without touching variant payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Unspecified,
    Laptop,
    Mobile,
}

impl ProductKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unspecified => UNSPECIFIED_LABEL,
            Self::Laptop => "laptop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the labels an external discriminator column would hold. The
/// unspecified sentinel is display-only and is not accepted back.
impl FromStr for ProductKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laptop" => Ok(Self::Laptop),
            "mobile" => Ok(Self::Mobile),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown product kind: {0}")]
pub struct UnknownKindError(pub String);
