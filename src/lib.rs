pub mod product;

pub use product::{
    LaptopDetails, MobileDetails, Product, ProductKind, ProductVariant, UnknownKindError,
};
