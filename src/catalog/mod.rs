//! Static soil catalogs: descriptions, property tables and crop advice.

pub mod crops;
pub mod profiles;
pub mod properties;

pub use crops::{recommend, recommend_for_label};
pub use profiles::{description, profile, SoilProfile};
pub use properties::describe_properties;
