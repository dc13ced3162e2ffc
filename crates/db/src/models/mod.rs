//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts where the table is written through
//!   the API

pub mod assessment;
pub mod hire_attempt;
pub mod organization;
pub mod profile;
pub mod promotion;
pub mod rating;
