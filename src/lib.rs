//! Molar mass calculation for chemical formulas.
//!
//! ```
//! let water = molar_mass::molar_mass("H2O");
//! assert!((water - 18.01468).abs() < 1e-9);
//! ```

pub mod element;
pub mod formula;
pub mod history;
pub mod input;

pub use element::{element_by_number, element_by_symbol, periodic_table, Element};
pub use formula::{evaluate, molar_mass, Component, Evaluation, Formula};
