//! Route table: URL path → named page component.
//!
//! The table is built once and never changes. The dashboard is linked in
//! eagerly; every other component is created on first navigation and then
//! reused.

mod table;

pub use table::{Component, Route, RouteError, RouteTable, ViewFactory};
