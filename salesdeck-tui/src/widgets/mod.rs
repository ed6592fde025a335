//! Reusable widget components.

pub mod board;
pub mod detail;
pub mod filter;
pub mod status;
pub mod table;

pub use board::{Board, BoardColumn};
pub use detail::{or_dash, render_empty_detail, DetailPanel, DetailSection};
pub use filter::{FilterBar, FilterGroup, FilterOption};
pub use status::PaginationFooter;
pub use table::ListTable;
