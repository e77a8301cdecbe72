pub mod columns;
pub mod data_table;
pub mod sortable_header_cell;

pub use columns::{generate_columns, CellRenderer, ColumnDescriptor, ColumnOptions};
pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
