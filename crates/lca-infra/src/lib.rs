//! Infrastructure layer - built-in impact data and batch input loading

pub mod batch_csv;
pub mod impact_table;

pub use batch_csv::{
    load_requests_from_csv, load_requests_from_reader, AnalysisRequest, CsvLoaderError,
};
pub use impact_table::StaticImpactTable;
