pub mod tsv;

pub use tsv::write_report;
