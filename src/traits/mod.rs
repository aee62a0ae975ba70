pub mod processor;

pub use processor::{DocumentProcessor, ProcessSummary};
