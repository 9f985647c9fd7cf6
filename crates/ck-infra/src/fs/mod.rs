mod entry_exporter;

pub use entry_exporter::FileEntryExporter;
