pub mod file_writer;
pub mod manifest_file;

pub use file_writer::FileWriter;
pub use manifest_file::JsonManifestFile;
