pub mod file_update;
pub mod log_file;
pub mod record;
pub mod storage_summary;
