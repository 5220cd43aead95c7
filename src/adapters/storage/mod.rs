pub mod file_persister;
