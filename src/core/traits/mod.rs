pub mod persister;
