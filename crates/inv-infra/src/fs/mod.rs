pub mod app_data_dir;

pub use app_data_dir::{default_config_file, default_data_file, logs_dir};
