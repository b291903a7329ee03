pub mod curve_file;
pub mod export;
pub mod load_profile;
