mod app_const;

pub use app_const::*;
