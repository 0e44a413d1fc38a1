mod health_check;
mod home;
mod newsletter;

// re-export
pub use health_check::*;
pub use home::*;
pub use newsletter::*;
