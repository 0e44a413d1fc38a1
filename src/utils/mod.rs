mod response_util;
mod template_util;
mod text_util;

pub use response_util::*;
pub use template_util::*;
pub use text_util::*;
