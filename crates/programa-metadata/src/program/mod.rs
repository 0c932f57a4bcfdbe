mod spec;
mod status;
mod instance;
mod k8;

pub use self::spec::*;
pub use self::status::*;
pub use self::instance::*;
pub use self::k8::*;
