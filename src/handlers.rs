mod aggregate_handlers;
mod entry_handlers;
mod funds_handlers;
mod member_handlers;

pub use self::aggregate_handlers::*;
pub use self::entry_handlers::*;
pub use self::funds_handlers::*;
pub use self::member_handlers::*;
