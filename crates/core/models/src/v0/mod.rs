mod reports;
mod users;

pub use reports::*;
pub use users::*;
