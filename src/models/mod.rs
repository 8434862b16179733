pub mod meal;
pub mod user;

pub use meal::*;
pub use user::*;
