mod link;
mod reminder;
mod status;
mod user;

pub mod dtos {
    pub use crate::link::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::link::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
