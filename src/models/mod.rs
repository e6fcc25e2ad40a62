mod contact;
mod phone;
mod speed_dial;

pub use contact::*;
pub use phone::*;
pub use speed_dial::*;
