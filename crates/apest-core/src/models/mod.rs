pub mod assessment;
pub mod content;
pub mod dimension;
pub mod question;
pub mod response;
pub mod user_assessment;
