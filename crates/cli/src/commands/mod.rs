pub mod ls;
pub mod show;
pub mod stamp;
pub mod status;
