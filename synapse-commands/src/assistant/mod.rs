pub mod biotech;
pub mod desci;
pub mod interpret;
pub mod medinfo;
pub mod reply;
