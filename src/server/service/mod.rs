pub mod amendment;
pub mod application;
pub mod licence;
pub mod returns;
pub mod status;
