pub mod home;
pub mod lens;
pub mod not_found;
