pub mod pages;
pub mod swagger;
pub mod users;
