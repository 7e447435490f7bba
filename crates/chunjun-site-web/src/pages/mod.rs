//! Page components

mod home;
mod not_found;
mod route_page;

pub use home::Home;
pub use not_found::NotFound;
pub use route_page::RoutePage;
