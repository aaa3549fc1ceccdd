//! Page Components

mod auth;
mod dashboard;
mod landing;
mod not_found;
mod profile;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
