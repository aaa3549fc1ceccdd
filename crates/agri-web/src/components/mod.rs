//! Reusable UI Components

pub mod charts;
mod chatbot;
mod footer;
pub mod landing;
mod navbar;
mod status;
mod toast;

pub use charts::{BarChart, PieChart, ProgressBar};
pub use chatbot::Chatbot;
pub use footer::Footer;
pub use navbar::Navbar;
pub use status::ConnectionStatus;
pub use toast::Toasts;
