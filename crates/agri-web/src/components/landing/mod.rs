//! Landing Page Sections

mod announcement;
mod faq;
mod pricing;
mod sections;

pub use announcement::AnnouncementBar;
pub use faq::Faq;
pub use pricing::Pricing;
pub use sections::{
    Benefits, CallToAction, Features, Hero, HowItWorks, Stats, Testimonials, TrustedBy,
};
