pub mod builder;
pub mod models;
pub mod template;

pub use builder::compose;
pub use models::DemoRequest;
pub use template::{format_submitted_at, render_html, render_text};

pub const PRODUCT_NAME: &str = "BeanHealth";
pub const SUBJECT: &str = "🔔 New Demo Request - BeanHealth";
