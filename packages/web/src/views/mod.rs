mod about;
pub use about::{About, DespreNoi};

mod blog;
pub use blog::Blog;

mod contact;
pub use contact::Contact;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;

mod services;
pub use services::{Services, Servicii};
