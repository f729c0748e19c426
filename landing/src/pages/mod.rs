// Landing page routes

mod landing;

pub use landing::LandingPage;
