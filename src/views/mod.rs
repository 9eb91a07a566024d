//! The views module contains the components for all Layouts and Routes for our app.
//!
//! Each landing page variant is a thin route component over [`LandingPage`],
//! which owns the section tracker for as long as the variant is mounted.

mod landing;
pub use landing::LandingPage;

mod navbar;
pub use navbar::Navbar;

mod home;
pub use home::Home;

mod clinicians;
pub use clinicians::Clinicians;

mod get_started;
pub use get_started::GetStarted;
