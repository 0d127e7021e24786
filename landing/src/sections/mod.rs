// Landing page sections
// Developed by the Touch Learn web team (c)2025

mod footer;
mod hero;
mod market;
mod nav;
mod personas;
mod problem;
mod progress_bar;
mod splash;
mod team;

pub use footer::Footer;
pub use hero::Hero;
pub use market::Market;
pub use nav::Nav;
pub use personas::Personas;
pub use problem::Problem;
pub use progress_bar::ScrollProgressBar;
pub use splash::LoadSplash;
pub use team::Team;
