pub mod config;
pub mod error;
pub mod form;
pub mod nav;
pub mod notify;
pub mod presenter;
pub mod scroll;
pub mod settings;
pub mod site;
pub mod state;
pub mod theme;
pub mod validation;

pub mod prelude;

pub use site::{Services, Site};
