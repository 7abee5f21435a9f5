//! Output writers: PNG icons and the web app manifest `icons` fragment.
pub mod png;
pub mod webmanifest;
