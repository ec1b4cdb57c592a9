#![allow(hidden_glob_reexports)]
#![allow(clippy::async_yields_async)]
mod check_files;
mod contact;
mod download;
mod health_check;
mod home;

pub use check_files::*;
pub use contact::*;
pub use download::*;
pub use health_check::*;
pub use home::*;
