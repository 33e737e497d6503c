pub mod config;
pub mod logging;

pub mod location;
pub mod redirect;

pub use location::{Location, Navigation, StaticLocation};
pub use redirect::{
    redirect, Diagnostics, RedirectError, RedirectOptions, RedirectResolver, ResolvedTarget,
    TracingDiagnostics,
};
