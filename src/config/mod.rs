//! Typed views over the two configuration files a Rebar3 application carries
//!
//! - [`AppResource`]: the `.app`/`.app.src` resource file declaring the
//!   application's name and runtime dependency applications
//! - [`RebarConfig`]: the directory's `rebar.config` declaring build
//!   dependencies, include directories and compiler plugins
//!
//! Both loaders return an error for unreadable or unparsable files; during
//! discovery those errors degrade to "no data from this file".

pub mod app_resource;
pub mod rebar_config;

pub use app_resource::AppResource;
pub use rebar_config::RebarConfig;
