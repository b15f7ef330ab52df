//! Asset tools - image utilities for the website's static assets
//!
//! Logo recoloring, SVG patch logos, HEIC conversion, dimension reports and
//! downscaling of oversized images. This library exposes modules for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;
