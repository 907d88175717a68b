//! Unit tests for configuration loading and conversion.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: API key, removal control, and log file resolution
//! - `conversion`: Catalog and widget settings construction
//! - `validation`: Configuration consistency validation tests

mod conversion;
mod field_resolution;
mod helpers;
mod validation;
