//! HLA 1.3 services, one module per management area
//!
//! Each method checks its arguments locally before running one exchange.

mod declaration;
mod ddm;
mod federation;
mod object;
mod ownership;
mod support;
mod time;

use hla_core::{Exception, Result};

/// Reject an absent tag on services that require one
fn required_tag<'a>(service: &str, tag: Option<&'a str>) -> Result<&'a str> {
    tag.ok_or_else(|| Exception::internal(format!("Calling {} with Tag NULL", service)))
}

fn owned_tag(tag: Option<&str>) -> Option<String> {
    tag.map(str::to_owned)
}
