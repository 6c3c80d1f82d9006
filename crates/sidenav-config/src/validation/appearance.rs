//! Content, backdrop, and shadow appearance validation.

use crate::colors;
use crate::schema::SideNavConfig;

use super::helpers::{validate_non_negative, validate_range};

pub(crate) fn validate_content(errors: &mut Vec<String>, config: &SideNavConfig) {
    validate_range(errors, "content.scale", config.content.scale, 0.0, 1.0);
    validate_range(errors, "content.opacity", config.content.opacity, 0.0, 1.0);
    if !colors::validate_color(&config.content.backdrop_color) {
        errors.push(format!(
            "content.backdrop_color = {:?} is not a valid color",
            config.content.backdrop_color
        ));
    }
}

pub(crate) fn validate_shadow(errors: &mut Vec<String>, config: &SideNavConfig) {
    validate_range(errors, "shadow.opacity", config.shadow.opacity, 0.0, 1.0);
    validate_non_negative(errors, "shadow.radius", config.shadow.radius);
}
