//! Panel geometry and commit threshold validation.

use crate::schema::{PanelConfig, SideNavConfig};

use super::helpers::{validate_non_negative, validate_positive, validate_range};

fn validate_panel(errors: &mut Vec<String>, prefix: &str, panel: &PanelConfig) {
    validate_positive(errors, &format!("{prefix}.width"), panel.width);
    validate_non_negative(errors, &format!("{prefix}.bezel_width"), panel.bezel_width);
}

/// Validate both panels and the settle animation settings.
pub(crate) fn validate_panels(errors: &mut Vec<String>, config: &SideNavConfig) {
    validate_panel(errors, "left", &config.left);
    validate_panel(errors, "right", &config.right);

    let duration = config.animation.duration;
    if !(duration > 0.0 && duration <= 10.0) {
        errors.push(format!(
            "animation.duration = {duration} is out of range (0, 10]"
        ));
    }

    let ponr = config.animation.point_of_no_return;
    let narrowest = config.left.width.min(config.right.width);
    validate_range(errors, "animation.point_of_no_return", ponr, 0.0, narrowest);
}
