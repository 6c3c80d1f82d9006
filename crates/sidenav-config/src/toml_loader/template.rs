//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# SideNav Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[left]
# width = 270.0          # > 0
# bezel_width = 16.0     # >= 0, edge strip that starts an open swipe
# pan_from_bezel = true

[right]
# width = 270.0
# bezel_width = 16.0
# pan_from_bezel = true

[animation]
# duration = 0.5             # seconds, 0.0-10.0
# point_of_no_return = 48.0  # release past this distance commits to open

[content]
# scale = 1.0                # main content scale when fully open, 0.0-1.0
# opacity = 0.4              # backdrop opacity when fully open, 0.0-1.0
# backdrop_color = "#000000"

[shadow]
# opacity = 0.0
# radius = 0.0
# offset_x = 0.0
# offset_y = 0.0

[chrome]
# hide_status_bar = true
# strategy = "status_bar"    # status_bar, window_level
"##
}
