mod color_picker;
mod power_toggle;

pub use color_picker::ColorPicker;
pub use power_toggle::PowerToggle;
