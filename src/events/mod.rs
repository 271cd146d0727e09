pub mod mouse;
pub mod resize;
pub mod touch;

pub use mouse::wire_mouse_handlers;
pub use resize::wire_pad_resize;
pub use touch::wire_touch_handlers;
