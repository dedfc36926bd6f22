pub mod cursor;
pub mod palette;
pub mod viewport;
pub mod window_dimensions;
