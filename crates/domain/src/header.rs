//! Header layout — the logo column and the brand-wrap title column.

/// Relative widths of the logo column and the title column.
pub const COLUMN_RATIO: [u32; 2] = [1, 10];

/// Rendered width of the logo, in pixels.
pub const LOGO_WIDTH_PX: u32 = 64;
