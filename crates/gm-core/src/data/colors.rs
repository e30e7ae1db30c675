//! Color indices (xterm 256-color palette)

/// Unstyled
pub const CLR_NONE: u8 = 0;
pub const CLR_FOOD: u8 = 11;
pub const CLR_WALL: u8 = 10;
/// Horizontal wall runs are drawn in a separate color
pub const CLR_WALL_HORIZONTAL: u8 = 12;
pub const CLR_WATER: u8 = 22;
pub const CLR_TREASURE: u8 = 203;
pub const CLR_DOOR: u8 = 233;
