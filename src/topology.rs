//! Static wiring of the 18-LED spiral.
//!
//! The panel is three arms of six colour slots each, wired to the SN3218's
//! channels in a fixed order. The map below is the exact board layout; any
//! permutation still drives valid channels, it just scrambles the visuals.

/// Number of physical LED channels on the panel.
pub const LED_COUNT: usize = 18;

/// One of the three LED spiral arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Arm {
    Top = 0,
    Left = 1,
    Right = 2,
}

impl Arm {
    /// All arms, in snake sweep order.
    pub const ALL: [Self; 3] = [Self::Top, Self::Left, Self::Right];
}

/// One of the six colour slots along each arm, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Colour {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    White = 5,
}

impl Colour {
    /// All colour slots, innermost first.
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::White,
    ];
}

// Channel assignments per (arm, colour). Total and injective onto 0..17.
const CHANNEL_MAP: [[u8; 6]; 3] = [
    [6, 7, 8, 5, 4, 9],       // top
    [0, 1, 2, 3, 14, 12],     // left
    [17, 16, 15, 13, 11, 10], // right
];

/// Physical channel driving the given arm/colour position.
pub const fn channel_for(arm: Arm, colour: Colour) -> usize {
    CHANNEL_MAP[arm as usize][colour as usize] as usize
}
