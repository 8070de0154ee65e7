/// Points awarded to the winner of a match
pub const POINTS_FOR_WIN: u32 = 2;

/// Points awarded to the losing side
pub const POINTS_FOR_LOSS: u32 = 0;

/// Points awarded to each side when a match ends without a winner
pub const POINTS_FOR_NO_RESULT: u32 = 1;

/// Legal deliveries in one over
pub const BALLS_PER_OVER: u32 = 6;

/// Decimal places net run rate is reported to
pub const NRR_DECIMALS: u32 = 3;

/// Stage tag used for regular-season fixtures
pub const GROUP_STAGE: &str = "Group";
