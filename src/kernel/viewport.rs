/// Widths strictly below this many logical pixels count as narrow.
pub const NARROW_BREAKPOINT_PX: u32 = 768;

pub fn is_narrow(width_px: u32) -> bool {
    width_px < NARROW_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub width_px: Option<u32>,
    pub narrow: bool,
}

impl ViewportState {
    /// No display to measure yet: report wide so the first layout is stable.
    pub fn headless() -> Self {
        Self {
            width_px: None,
            narrow: false,
        }
    }

    pub fn measured(width_px: u32) -> Self {
        Self {
            width_px: Some(width_px),
            narrow: is_narrow(width_px),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewport.rs"]
mod tests;
