//! Register values for bringing up the sensor peripherals on a TM4C123.
//!
//! Only the numbers live here, so they can be checked on the host. Writing them to
//! the general-purpose timer (GPTM) and GPIO blocks is up to the board.

/// GPTMCFG: split the timer into 16-bit halves.
pub const CFG_16_BIT: u32 = 0x04;

/// GPTMTAMR: capture mode.
pub const TAMR_CAPTURE: u32 = 0x03;
/// GPTMTAMR: periodic mode.
pub const TAMR_PERIODIC: u32 = 0x02;
/// GPTMTAMR: edge-time capture.
pub const TAMR_EDGE_TIME: u32 = 0x04;
/// GPTMTAMR: count up.
pub const TAMR_COUNT_UP: u32 = 0x10;

/// GPTMCTL: timer A enable.
pub const CTL_ENABLE: u32 = 0x01;
/// GPTMCTL: timer A event on both edges.
pub const CTL_BOTH_EDGES: u32 = 0x0C;

/// GPTMRIS / GPTMICR: timer A time-out.
pub const TIMEOUT_FLAG: u32 = 0x01;
/// GPTMRIS / GPTMICR: timer A capture event.
pub const CAPTURE_EVENT_FLAG: u32 = 0x04;

/// A single GPIO line of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMask(u32);

impl PinMask {
    pub const fn bit(pin: u8) -> Self {
        Self(1 << pin)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn pin(self) -> u32 {
        self.0.trailing_zeros()
    }
}

/// A port's or timer's bit in the RCGCGPIO / RCGCTIMER clock gating registers.
pub const fn clock_gate(index: u8) -> u32 {
    1 << index
}

/// A timer latching its free-running up-count on both edges of its CCP input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTimerSetup {
    pub clock_gate: u32,
    pub cfg: u32,
    pub mode: u32,
    /// Or-ed into GPTMCTL, after the mode, to select the edges.
    pub event: u32,
}

impl CaptureTimerSetup {
    /// Edge-time capture counting up, events on rising and falling edges.
    pub const fn both_edges(timer: u8) -> Self {
        Self {
            clock_gate: clock_gate(timer),
            cfg: CFG_16_BIT,
            mode: TAMR_CAPTURE | TAMR_EDGE_TIME | TAMR_COUNT_UP,
            event: CTL_BOTH_EDGES,
        }
    }
}

/// A timer that times out once per microsecond. It is left disabled; delays enable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimerSetup {
    pub clock_gate: u32,
    pub cfg: u32,
    pub mode: u32,
    pub reload: u32,
}

impl PeriodicTimerSetup {
    /// `clock_hz` must be at least 1 MHz for a one-microsecond period.
    pub const fn microsecond(timer: u8, clock_hz: u32) -> Self {
        Self {
            clock_gate: clock_gate(timer),
            cfg: CFG_16_BIT,
            mode: TAMR_PERIODIC,
            reload: (clock_hz / 1_000_000).saturating_sub(1),
        }
    }
}

/// A digital output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPinSetup {
    pub clock_gate: u32,
    pub mask: PinMask,
}

impl OutputPinSetup {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self {
            clock_gate: clock_gate(port),
            mask: PinMask::bit(pin),
        }
    }
}

/// A digital input routed to a peripheral through the port control mux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateInputSetup {
    pub clock_gate: u32,
    pub mask: PinMask,
    /// The pin's nibble in GPIOPCTL.
    pub pctl_mask: u32,
    pub pctl_value: u32,
}

impl AlternateInputSetup {
    pub const fn new(port: u8, pin: u8, function: u32) -> Self {
        let shift = pin as u32 * 4;
        Self {
            clock_gate: clock_gate(port),
            mask: PinMask::bit(pin),
            pctl_mask: 0x0F << shift,
            pctl_value: (function & 0x0F) << shift,
        }
    }
}
