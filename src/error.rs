use core::fmt;

/// Which echo transition a measurement was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Every fallible operation in the crate returns this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bounded echo wait ran out of polls before the edge was captured.
    /// Only reported when `Config::echo_wait` is `WaitLimit::Polls`.
    Timeout(Edge),
    /// The trigger pin could not be driven.
    Trigger,
    /// One of the indicator LED pins could not be driven.
    Led,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(edge) => write!(f, "timeout waiting for {edge} echo edge"),
            Self::Trigger => write!(f, "error driving trigger pin"),
            Self::Led => write!(f, "error driving indicator LED"),
        }
    }
}
