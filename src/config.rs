//! Typed values for multi-bit configuration fields.

use bitflags::bitflags;

bitflags! {
    /// Interrupt sources, laid out as in INT_STATUS and INT_EN.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interrupts: u8 {
        /// A key, GPI or logic event entered the FIFO.
        const EVENT = 1 << 0;
        /// A GPI configured for interrupts changed.
        const GPI = 1 << 1;
        /// An event arrived while the FIFO was full.
        const OVERFLOW = 1 << 2;
        /// The keypad lock state changed.
        const LOCK = 1 << 3;
        const LOGIC1 = 1 << 4;
        const LOGIC2 = 1 << 5;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Interrupts {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Interrupts({=u8:#b})", self.bits())
    }
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Raw, right-justified field value.
            pub const fn bits(self) -> u8 {
                self as u8
            }

            /// Parses a right-justified field value.
            pub const fn from_bits(bits: u8) -> Option<Self> {
                $(if bits == $value {
                    return Some($name::$variant);
                })+
                None
            }
        }
    };
}

field_enum! {
    /// Keypad scan cycle (KEY_POLL_TIME).
    pub enum PollTime {
        Ms10 = 0,
        Ms20 = 1,
        Ms30 = 2,
        Ms40 = 3,
    }
}

field_enum! {
    /// Internal oscillator frequency (CORE_FREQ).
    pub enum CoreFrequency {
        Khz50 = 0,
        Khz100 = 1,
        Khz200 = 2,
        Khz500 = 3,
    }
}

field_enum! {
    /// Function of a logic block (LOGICx_SEL).
    pub enum LogicFunction {
        Off = 0,
        And = 1,
        Or = 2,
        Xor = 3,
        FlipFlop = 4,
        /// Pass input A through.
        InA = 5,
        /// Pass input B through.
        InB = 6,
        /// Pass input C through.
        InC = 7,
    }
}

field_enum! {
    /// Width of the generated reset pulse (RESET_PULSE_WIDTH).
    pub enum ResetPulseWidth {
        Us500 = 0,
        Ms1 = 1,
        Ms2 = 2,
        Ms10 = 3,
    }
}

field_enum! {
    /// How long the reset events must be held (RESET_TRIGGER_TIME).
    pub enum ResetTriggerTime {
        Immediate = 0,
        S1_0 = 1,
        S1_5 = 2,
        S2_0 = 3,
        S2_5 = 4,
        S3_0 = 5,
        S3_5 = 6,
        S4_0 = 7,
    }
}

field_enum! {
    /// Pull resistor of one keypad row or column (R_PULL_CFG / C_PULL_CFG).
    pub enum Pull {
        Up300k = 0,
        Down300k = 1,
        Up100k = 2,
        Disabled = 3,
    }
}

/// Keypad matrix and scan setup applied by `configure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Rows in the matrix, bit n = row n.
    pub rows: u8,
    /// Columns in the matrix, bit n = column n (0..=10).
    pub cols: u16,
    pub poll_time: PollTime,
    pub core_frequency: CoreFrequency,
    /// Interrupt sources routed to the INT pin.
    pub interrupts: Interrupts,
}

impl KeypadConfig {
    /// Four rows by four columns with event and overflow interrupts, matching
    /// the default key map.
    pub const fn kypd() -> Self {
        Self {
            rows: 0x0F,
            cols: 0x000F,
            poll_time: PollTime::Ms10,
            core_frequency: CoreFrequency::Khz50,
            interrupts: Interrupts::EVENT.union(Interrupts::OVERFLOW),
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self::kypd()
    }
}
