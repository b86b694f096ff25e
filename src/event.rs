//! Event byte codec.
//!
//! The FIFO, lock, unlock and reset-event registers all carry the same one
//! byte event format: bit 7 is the state (1 = pressed / active) and bits 6..0
//! hold a 1-based event number. The number range selects what raised the
//! event:
//!
//! | event number | source                                   |
//! |--------------|------------------------------------------|
//! | 1..=88       | key matrix, `1 + row * COLS + col`       |
//! | 89..=96      | row shorted to ground, `89 + row`        |
//! | 97..=115     | GPI 1..=19, `96 + gpi`                   |
//! | 116..=117    | logic block 1..=2, `115 + logic`         |
//!
//! Event number 0 means "no event"; 118..=127 are unassigned. Both decode to
//! nothing rather than to an error.

use crate::register::{
    REG_EXT_LOCK_EVENT, REG_FIFO_1, REG_RESET1_EVENT_A, REG_RESET1_EVENT_B, REG_RESET1_EVENT_C,
    REG_RESET2_EVENT_A, REG_RESET2_EVENT_B, REG_UNLOCK1, REG_UNLOCK2,
};
use crate::{COLS, GPIOS, LOGIC_BLOCKS, ROWS};

/// Key value marking an unmapped key-map cell or a non-key event.
pub const NO_KEY: i32 = -1;
/// Field value marking a coordinate or number that does not apply.
pub const NOT_APPLICABLE: u8 = 0xFF;

const STATE_BIT: u8 = 0x80;
const NUMBER_MASK: u8 = 0x7F;

/// Last key-matrix event number.
pub(crate) const KEY_LAST: u8 = ROWS * COLS;
/// Last row-to-ground event number.
pub(crate) const ROW_GROUND_LAST: u8 = ROWS * (COLS + 1);
/// Last GPI event number.
pub(crate) const GPI_LAST: u8 = ROW_GROUND_LAST + GPIOS;
/// Last logic-block event number.
pub(crate) const LOGIC_LAST: u8 = GPI_LAST + LOGIC_BLOCKS;

/// What raised an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// A key at the crossing of `row` (0..=7) and `col` (0..=10).
    Key { row: u8, col: u8 },
    /// Row `row` (0..=7) connected straight to ground, no column involved.
    RowGround { row: u8 },
    /// General purpose input 1..=19.
    Gpi(u8),
    /// Logic block output 1..=2.
    Logic(u8),
}

impl EventKind {
    /// Classifies a 7-bit event number.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=KEY_LAST => {
                let index = number - 1;
                Some(EventKind::Key {
                    row: index / COLS,
                    col: index % COLS,
                })
            }
            n if n <= ROW_GROUND_LAST && n > KEY_LAST => Some(EventKind::RowGround {
                row: n - (KEY_LAST + 1),
            }),
            n if n <= GPI_LAST && n > ROW_GROUND_LAST => Some(EventKind::Gpi(n - ROW_GROUND_LAST)),
            n if n <= LOGIC_LAST && n > GPI_LAST => Some(EventKind::Logic(n - GPI_LAST)),
            _ => None,
        }
    }

    /// The 7-bit event number, or `None` when a coordinate or number lies
    /// outside the device geometry.
    pub const fn number(self) -> Option<u8> {
        match self {
            EventKind::Key { row, col } if row < ROWS && col < COLS => Some(1 + row * COLS + col),
            EventKind::RowGround { row } if row < ROWS => Some(KEY_LAST + 1 + row),
            EventKind::Gpi(gpi) if gpi >= 1 && gpi <= GPIOS => Some(ROW_GROUND_LAST + gpi),
            EventKind::Logic(logic) if logic >= 1 && logic <= LOGIC_BLOCKS => {
                Some(GPI_LAST + logic)
            }
            _ => None,
        }
    }
}

/// A decoded event: its source and whether it is a press / activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Event {
    pub kind: EventKind,
    /// `true` for pressed / active, `false` for released / inactive.
    pub active: bool,
}

impl Event {
    pub const fn new(kind: EventKind, active: bool) -> Self {
        Self { kind, active }
    }

    /// Decodes an event byte. Returns `None` for "no event" and for
    /// unassigned event numbers.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match EventKind::from_number(byte & NUMBER_MASK) {
            Some(kind) => Some(Self::new(kind, byte & STATE_BIT != 0)),
            None => None,
        }
    }

    /// Encodes the event, or returns `None` when its kind is out of range.
    pub const fn to_byte(self) -> Option<u8> {
        match self.kind.number() {
            Some(number) if self.active => Some(number | STATE_BIT),
            Some(number) => Some(number),
            None => None,
        }
    }
}

/// Flattened view of an event, one field per possible payload.
///
/// Fields that do not apply hold [`NO_KEY`] / [`NOT_APPLICABLE`]. This is the
/// shape used where callers want every value at once; inside the driver
/// events travel as [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventFields {
    pub key_val: i32,
    pub row: u8,
    pub col: u8,
    pub gpi: u8,
    pub logic: u8,
    /// 1 for pressed / active, 0 for released / inactive.
    pub state: u8,
}

impl Default for EventFields {
    fn default() -> Self {
        Self {
            key_val: NO_KEY,
            row: NOT_APPLICABLE,
            col: NOT_APPLICABLE,
            gpi: NOT_APPLICABLE,
            logic: NOT_APPLICABLE,
            state: 0,
        }
    }
}

impl EventFields {
    /// Fields naming a key by its key-map value only.
    pub fn key(key_val: i32, active: bool) -> Self {
        Self {
            key_val,
            state: active as u8,
            ..Self::default()
        }
    }

    /// Fields naming a general purpose input.
    pub fn gpi(gpi: u8, active: bool) -> Self {
        Self {
            gpi,
            state: active as u8,
            ..Self::default()
        }
    }

    /// Fields naming a logic block.
    pub fn logic(logic: u8, active: bool) -> Self {
        Self {
            logic,
            state: active as u8,
            ..Self::default()
        }
    }

    /// Flattens a decoded event. `key_val` is the key-map value for key
    /// events and ignored otherwise.
    pub fn from_event(event: Event, key_val: i32) -> Self {
        let mut fields = Self {
            state: event.active as u8,
            ..Self::default()
        };
        match event.kind {
            EventKind::Key { row, col } => {
                fields.key_val = key_val;
                fields.row = row;
                fields.col = col;
            }
            EventKind::RowGround { row } => fields.row = row,
            EventKind::Gpi(gpi) => fields.gpi = gpi,
            EventKind::Logic(logic) => fields.logic = logic,
        }
        fields
    }

    /// Returns `true` when any keyboard field (key value, row, column) is set.
    pub fn is_keyboard(&self) -> bool {
        self.key_val != NO_KEY || self.row != NOT_APPLICABLE || self.col != NOT_APPLICABLE
    }
}

/// Registers holding a single event byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventRegister {
    /// FIFO head. Reading pops the oldest event.
    Fifo,
    /// Event that locks the keypad.
    ExtLock,
    /// First event of the unlock sequence.
    Unlock1,
    /// Second event of the unlock sequence.
    Unlock2,
    Reset1A,
    Reset1B,
    Reset1C,
    Reset2A,
    Reset2B,
}

impl EventRegister {
    pub const fn address(self) -> u8 {
        match self {
            EventRegister::Fifo => REG_FIFO_1,
            EventRegister::ExtLock => REG_EXT_LOCK_EVENT,
            EventRegister::Unlock1 => REG_UNLOCK1,
            EventRegister::Unlock2 => REG_UNLOCK2,
            EventRegister::Reset1A => REG_RESET1_EVENT_A,
            EventRegister::Reset1B => REG_RESET1_EVENT_B,
            EventRegister::Reset1C => REG_RESET1_EVENT_C,
            EventRegister::Reset2A => REG_RESET2_EVENT_A,
            EventRegister::Reset2B => REG_RESET2_EVENT_B,
        }
    }

    /// The FIFO is filled by the chip; every other event register is
    /// configuration.
    pub const fn is_writable(self) -> bool {
        !matches!(self, EventRegister::Fifo)
    }
}
