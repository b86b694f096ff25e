//! ADP5589 register map.
//!
//! Register addresses, a [`BitField`] for every named field, and indexed
//! constructors for the per-GPIO and per-pin pull-configuration fields.
//!
//! GPIOs are numbered 1..=19 as in the datasheet: GPIO 1..=8 are rows 0..=7
//! and GPIO 9..=19 are columns 0..=10.

use crate::bitfield::BitField;
use crate::{COLS, GPIOS, ROWS};

pub const REG_ID: u8 = 0x00;
pub const REG_INT_STATUS: u8 = 0x01;
pub const REG_STATUS: u8 = 0x02;
/// Head of the 16-entry event FIFO (FIFO_1). Reading it pops one event.
pub const REG_FIFO_1: u8 = 0x03;
pub const REG_FIFO_16: u8 = 0x12;
pub const REG_GPI_INT_STATUS_A: u8 = 0x13;
pub const REG_GPI_STATUS_A: u8 = 0x16;
pub const REG_RPULL_CONFIG_A: u8 = 0x19;
pub const REG_RPULL_CONFIG_C: u8 = 0x1B;
pub const REG_GPI_INT_LEVEL_A: u8 = 0x1E;
pub const REG_GPI_EVENT_EN_A: u8 = 0x21;
pub const REG_GPI_INTERRUPT_EN_A: u8 = 0x24;
pub const REG_DEBOUNCE_DIS_A: u8 = 0x27;
pub const REG_GPO_DATA_OUT_A: u8 = 0x2A;
pub const REG_GPO_OUT_MODE_A: u8 = 0x2D;
pub const REG_GPIO_DIRECTION_A: u8 = 0x30;
pub const REG_UNLOCK1: u8 = 0x33;
pub const REG_UNLOCK2: u8 = 0x34;
pub const REG_EXT_LOCK_EVENT: u8 = 0x35;
pub const REG_UNLOCK_TIMERS: u8 = 0x36;
pub const REG_LOCK_CFG: u8 = 0x37;
pub const REG_RESET1_EVENT_A: u8 = 0x38;
pub const REG_RESET1_EVENT_B: u8 = 0x39;
pub const REG_RESET1_EVENT_C: u8 = 0x3A;
pub const REG_RESET2_EVENT_A: u8 = 0x3B;
pub const REG_RESET2_EVENT_B: u8 = 0x3C;
pub const REG_RESET_CFG: u8 = 0x3D;
pub const REG_PWM_OFFT_LOW: u8 = 0x3E;
pub const REG_PWM_ONT_LOW: u8 = 0x40;
pub const REG_PWM_CFG: u8 = 0x42;
pub const REG_CLOCK_DIV_CFG: u8 = 0x43;
pub const REG_LOGIC_1_CFG: u8 = 0x44;
pub const REG_LOGIC_2_CFG: u8 = 0x45;
pub const REG_LOGIC_FF_CFG: u8 = 0x46;
pub const REG_LOGIC_INT_EVENT_EN: u8 = 0x47;
pub const REG_POLL_TIME_CFG: u8 = 0x48;
pub const REG_PIN_CONFIG_A: u8 = 0x49;
pub const REG_PIN_CONFIG_D: u8 = 0x4C;
pub const REG_GENERAL_CFG_B: u8 = 0x4D;
pub const REG_INT_EN: u8 = 0x4E;

/// Number of pull-configuration registers (RPULL_CONFIG_A..E).
pub const RPULL_CONFIG_LEN: usize = 5;
/// Number of registers in each GPIO bank (A, B, C).
pub const GPIO_BANK_LEN: usize = 3;

// ID
pub const ID_MAN_ID: BitField = BitField::new(REG_ID, 0xF0);
pub const ID_REV_ID: BitField = BitField::new(REG_ID, 0x0F);

// INT_STATUS (write 1 to clear)
pub const INT_STATUS_EVENT_INT: BitField = BitField::new(REG_INT_STATUS, 0x01);
pub const INT_STATUS_GPI_INT: BitField = BitField::new(REG_INT_STATUS, 0x02);
pub const INT_STATUS_OVERFLOW_INT: BitField = BitField::new(REG_INT_STATUS, 0x04);
pub const INT_STATUS_LOCK_INT: BitField = BitField::new(REG_INT_STATUS, 0x08);
pub const INT_STATUS_LOGIC1_INT: BitField = BitField::new(REG_INT_STATUS, 0x10);
pub const INT_STATUS_LOGIC2_INT: BitField = BitField::new(REG_INT_STATUS, 0x20);

// STATUS
pub const STATUS_EC: BitField = BitField::new(REG_STATUS, 0x1F);
pub const STATUS_LOCK_STAT: BitField = BitField::new(REG_STATUS, 0x20);
pub const STATUS_LOGIC1_STAT: BitField = BitField::new(REG_STATUS, 0x40);
pub const STATUS_LOGIC2_STAT: BitField = BitField::new(REG_STATUS, 0x80);

// Lock / unlock
pub const UNLOCK1_UNLOCK1: BitField = BitField::new(REG_UNLOCK1, 0x7F);
pub const UNLOCK1_UNLOCK1_STATE: BitField = BitField::new(REG_UNLOCK1, 0x80);
pub const UNLOCK2_UNLOCK2: BitField = BitField::new(REG_UNLOCK2, 0x7F);
pub const UNLOCK2_UNLOCK2_STATE: BitField = BitField::new(REG_UNLOCK2, 0x80);
pub const EXT_LOCK_EVENT_EXT_LOCK_EVENT: BitField = BitField::new(REG_EXT_LOCK_EVENT, 0x7F);
pub const EXT_LOCK_EVENT_EXT_LOCK_STATE: BitField = BitField::new(REG_EXT_LOCK_EVENT, 0x80);
pub const UNLOCK_TIMERS_UNLOCK_TIMER: BitField = BitField::new(REG_UNLOCK_TIMERS, 0x07);
pub const UNLOCK_TIMERS_INT_MASK_TIMER: BitField = BitField::new(REG_UNLOCK_TIMERS, 0xF8);
pub const LOCK_CFG_LOCK_EN: BitField = BitField::new(REG_LOCK_CFG, 0x01);

// Reset events
pub const RESET1_EVENT_A_RESET1_EVENT_A: BitField = BitField::new(REG_RESET1_EVENT_A, 0x7F);
pub const RESET1_EVENT_A_LEVEL: BitField = BitField::new(REG_RESET1_EVENT_A, 0x80);
pub const RESET1_EVENT_B_RESET1_EVENT_B: BitField = BitField::new(REG_RESET1_EVENT_B, 0x7F);
pub const RESET1_EVENT_B_LEVEL: BitField = BitField::new(REG_RESET1_EVENT_B, 0x80);
pub const RESET1_EVENT_C_RESET1_EVENT_C: BitField = BitField::new(REG_RESET1_EVENT_C, 0x7F);
pub const RESET1_EVENT_C_LEVEL: BitField = BitField::new(REG_RESET1_EVENT_C, 0x80);
pub const RESET2_EVENT_A_RESET2_EVENT_A: BitField = BitField::new(REG_RESET2_EVENT_A, 0x7F);
pub const RESET2_EVENT_A_LEVEL: BitField = BitField::new(REG_RESET2_EVENT_A, 0x80);
pub const RESET2_EVENT_B_RESET2_EVENT_B: BitField = BitField::new(REG_RESET2_EVENT_B, 0x7F);
pub const RESET2_EVENT_B_LEVEL: BitField = BitField::new(REG_RESET2_EVENT_B, 0x80);

// RESET_CFG
pub const RESET_CFG_RESET_PULSE_WIDTH: BitField = BitField::new(REG_RESET_CFG, 0x03);
pub const RESET_CFG_RESET_TRIGGER_TIME: BitField = BitField::new(REG_RESET_CFG, 0x1C);
pub const RESET_CFG_RST_PASSTHRU_EN: BitField = BitField::new(REG_RESET_CFG, 0x20);
pub const RESET_CFG_RESET1_POL: BitField = BitField::new(REG_RESET_CFG, 0x40);
pub const RESET_CFG_RESET2_POL: BitField = BitField::new(REG_RESET_CFG, 0x80);

// PWM_CFG
pub const PWM_CFG_PWM_EN: BitField = BitField::new(REG_PWM_CFG, 0x01);
pub const PWM_CFG_PWM_MODE: BitField = BitField::new(REG_PWM_CFG, 0x02);
pub const PWM_CFG_PWM_IN_AND: BitField = BitField::new(REG_PWM_CFG, 0x04);

// CLOCK_DIV_CFG
pub const CLOCK_DIV_CFG_CLK_DIV_EN: BitField = BitField::new(REG_CLOCK_DIV_CFG, 0x01);
pub const CLOCK_DIV_CFG_CLK_DIV: BitField = BitField::new(REG_CLOCK_DIV_CFG, 0x3E);
pub const CLOCK_DIV_CFG_CLK_INV: BitField = BitField::new(REG_CLOCK_DIV_CFG, 0x40);

// LOGIC_1_CFG / LOGIC_2_CFG
pub const LOGIC_1_CFG_LOGIC1_SEL: BitField = BitField::new(REG_LOGIC_1_CFG, 0x07);
pub const LOGIC_1_CFG_LA1_INV: BitField = BitField::new(REG_LOGIC_1_CFG, 0x08);
pub const LOGIC_1_CFG_LB1_INV: BitField = BitField::new(REG_LOGIC_1_CFG, 0x10);
pub const LOGIC_1_CFG_LC1_INV: BitField = BitField::new(REG_LOGIC_1_CFG, 0x20);
pub const LOGIC_1_CFG_LY1_INV: BitField = BitField::new(REG_LOGIC_1_CFG, 0x40);
pub const LOGIC_2_CFG_LOGIC2_SEL: BitField = BitField::new(REG_LOGIC_2_CFG, 0x07);
pub const LOGIC_2_CFG_LA2_INV: BitField = BitField::new(REG_LOGIC_2_CFG, 0x08);
pub const LOGIC_2_CFG_LB2_INV: BitField = BitField::new(REG_LOGIC_2_CFG, 0x10);
pub const LOGIC_2_CFG_LC2_INV: BitField = BitField::new(REG_LOGIC_2_CFG, 0x20);
pub const LOGIC_2_CFG_LY2_INV: BitField = BitField::new(REG_LOGIC_2_CFG, 0x40);
pub const LOGIC_2_CFG_LY1_CASCADE: BitField = BitField::new(REG_LOGIC_2_CFG, 0x80);

// LOGIC_FF_CFG
pub const LOGIC_FF_CFG_FF1_CLR: BitField = BitField::new(REG_LOGIC_FF_CFG, 0x01);
pub const LOGIC_FF_CFG_FF1_SET: BitField = BitField::new(REG_LOGIC_FF_CFG, 0x02);
pub const LOGIC_FF_CFG_FF2_CLR: BitField = BitField::new(REG_LOGIC_FF_CFG, 0x04);
pub const LOGIC_FF_CFG_FF2_SET: BitField = BitField::new(REG_LOGIC_FF_CFG, 0x08);

// LOGIC_INT_EVENT_EN
pub const LOGIC_INT_EVENT_EN_LOGIC1_INT_LEVEL: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x01);
pub const LOGIC_INT_EVENT_EN_LOGIC1_EVENT_EN: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x02);
pub const LOGIC_INT_EVENT_EN_LY1_DBNC_DIS: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x04);
pub const LOGIC_INT_EVENT_EN_LOGIC2_INT_LEVEL: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x08);
pub const LOGIC_INT_EVENT_EN_LOGIC2_EVENT_EN: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x10);
pub const LOGIC_INT_EVENT_EN_LY2_DBNC_DIS: BitField = BitField::new(REG_LOGIC_INT_EVENT_EN, 0x20);

// POLL_TIME_CFG
pub const POLL_TIME_CFG_KEY_POLL_TIME: BitField = BitField::new(REG_POLL_TIME_CFG, 0x03);

// PIN_CONFIG_D
pub const PIN_CONFIG_D_R0_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x01);
pub const PIN_CONFIG_D_C9_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x02);
pub const PIN_CONFIG_D_R3_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x0C);
pub const PIN_CONFIG_D_C6_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x10);
pub const PIN_CONFIG_D_R4_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x20);
pub const PIN_CONFIG_D_C4_EXTEND: BitField = BitField::new(REG_PIN_CONFIG_D, 0x40);
pub const PIN_CONFIG_D_PULL_SELECT: BitField = BitField::new(REG_PIN_CONFIG_D, 0x80);

// GENERAL_CFG_B
pub const GENERAL_CFG_B_RST_CFG: BitField = BitField::new(REG_GENERAL_CFG_B, 0x01);
pub const GENERAL_CFG_B_INT_CFG: BitField = BitField::new(REG_GENERAL_CFG_B, 0x02);
pub const GENERAL_CFG_B_LCK_TRK_GPI: BitField = BitField::new(REG_GENERAL_CFG_B, 0x08);
pub const GENERAL_CFG_B_LCK_TRK_LOGIC: BitField = BitField::new(REG_GENERAL_CFG_B, 0x10);
pub const GENERAL_CFG_B_CORE_FREQ: BitField = BitField::new(REG_GENERAL_CFG_B, 0x60);
pub const GENERAL_CFG_B_OSC_EN: BitField = BitField::new(REG_GENERAL_CFG_B, 0x80);

// INT_EN
pub const INT_EN_EVENT_IEN: BitField = BitField::new(REG_INT_EN, 0x01);
pub const INT_EN_GPI_IEN: BitField = BitField::new(REG_INT_EN, 0x02);
pub const INT_EN_OVERFLOW_IEN: BitField = BitField::new(REG_INT_EN, 0x04);
pub const INT_EN_LOCK_IEN: BitField = BitField::new(REG_INT_EN, 0x08);
pub const INT_EN_LOGIC1_IEN: BitField = BitField::new(REG_INT_EN, 0x10);
pub const INT_EN_LOGIC2_IEN: BitField = BitField::new(REG_INT_EN, 0x20);

/// A group of three consecutive registers holding one bit per GPIO.
///
/// Bit `n - 1` of the little-endian 24-bit bank value belongs to GPIO `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioBank {
    /// GPI interrupt status (read only, cleared on read).
    GpiIntStatus,
    /// Current GPI input level (read only).
    GpiStatus,
    /// GPI interrupt level: 1 = active high.
    GpiIntLevel,
    /// Route GPI transitions into the event FIFO.
    GpiEventEnable,
    /// Raise GPI_INT for the GPI.
    GpiInterruptEnable,
    /// Disable input debounce.
    DebounceDisable,
    /// GPO output level.
    GpoDataOut,
    /// GPO drive mode: 1 = open drain.
    GpoOutMode,
    /// Direction: 1 = output.
    Direction,
}

impl GpioBank {
    /// Address of the bank's first (A) register.
    pub const fn base(self) -> u8 {
        match self {
            GpioBank::GpiIntStatus => REG_GPI_INT_STATUS_A,
            GpioBank::GpiStatus => REG_GPI_STATUS_A,
            GpioBank::GpiIntLevel => REG_GPI_INT_LEVEL_A,
            GpioBank::GpiEventEnable => REG_GPI_EVENT_EN_A,
            GpioBank::GpiInterruptEnable => REG_GPI_INTERRUPT_EN_A,
            GpioBank::DebounceDisable => REG_DEBOUNCE_DIS_A,
            GpioBank::GpoDataOut => REG_GPO_DATA_OUT_A,
            GpioBank::GpoOutMode => REG_GPO_OUT_MODE_A,
            GpioBank::Direction => REG_GPIO_DIRECTION_A,
        }
    }

    /// Status banks are maintained by the chip and cannot be written.
    pub const fn is_writable(self) -> bool {
        !matches!(self, GpioBank::GpiIntStatus | GpioBank::GpiStatus)
    }

    /// Descriptor of GPIO `gpio` (1..=19) in this bank.
    pub const fn bit(self, gpio: u8) -> Option<BitField> {
        if gpio < 1 || gpio > GPIOS {
            return None;
        }
        let index = gpio - 1;
        BitField::try_new(self.base() + index / 8, 1 << (index % 8))
    }
}

/// Mask of the 19 valid bits in a GPIO bank value.
pub const GPIO_BANK_MASK: u32 = (1u32 << GPIOS as u32) - 1;

/// Pull-resistor field of keypad row `row` (0..=7).
pub const fn row_pull(row: u8) -> Option<BitField> {
    if row >= ROWS {
        return None;
    }
    BitField::try_new(REG_RPULL_CONFIG_A + row / 4, 0b11 << ((row % 4) * 2))
}

/// Pull-resistor field of keypad column `col` (0..=10).
pub const fn col_pull(col: u8) -> Option<BitField> {
    if col >= COLS {
        return None;
    }
    BitField::try_new(REG_RPULL_CONFIG_C + col / 4, 0b11 << ((col % 4) * 2))
}
