//! ADP5589 Keypad / GPIO Expander Driver
//!
//! A platform-agnostic driver for the ADP5589 keypad decoder and I/O expander.
//!
//! The ADP5589 scans a keypad matrix of up to 8 rows by 11 columns and queues
//! every key press and release in a 16-entry event FIFO. Pins not used by the
//! matrix act as general purpose I/O. The chip also provides:
//! - Two configurable logic blocks (AND, OR, XOR, flip-flop)
//! - A PWM generator
//! - Keypad lock / unlock sequences and two programmable reset outputs
//! - Interrupt output for events, GPI changes, overflow, lock and logic
//!
//! # Features
//!
//! - `no_std` compatible
//! - Uses `embedded-hal` traits for portability (`async` feature for
//!   `embedded-hal-async`)
//! - Typed event codec with a caller-supplied key map
//! - Bit and bit-group access to every register field through [`BitField`]
//! - Optional `defmt` logging (`defmt` feature)
//!
//! # Example
//!
//! ```ignore
//! use adp5589::{Adp5589, KeypadConfig, DEFAULT_ADDRESS};
//! # let i2c = todo!();
//!
//! let mut keypad = Adp5589::new(i2c, DEFAULT_ADDRESS);
//! keypad.configure(&KeypadConfig::kypd()).unwrap();
//!
//! // Drain the FIFO after the INT pin fires
//! while let Some(event) = keypad.poll_event().unwrap() {
//!     let key = keypad.key_map().key_of(&event);
//!     // ...
//! }
//! ```
//!
//! # Sharing
//!
//! Every operation takes `&mut self` and runs one or more complete bus
//! transactions before returning. A driver used from several tasks must sit
//! behind a single mutex so that the key map and read-modify-write sequences
//! stay consistent.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod bitfield;
pub mod config;
pub mod event;
pub mod keymap;
pub mod register;

#[cfg(feature = "async")]
pub mod async_impl;

use embedded_hal::i2c::{AddressMode, I2c};

pub use bitfield::{mask_to_scale, BitField};
pub use config::{
    CoreFrequency, Interrupts, KeypadConfig, LogicFunction, PollTime, Pull, ResetPulseWidth,
    ResetTriggerTime,
};
pub use event::{Event, EventFields, EventKind, EventRegister, NOT_APPLICABLE, NO_KEY};
pub use keymap::{KeyMap, KeyTable, KEYPAD_KYPD};
pub use register::GpioBank;

#[cfg(feature = "async")]
pub use async_impl::Adp5589Async;

use register::*;

/// Default I2C address of the ADP5589
pub const DEFAULT_ADDRESS: u8 = 0x34;

/// Keypad matrix rows
pub const ROWS: u8 = 8;
/// Keypad matrix columns
pub const COLS: u8 = 11;
/// General purpose I/Os, one per row and column pin
pub const GPIOS: u8 = ROWS + COLS;
/// Logic blocks
pub const LOGIC_BLOCKS: u8 = 2;
/// Depth of the event FIFO
pub const FIFO_DEPTH: usize = 16;

/// Longest block transfer the driver issues (the whole FIFO).
const MAX_BLOCK: usize = FIFO_DEPTH;
/// Valid bits of the keypad column selection.
const COLUMN_MASK: u16 = (1 << COLS) - 1;
/// Event number bits of a FIFO entry; zero means the FIFO is empty.
const EVENT_NUMBER_MASK: u8 = 0x7F;

/// Errors that can occur when interacting with the ADP5589
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adp5589Error<E> {
    /// Invalid argument passed to a method (e.g., GPIO number out of range,
    /// write to a read-only register)
    InvalidArgument,
    /// Value does not fit in the addressed bit field
    ValueOutOfRange,
    /// I2C read operation failed
    ReadError(E),
    /// I2C write operation failed
    WriteError(E),
}

/// ADP5589 driver instance
///
/// Owns the I2C bus handle and the key map used to name key events.
pub struct Adp5589<A: AddressMode, I2C: I2c<A>> {
    i2c: I2C,
    addr: A,
    key_map: KeyMap,
}

impl<A, I2C> Adp5589<A, I2C>
where
    A: AddressMode + Copy,
    I2C: I2c<A>,
{
    /// Creates a new driver instance using the [`KEYPAD_KYPD`] key map.
    ///
    /// # Arguments
    ///
    /// * `i2c` - An I2C bus implementation
    /// * `addr` - The I2C address of the device (0x34)
    pub fn new(i2c: I2C, addr: A) -> Self {
        Self::with_key_map(i2c, addr, &KEYPAD_KYPD)
    }

    /// Creates a new driver instance with a custom key map.
    pub fn with_key_map(i2c: I2C, addr: A, table: &KeyTable) -> Self {
        Self {
            i2c,
            addr,
            key_map: KeyMap::new(*table),
        }
    }

    /// Consumes the driver and returns the I2C bus.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Writes the register address followed by `data` in one transaction.
    fn write_register(&mut self, data: &[u8]) -> Result<(), Adp5589Error<I2C::Error>> {
        self.i2c
            .write(self.addr, data)
            .map_err(Adp5589Error::WriteError)
    }

    fn read_into(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Adp5589Error<I2C::Error>> {
        self.i2c
            .write_read(self.addr, &[reg], buffer)
            .map_err(Adp5589Error::ReadError)
    }

    /// Reads a single register.
    ///
    /// # Errors
    ///
    /// Returns `ReadError` if the I2C transaction fails.
    pub fn get_register(&mut self, reg: u8) -> Result<u8, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 1];
        self.read_into(reg, &mut buffer)?;
        trace!("read register {:#x}={:#b}", reg, buffer[0]);
        Ok(buffer[0])
    }

    /// Writes a single register.
    ///
    /// # Errors
    ///
    /// Returns `WriteError` if the I2C transaction fails.
    pub fn set_register(&mut self, reg: u8, value: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        trace!("write register {:#x}={:#b}", reg, value);
        self.write_register(&[reg, value])
    }

    /// Reads consecutive registers starting at `reg` into `buffer`.
    ///
    /// The chip auto-increments the register address, so one transaction
    /// fills the whole buffer.
    pub fn read_registers(
        &mut self,
        reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.read_into(reg, buffer)?;
        trace!("read {} registers from {:#x}", buffer.len(), reg);
        Ok(())
    }

    /// Writes `values` to consecutive registers starting at `reg`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than 16 values.
    pub fn write_registers(
        &mut self,
        reg: u8,
        values: &[u8],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if values.len() > MAX_BLOCK {
            return Err(Adp5589Error::InvalidArgument);
        }
        let mut buffer = [0u8; MAX_BLOCK + 1];
        buffer[0] = reg;
        buffer[1..=values.len()].copy_from_slice(values);
        trace!("write {} registers from {:#x}", values.len(), reg);
        self.write_register(&buffer[..=values.len()])
    }

    /// Sets (`true`) or clears (`false`) every bit of `field`, leaving the
    /// rest of the register untouched.
    pub fn set_bit(&mut self, field: BitField, value: bool) -> Result<(), Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address())?;
        self.set_register(field.address(), field.apply_flag(current, value))
    }

    /// Returns `true` when any bit of `field` is set.
    pub fn get_bit(&mut self, field: BitField) -> Result<bool, Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address())?;
        Ok(field.is_set(current))
    }

    /// Writes a right-justified `value` into a multi-bit field.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange`, before touching the bus, if `value` does not
    /// fit in the field's mask.
    pub fn set_bit_group(
        &mut self,
        field: BitField,
        value: u8,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let bits = field.position(value).ok_or(Adp5589Error::ValueOutOfRange)?;
        let current = self.get_register(field.address())?;
        self.set_register(field.address(), field.merge(current, bits))
    }

    /// Reads a multi-bit field, right-justified.
    pub fn get_bit_group(&mut self, field: BitField) -> Result<u8, Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address())?;
        Ok(field.extract(current))
    }

    /// Replaces the whole key map.
    pub fn set_key_map(&mut self, table: &KeyTable) {
        self.key_map.replace(table);
    }

    /// The key map used to name key events.
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Reads an event register and decodes it into flattened fields.
    ///
    /// Reading [`EventRegister::Fifo`] pops the oldest event from the FIFO.
    pub fn read_event(
        &mut self,
        register: EventRegister,
    ) -> Result<EventFields, Adp5589Error<I2C::Error>> {
        let byte = self.get_register(register.address())?;
        let fields = self.key_map.decode(byte);
        debug!("event {:#x} from {:?}: key {}", byte, register, fields.key_val);
        Ok(fields)
    }

    /// Pops the oldest event from the FIFO in flattened form.
    pub fn read_fifo(&mut self) -> Result<EventFields, Adp5589Error<I2C::Error>> {
        self.read_event(EventRegister::Fifo)
    }

    /// Pops the oldest event from the FIFO, or returns `None` once it is
    /// empty.
    ///
    /// Entries carrying an unassigned event number (118..=127) are logged and
    /// skipped, so a `while let Some(..)` loop drains the whole FIFO. At most
    /// [`FIFO_DEPTH`] entries are read per call.
    pub fn poll_event(&mut self) -> Result<Option<Event>, Adp5589Error<I2C::Error>> {
        for _ in 0..FIFO_DEPTH {
            let byte = self.get_register(REG_FIFO_1)?;
            if byte & EVENT_NUMBER_MASK == 0 {
                return Ok(None);
            }
            match Event::from_byte(byte) {
                Some(event) => return Ok(Some(event)),
                None => warn!("skipping unassigned event {:#x}", byte),
            }
        }
        Ok(None)
    }

    /// Reads and decodes an event register without the key map.
    ///
    /// Returns `None` when the register holds no event or an unassigned event
    /// number. Reading [`EventRegister::Fifo`] pops the entry.
    pub fn get_event(
        &mut self,
        register: EventRegister,
    ) -> Result<Option<Event>, Adp5589Error<I2C::Error>> {
        let byte = self.get_register(register.address())?;
        Ok(Event::from_byte(byte))
    }

    /// Programs `event` into a lock, unlock or reset-event register.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the FIFO or an event outside the device
    /// geometry.
    pub fn write_event(
        &mut self,
        register: EventRegister,
        event: Event,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if !register.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        let byte = event.to_byte().ok_or(Adp5589Error::InvalidArgument)?;
        self.set_register(register.address(), byte)
    }

    /// Encodes flattened fields with [`KeyMap::encode`] and programs the
    /// result into a lock, unlock or reset-event register.
    ///
    /// Returns the byte written, or `None` when the fields describe no event
    /// (for example a key value missing from the key map); nothing is written
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the FIFO.
    pub fn write_event_fields(
        &mut self,
        register: EventRegister,
        fields: &EventFields,
    ) -> Result<Option<u8>, Adp5589Error<I2C::Error>> {
        if !register.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        match self.key_map.encode(fields) {
            Some(byte) => {
                self.set_register(register.address(), byte)?;
                Ok(Some(byte))
            }
            None => {
                debug!("no event to write to {:?}", register);
                Ok(None)
            }
        }
    }

    /// Programs the key with key-map value `key_val` into an event register.
    ///
    /// Returns the byte written, or `None` (and writes nothing) when the key
    /// is not in the key map.
    pub fn write_key_event(
        &mut self,
        register: EventRegister,
        key_val: i32,
        active: bool,
    ) -> Result<Option<u8>, Adp5589Error<I2C::Error>> {
        self.write_event_fields(register, &EventFields::key(key_val, active))
    }

    /// Enables or disables the keypad lock function.
    pub fn set_lock_enabled(&mut self, enabled: bool) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit(LOCK_CFG_LOCK_EN, enabled)
    }

    /// Returns `true` while the keypad is locked.
    pub fn is_locked(&mut self) -> Result<bool, Adp5589Error<I2C::Error>> {
        self.get_bit(STATUS_LOCK_STAT)
    }

    /// Reads the manufacturer and revision IDs.
    pub fn chip_id(&mut self) -> Result<(u8, u8), Adp5589Error<I2C::Error>> {
        let id = self.get_register(REG_ID)?;
        Ok((ID_MAN_ID.extract(id), ID_REV_ID.extract(id)))
    }

    /// Applies a keypad configuration: matrix pins, scan time, oscillator
    /// and interrupt enables.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `config.cols` selects a column above 10.
    pub fn configure(&mut self, config: &KeypadConfig) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_keypad_pins(config.rows, config.cols)?;
        self.set_poll_time(config.poll_time)?;
        self.set_core_frequency(config.core_frequency)?;
        self.set_bit(GENERAL_CFG_B_OSC_EN, true)?;
        self.configure_interrupts(config.interrupts)
    }

    /// Selects which rows and columns belong to the keypad matrix. Pins left
    /// out stay available as GPIOs.
    ///
    /// # Arguments
    ///
    /// * `rows` - bit n selects row n
    /// * `cols` - bit n selects column n (0..=10)
    pub fn set_keypad_pins(&mut self, rows: u8, cols: u16) -> Result<(), Adp5589Error<I2C::Error>> {
        if cols & !COLUMN_MASK != 0 {
            return Err(Adp5589Error::InvalidArgument);
        }
        self.write_registers(REG_PIN_CONFIG_A, &[rows, cols as u8, (cols >> 8) as u8])
    }

    /// Selects the interrupt sources that drive the INT pin.
    pub fn configure_interrupts(
        &mut self,
        sources: Interrupts,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_register(REG_INT_EN, sources.bits())
    }

    /// Reads the pending interrupt flags.
    ///
    /// An overflow means events were lost because the FIFO was not drained in
    /// time, so it is logged as a warning.
    pub fn interrupt_status(&mut self) -> Result<Interrupts, Adp5589Error<I2C::Error>> {
        let status = Interrupts::from_bits_truncate(self.get_register(REG_INT_STATUS)?);
        if status.contains(Interrupts::OVERFLOW) {
            warn!("keypad event FIFO overflow");
        }
        Ok(status)
    }

    /// Clears the given interrupt flags (write 1 to clear).
    pub fn clear_interrupts(&mut self, sources: Interrupts) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_register(REG_INT_STATUS, sources.bits())
    }

    /// Number of events waiting in the FIFO.
    pub fn event_count(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(STATUS_EC)
    }

    /// Reads a GPIO bank as a 19-bit map, bit `n - 1` = GPIO `n`.
    pub fn read_gpio_bank(&mut self, bank: GpioBank) -> Result<u32, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; GPIO_BANK_LEN];
        self.read_registers(bank.base(), &mut buffer)?;
        Ok(u32::from_le_bytes([buffer[0], buffer[1], buffer[2], 0]) & GPIO_BANK_MASK)
    }

    /// Writes a GPIO bank from a 19-bit map, bit `n - 1` = GPIO `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the read-only status banks.
    /// Returns `ValueOutOfRange` if bits above GPIO 19 are set.
    pub fn write_gpio_bank(
        &mut self,
        bank: GpioBank,
        bits: u32,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if !bank.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        if bits & !GPIO_BANK_MASK != 0 {
            return Err(Adp5589Error::ValueOutOfRange);
        }
        let bytes = bits.to_le_bytes();
        self.write_registers(bank.base(), &bytes[..GPIO_BANK_LEN])
    }

    /// Sets or clears the bit of GPIO `gpio` (1..=19) in `bank`.
    pub fn set_gpio(
        &mut self,
        bank: GpioBank,
        gpio: u8,
        value: bool,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if !bank.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        let field = bank.bit(gpio).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit(field, value)
    }

    /// Reads the bit of GPIO `gpio` (1..=19) in `bank`.
    pub fn get_gpio(&mut self, bank: GpioBank, gpio: u8) -> Result<bool, Adp5589Error<I2C::Error>> {
        let field = bank.bit(gpio).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_bit(field)
    }

    /// Reads the five pull-configuration registers.
    pub fn read_pull_config(
        &mut self,
    ) -> Result<[u8; RPULL_CONFIG_LEN], Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; RPULL_CONFIG_LEN];
        self.read_registers(REG_RPULL_CONFIG_A, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes the five pull-configuration registers.
    pub fn write_pull_config(
        &mut self,
        values: &[u8; RPULL_CONFIG_LEN],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_RPULL_CONFIG_A, values)
    }

    /// Selects the pull resistor of keypad row `row` (0..=7).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a row outside the matrix.
    pub fn set_row_pull(&mut self, row: u8, pull: Pull) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = row_pull(row).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, pull.bits())
    }

    /// Reads the pull resistor setting of keypad row `row` (0..=7).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a row outside the matrix.
    pub fn row_pull(&mut self, row: u8) -> Result<Pull, Adp5589Error<I2C::Error>> {
        let field = row_pull(row).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, Pull::from_bits)
    }

    /// Selects the pull resistor of keypad column `col` (0..=10).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a column outside the matrix.
    pub fn set_col_pull(&mut self, col: u8, pull: Pull) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = col_pull(col).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, pull.bits())
    }

    /// Reads the pull resistor setting of keypad column `col` (0..=10).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a column outside the matrix.
    pub fn col_pull(&mut self, col: u8) -> Result<Pull, Adp5589Error<I2C::Error>> {
        let field = col_pull(col).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, Pull::from_bits)
    }

    /// Reads a multi-bit field and converts it with `parse`.
    fn get_field<T>(
        &mut self,
        field: BitField,
        parse: fn(u8) -> Option<T>,
    ) -> Result<T, Adp5589Error<I2C::Error>> {
        let bits = self.get_bit_group(field)?;
        parse(bits).ok_or(Adp5589Error::ValueOutOfRange)
    }

    /// Sets the interrupt mask timer in seconds (0 disables, up to 31).
    pub fn set_int_mask_timer(&mut self, seconds: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(UNLOCK_TIMERS_INT_MASK_TIMER, seconds)
    }

    /// Reads the interrupt mask timer in seconds.
    pub fn int_mask_timer(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(UNLOCK_TIMERS_INT_MASK_TIMER)
    }

    /// Sets the time allowed between the two unlock events in seconds (0
    /// disables, up to 7).
    pub fn set_unlock_timer(&mut self, seconds: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(UNLOCK_TIMERS_UNLOCK_TIMER, seconds)
    }

    /// Reads the unlock timer in seconds.
    pub fn unlock_timer(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(UNLOCK_TIMERS_UNLOCK_TIMER)
    }

    /// Sets the width of the pulse driven on the reset outputs.
    pub fn set_reset_pulse_width(
        &mut self,
        width: ResetPulseWidth,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(RESET_CFG_RESET_PULSE_WIDTH, width.bits())
    }

    /// Reads the reset pulse width field (RESET_CFG[1:0]).
    pub fn reset_pulse_width(&mut self) -> Result<ResetPulseWidth, Adp5589Error<I2C::Error>> {
        self.get_field(RESET_CFG_RESET_PULSE_WIDTH, ResetPulseWidth::from_bits)
    }

    /// Sets how long the reset events must be held before the reset outputs
    /// fire. The pulse width field is left untouched.
    pub fn set_reset_trigger_time(
        &mut self,
        time: ResetTriggerTime,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(RESET_CFG_RESET_TRIGGER_TIME, time.bits())
    }

    /// Reads the trigger time field (RESET_CFG[4:2]), not the pulse width.
    pub fn reset_trigger_time(&mut self) -> Result<ResetTriggerTime, Adp5589Error<I2C::Error>> {
        self.get_field(RESET_CFG_RESET_TRIGGER_TIME, ResetTriggerTime::from_bits)
    }

    /// Sets the PWM off time in microseconds.
    pub fn set_pwm_off_time(&mut self, micros: u16) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_PWM_OFFT_LOW, &micros.to_le_bytes())
    }

    /// Reads the PWM off time in microseconds.
    pub fn pwm_off_time(&mut self) -> Result<u16, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 2];
        self.read_registers(REG_PWM_OFFT_LOW, &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Sets the PWM on time in microseconds.
    pub fn set_pwm_on_time(&mut self, micros: u16) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_PWM_ONT_LOW, &micros.to_le_bytes())
    }

    /// Reads the PWM on time in microseconds.
    pub fn pwm_on_time(&mut self) -> Result<u16, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 2];
        self.read_registers(REG_PWM_ONT_LOW, &mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Sets the clock divider field: the input clock is divided by
    /// `divider + 1` (0..=31).
    pub fn set_clock_divider(&mut self, divider: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(CLOCK_DIV_CFG_CLK_DIV, divider)
    }

    /// Reads the clock divider field.
    pub fn clock_divider(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(CLOCK_DIV_CFG_CLK_DIV)
    }

    /// Selects the function of logic block `block` (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any other block number.
    pub fn set_logic_function(
        &mut self,
        block: u8,
        function: LogicFunction,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = logic_select(block).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, function.bits())
    }

    /// Reads the function of logic block `block` (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any other block number.
    pub fn logic_function(&mut self, block: u8) -> Result<LogicFunction, Adp5589Error<I2C::Error>> {
        let field = logic_select(block).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, LogicFunction::from_bits)
    }

    /// Sets the keypad scan cycle.
    pub fn set_poll_time(&mut self, poll_time: PollTime) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(POLL_TIME_CFG_KEY_POLL_TIME, poll_time.bits())
    }

    /// Reads the keypad scan cycle.
    pub fn poll_time(&mut self) -> Result<PollTime, Adp5589Error<I2C::Error>> {
        self.get_field(POLL_TIME_CFG_KEY_POLL_TIME, PollTime::from_bits)
    }

    /// Sets the internal oscillator frequency.
    pub fn set_core_frequency(
        &mut self,
        frequency: CoreFrequency,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(GENERAL_CFG_B_CORE_FREQ, frequency.bits())
    }

    /// Reads the internal oscillator frequency.
    pub fn core_frequency(&mut self) -> Result<CoreFrequency, Adp5589Error<I2C::Error>> {
        self.get_field(GENERAL_CFG_B_CORE_FREQ, CoreFrequency::from_bits)
    }
}

/// LOGICx_SEL field of logic block 1 or 2.
pub(crate) const fn logic_select(block: u8) -> Option<BitField> {
    match block {
        1 => Some(LOGIC_1_CFG_LOGIC1_SEL),
        2 => Some(LOGIC_2_CFG_LOGIC2_SEL),
        _ => None,
    }
}
