//! Async implementation of the ADP5589 driver.
//!
//! This module provides an async version of the ADP5589 driver that uses
//! `embedded-hal-async` traits. Enable the `async` feature to use this module.
//!
//! It mirrors the blocking [`Adp5589`](crate::Adp5589) method for method.
//! Field encoding and event decoding are shared with the blocking driver.
//!
//! # Example
//!
//! ```ignore
//! use adp5589::{Adp5589Async, KeypadConfig, DEFAULT_ADDRESS};
//! # let i2c = todo!(); // async I2C
//!
//! async fn scan() {
//!     let mut keypad = Adp5589Async::new(i2c, DEFAULT_ADDRESS);
//!     keypad.configure(&KeypadConfig::kypd()).await.unwrap();
//!     while let Some(event) = keypad.poll_event().await.unwrap() {
//!         // ...
//!     }
//! }
//! ```

use embedded_hal::i2c::AddressMode;
use embedded_hal_async::i2c::I2c;

use crate::register::*;
use crate::{
    logic_select, Adp5589Error, BitField, CoreFrequency, Event, EventFields, EventRegister,
    GpioBank, Interrupts, KeyMap, KeyTable, KeypadConfig, LogicFunction, PollTime, Pull,
    ResetPulseWidth, ResetTriggerTime, COLUMN_MASK, EVENT_NUMBER_MASK, FIFO_DEPTH, KEYPAD_KYPD,
    MAX_BLOCK,
};

/// Async ADP5589 driver instance
///
/// All methods in this struct are async and must be `.await`ed.
///
/// # Type Parameters
///
/// * `A` - Address mode (typically `u8` for 7-bit I2C addresses)
/// * `I2C` - An async I2C implementation from `embedded-hal-async`
pub struct Adp5589Async<A: AddressMode, I2C: I2c<A>> {
    i2c: I2C,
    addr: A,
    key_map: KeyMap,
}

impl<A, I2C> Adp5589Async<A, I2C>
where
    A: AddressMode + Copy,
    I2C: I2c<A>,
{
    /// Creates a new async driver instance using the [`KEYPAD_KYPD`] key map.
    ///
    /// # Arguments
    ///
    /// * `i2c` - An async I2C bus implementation
    /// * `addr` - The I2C address of the device (0x34)
    pub fn new(i2c: I2C, addr: A) -> Self {
        Self::with_key_map(i2c, addr, &KEYPAD_KYPD)
    }

    /// Creates a new async driver instance with a custom key map.
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

    async fn write_register(&mut self, data: &[u8]) -> Result<(), Adp5589Error<I2C::Error>> {
        self.i2c
            .write(self.addr, data)
            .await
            .map_err(Adp5589Error::WriteError)
    }

    async fn read_into(
        &mut self,
        reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.i2c
            .write_read(self.addr, &[reg], buffer)
            .await
            .map_err(Adp5589Error::ReadError)
    }

    /// Reads a single register.
    pub async fn get_register(&mut self, reg: u8) -> Result<u8, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 1];
        self.read_into(reg, &mut buffer).await?;
        trace!("read register {:#x}={:#b}", reg, buffer[0]);
        Ok(buffer[0])
    }

    /// Writes a single register.
    pub async fn set_register(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        trace!("write register {:#x}={:#b}", reg, value);
        self.write_register(&[reg, value]).await
    }

    /// Reads consecutive registers starting at `reg` into `buffer`.
    pub async fn read_registers(
        &mut self,
        reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.read_into(reg, buffer).await
    }

    /// Writes up to 16 `values` to consecutive registers starting at `reg`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than 16 values.
    pub async fn write_registers(
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
        self.write_register(&buffer[..=values.len()]).await
    }

    /// Sets (`true`) or clears (`false`) every bit of `field`.
    pub async fn set_bit(
        &mut self,
        field: BitField,
        value: bool,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address()).await?;
        self.set_register(field.address(), field.apply_flag(current, value))
            .await
    }

    /// Returns `true` when any bit of `field` is set.
    pub async fn get_bit(&mut self, field: BitField) -> Result<bool, Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address()).await?;
        Ok(field.is_set(current))
    }

    /// Writes a right-justified `value` into a multi-bit field.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange`, before touching the bus, if `value` does not
    /// fit in the field's mask.
    pub async fn set_bit_group(
        &mut self,
        field: BitField,
        value: u8,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let bits = field.position(value).ok_or(Adp5589Error::ValueOutOfRange)?;
        let current = self.get_register(field.address()).await?;
        self.set_register(field.address(), field.merge(current, bits))
            .await
    }

    /// Reads a multi-bit field, right-justified.
    pub async fn get_bit_group(&mut self, field: BitField) -> Result<u8, Adp5589Error<I2C::Error>> {
        let current = self.get_register(field.address()).await?;
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
    pub async fn read_event(
        &mut self,
        register: EventRegister,
    ) -> Result<EventFields, Adp5589Error<I2C::Error>> {
        let byte = self.get_register(register.address()).await?;
        Ok(self.key_map.decode(byte))
    }

    /// Pops the oldest event from the FIFO in flattened form.
    pub async fn read_fifo(&mut self) -> Result<EventFields, Adp5589Error<I2C::Error>> {
        self.read_event(EventRegister::Fifo).await
    }

    /// Pops the oldest event from the FIFO, or returns `None` once it is
    /// empty.
    ///
    /// Entries carrying an unassigned event number are logged and skipped.
    /// At most [`FIFO_DEPTH`] entries are read per call.
    pub async fn poll_event(&mut self) -> Result<Option<Event>, Adp5589Error<I2C::Error>> {
        for _ in 0..FIFO_DEPTH {
            let byte = self.get_register(REG_FIFO_1).await?;
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
    pub async fn get_event(
        &mut self,
        register: EventRegister,
    ) -> Result<Option<Event>, Adp5589Error<I2C::Error>> {
        let byte = self.get_register(register.address()).await?;
        Ok(Event::from_byte(byte))
    }

    /// Programs `event` into a lock, unlock or reset-event register.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the FIFO or an event outside the device
    /// geometry.
    pub async fn write_event(
        &mut self,
        register: EventRegister,
        event: Event,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if !register.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        let byte = event.to_byte().ok_or(Adp5589Error::InvalidArgument)?;
        self.set_register(register.address(), byte).await
    }

    /// Encodes flattened fields and programs them into a lock, unlock or
    /// reset-event register. Returns the byte written, or `None` (and writes
    /// nothing) when the fields describe no event.
    pub async fn write_event_fields(
        &mut self,
        register: EventRegister,
        fields: &EventFields,
    ) -> Result<Option<u8>, Adp5589Error<I2C::Error>> {
        if !register.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        let Some(byte) = self.key_map.encode(fields) else {
            debug!("no event to write to {:?}", register);
            return Ok(None);
        };
        self.set_register(register.address(), byte).await?;
        Ok(Some(byte))
    }

    /// Programs the key with key-map value `key_val` into an event register.
    pub async fn write_key_event(
        &mut self,
        register: EventRegister,
        key_val: i32,
        active: bool,
    ) -> Result<Option<u8>, Adp5589Error<I2C::Error>> {
        self.write_event_fields(register, &EventFields::key(key_val, active))
            .await
    }

    /// Enables or disables the keypad lock function.
    pub async fn set_lock_enabled(
        &mut self,
        enabled: bool,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit(LOCK_CFG_LOCK_EN, enabled).await
    }

    /// Returns `true` while the keypad is locked.
    pub async fn is_locked(&mut self) -> Result<bool, Adp5589Error<I2C::Error>> {
        self.get_bit(STATUS_LOCK_STAT).await
    }

    /// Reads the manufacturer and revision IDs.
    pub async fn chip_id(&mut self) -> Result<(u8, u8), Adp5589Error<I2C::Error>> {
        let id = self.get_register(REG_ID).await?;
        Ok((ID_MAN_ID.extract(id), ID_REV_ID.extract(id)))
    }

    /// Applies a keypad configuration: matrix pins, scan time, oscillator
    /// and interrupt enables.
    pub async fn configure(
        &mut self,
        config: &KeypadConfig,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_keypad_pins(config.rows, config.cols).await?;
        self.set_poll_time(config.poll_time).await?;
        self.set_core_frequency(config.core_frequency).await?;
        self.set_bit(GENERAL_CFG_B_OSC_EN, true).await?;
        self.configure_interrupts(config.interrupts).await
    }

    /// Selects which rows (bit n = row n) and columns (bit n = column n)
    /// belong to the keypad matrix.
    pub async fn set_keypad_pins(
        &mut self,
        rows: u8,
        cols: u16,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if cols & !COLUMN_MASK != 0 {
            return Err(Adp5589Error::InvalidArgument);
        }
        self.write_registers(REG_PIN_CONFIG_A, &[rows, cols as u8, (cols >> 8) as u8])
            .await
    }

    /// Selects the interrupt sources that drive the INT pin.
    pub async fn configure_interrupts(
        &mut self,
        sources: Interrupts,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_register(REG_INT_EN, sources.bits()).await
    }

    /// Reads the pending interrupt flags.
    pub async fn interrupt_status(&mut self) -> Result<Interrupts, Adp5589Error<I2C::Error>> {
        let status = Interrupts::from_bits_truncate(self.get_register(REG_INT_STATUS).await?);
        if status.contains(Interrupts::OVERFLOW) {
            warn!("keypad event FIFO overflow");
        }
        Ok(status)
    }

    /// Clears the given interrupt flags (write 1 to clear).
    pub async fn clear_interrupts(
        &mut self,
        sources: Interrupts,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_register(REG_INT_STATUS, sources.bits()).await
    }

    /// Number of events waiting in the FIFO.
    pub async fn event_count(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(STATUS_EC).await
    }

    /// Reads a GPIO bank as a 19-bit map, bit `n - 1` = GPIO `n`.
    pub async fn read_gpio_bank(&mut self, bank: GpioBank) -> Result<u32, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; GPIO_BANK_LEN];
        self.read_registers(bank.base(), &mut buffer).await?;
        Ok(u32::from_le_bytes([buffer[0], buffer[1], buffer[2], 0]) & GPIO_BANK_MASK)
    }

    /// Writes a GPIO bank from a 19-bit map, bit `n - 1` = GPIO `n`.
    pub async fn write_gpio_bank(
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
            .await
    }

    /// Sets or clears the bit of GPIO `gpio` (1..=19) in `bank`.
    pub async fn set_gpio(
        &mut self,
        bank: GpioBank,
        gpio: u8,
        value: bool,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        if !bank.is_writable() {
            return Err(Adp5589Error::InvalidArgument);
        }
        let field = bank.bit(gpio).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit(field, value).await
    }

    /// Reads the bit of GPIO `gpio` (1..=19) in `bank`.
    pub async fn get_gpio(
        &mut self,
        bank: GpioBank,
        gpio: u8,
    ) -> Result<bool, Adp5589Error<I2C::Error>> {
        let field = bank.bit(gpio).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_bit(field).await
    }

    /// Selects the function of logic block `block` (1 or 2).
    pub async fn set_logic_function(
        &mut self,
        block: u8,
        function: LogicFunction,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = logic_select(block).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, function.bits()).await
    }

    /// Reads the function of logic block `block` (1 or 2).
    pub async fn logic_function(
        &mut self,
        block: u8,
    ) -> Result<LogicFunction, Adp5589Error<I2C::Error>> {
        let field = logic_select(block).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, LogicFunction::from_bits).await
    }

    async fn get_field<T>(
        &mut self,
        field: BitField,
        parse: fn(u8) -> Option<T>,
    ) -> Result<T, Adp5589Error<I2C::Error>> {
        let bits = self.get_bit_group(field).await?;
        parse(bits).ok_or(Adp5589Error::ValueOutOfRange)
    }

    /// Reads the five pull-configuration registers.
    pub async fn read_pull_config(
        &mut self,
    ) -> Result<[u8; RPULL_CONFIG_LEN], Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; RPULL_CONFIG_LEN];
        self.read_registers(REG_RPULL_CONFIG_A, &mut buffer).await?;
        Ok(buffer)
    }

    /// Writes the five pull-configuration registers.
    pub async fn write_pull_config(
        &mut self,
        values: &[u8; RPULL_CONFIG_LEN],
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_RPULL_CONFIG_A, values).await
    }

    /// Selects the pull resistor of keypad row `row` (0..=7).
    pub async fn set_row_pull(
        &mut self,
        row: u8,
        pull: Pull,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = row_pull(row).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, pull.bits()).await
    }

    /// Reads the pull resistor setting of keypad row `row` (0..=7).
    pub async fn row_pull(&mut self, row: u8) -> Result<Pull, Adp5589Error<I2C::Error>> {
        let field = row_pull(row).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, Pull::from_bits).await
    }

    /// Selects the pull resistor of keypad column `col` (0..=10).
    pub async fn set_col_pull(
        &mut self,
        col: u8,
        pull: Pull,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        let field = col_pull(col).ok_or(Adp5589Error::InvalidArgument)?;
        self.set_bit_group(field, pull.bits()).await
    }

    /// Reads the pull resistor setting of keypad column `col` (0..=10).
    pub async fn col_pull(&mut self, col: u8) -> Result<Pull, Adp5589Error<I2C::Error>> {
        let field = col_pull(col).ok_or(Adp5589Error::InvalidArgument)?;
        self.get_field(field, Pull::from_bits).await
    }

    /// Sets the interrupt mask timer in seconds (0 disables, up to 31).
    pub async fn set_int_mask_timer(
        &mut self,
        seconds: u8,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(UNLOCK_TIMERS_INT_MASK_TIMER, seconds).await
    }

    /// Reads the interrupt mask timer in seconds.
    pub async fn int_mask_timer(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(UNLOCK_TIMERS_INT_MASK_TIMER).await
    }

    /// Sets the time allowed between the two unlock events in seconds (0
    /// disables, up to 7).
    pub async fn set_unlock_timer(&mut self, seconds: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(UNLOCK_TIMERS_UNLOCK_TIMER, seconds).await
    }

    /// Reads the unlock timer in seconds.
    pub async fn unlock_timer(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(UNLOCK_TIMERS_UNLOCK_TIMER).await
    }

    /// Sets the width of the pulse driven on the reset outputs.
    pub async fn set_reset_pulse_width(
        &mut self,
        width: ResetPulseWidth,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(RESET_CFG_RESET_PULSE_WIDTH, width.bits())
            .await
    }

    /// Reads the reset pulse width field (RESET_CFG[1:0]).
    pub async fn reset_pulse_width(
        &mut self,
    ) -> Result<ResetPulseWidth, Adp5589Error<I2C::Error>> {
        self.get_field(RESET_CFG_RESET_PULSE_WIDTH, ResetPulseWidth::from_bits)
            .await
    }

    /// Sets how long the reset events must be held before the reset outputs
    /// fire.
    pub async fn set_reset_trigger_time(
        &mut self,
        time: ResetTriggerTime,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(RESET_CFG_RESET_TRIGGER_TIME, time.bits())
            .await
    }

    /// Reads the trigger time field (RESET_CFG[4:2]).
    pub async fn reset_trigger_time(
        &mut self,
    ) -> Result<ResetTriggerTime, Adp5589Error<I2C::Error>> {
        self.get_field(RESET_CFG_RESET_TRIGGER_TIME, ResetTriggerTime::from_bits)
            .await
    }

    /// Sets the PWM off time in microseconds.
    pub async fn set_pwm_off_time(&mut self, micros: u16) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_PWM_OFFT_LOW, &micros.to_le_bytes())
            .await
    }

    /// Reads the PWM off time in microseconds.
    pub async fn pwm_off_time(&mut self) -> Result<u16, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 2];
        self.read_registers(REG_PWM_OFFT_LOW, &mut buffer).await?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Sets the PWM on time in microseconds.
    pub async fn set_pwm_on_time(&mut self, micros: u16) -> Result<(), Adp5589Error<I2C::Error>> {
        self.write_registers(REG_PWM_ONT_LOW, &micros.to_le_bytes())
            .await
    }

    /// Reads the PWM on time in microseconds.
    pub async fn pwm_on_time(&mut self) -> Result<u16, Adp5589Error<I2C::Error>> {
        let mut buffer = [0u8; 2];
        self.read_registers(REG_PWM_ONT_LOW, &mut buffer).await?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Sets the clock divider field (0..=31).
    pub async fn set_clock_divider(&mut self, divider: u8) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(CLOCK_DIV_CFG_CLK_DIV, divider).await
    }

    /// Reads the clock divider field.
    pub async fn clock_divider(&mut self) -> Result<u8, Adp5589Error<I2C::Error>> {
        self.get_bit_group(CLOCK_DIV_CFG_CLK_DIV).await
    }

    /// Sets the keypad scan cycle.
    pub async fn set_poll_time(
        &mut self,
        poll_time: PollTime,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(POLL_TIME_CFG_KEY_POLL_TIME, poll_time.bits())
            .await
    }

    /// Reads the keypad scan cycle.
    pub async fn poll_time(&mut self) -> Result<PollTime, Adp5589Error<I2C::Error>> {
        self.get_field(POLL_TIME_CFG_KEY_POLL_TIME, PollTime::from_bits)
            .await
    }

    /// Sets the internal oscillator frequency.
    pub async fn set_core_frequency(
        &mut self,
        frequency: CoreFrequency,
    ) -> Result<(), Adp5589Error<I2C::Error>> {
        self.set_bit_group(GENERAL_CFG_B_CORE_FREQ, frequency.bits())
            .await
    }

    /// Reads the internal oscillator frequency.
    pub async fn core_frequency(&mut self) -> Result<CoreFrequency, Adp5589Error<I2C::Error>> {
        self.get_field(GENERAL_CFG_B_CORE_FREQ, CoreFrequency::from_bits)
            .await
    }
}


#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;
    use crate::{EventKind, NO_KEY};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const TEST_ADDR: u8 = 0x34;

    macro_rules! write_transaction {
        ($addr:expr, $reg:expr, $($val:expr),+) => {
            I2cTransaction::write($addr, vec![$reg, $($val),+])
        };
    }

    macro_rules! write_read_transaction {
        ($addr:expr, $reg:expr, $($read:expr),+) => {
            I2cTransaction::write_read($addr, vec![$reg], vec![$($read),+])
        };
    }

    #[tokio::test]
    async fn async_set_bit_group_read_modify_write() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0b1000_0001),
            write_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0b1110_0001),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_bit_group(GENERAL_CFG_B_CORE_FREQ, 3).await.unwrap();

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_set_bit_group_rejects_oversized_value() {
        let i2c = I2cMock::new(&[]);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        let err = dev
            .set_bit_group(UNLOCK_TIMERS_UNLOCK_TIMER, 8)
            .await
            .unwrap_err();
        assert!(matches!(err, Adp5589Error::ValueOutOfRange));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_bus_errors_are_mapped() {
        let expectations = [
            I2cTransaction::write_read(TEST_ADDR, vec![REG_ID], vec![0])
                .with_error(ErrorKind::Other),
            I2cTransaction::write(TEST_ADDR, vec![REG_INT_EN, 0x01]).with_error(ErrorKind::Other),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        assert!(matches!(
            dev.chip_id().await,
            Err(Adp5589Error::ReadError(ErrorKind::Other))
        ));
        assert!(matches!(
            dev.configure_interrupts(Interrupts::EVENT).await,
            Err(Adp5589Error::WriteError(ErrorKind::Other))
        ));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_read_fifo_decodes_key() {
        let expectations = [write_read_transaction!(TEST_ADDR, REG_FIFO_1, 0x80 | 34)];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        let fields = dev.read_fifo().await.unwrap();
        assert_eq!((fields.row, fields.col), (3, 0));
        assert_eq!(fields.key_val, 0x0);
        assert_eq!(fields.state, 1);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_poll_event_skips_unassigned_and_stops_on_empty() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_FIFO_1, 0x80 | 121),
            write_read_transaction!(TEST_ADDR, REG_FIFO_1, 97),
            write_read_transaction!(TEST_ADDR, REG_FIFO_1, 0),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        assert_eq!(
            dev.poll_event().await.unwrap(),
            Some(Event::new(EventKind::Gpi(1), false))
        );
        assert_eq!(dev.poll_event().await.unwrap(), None);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_get_event_reads_reset_register() {
        let expectations = [write_read_transaction!(TEST_ADDR, REG_RESET2_EVENT_A, 0x80 | 92)];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        assert_eq!(
            dev.get_event(EventRegister::Reset2A).await.unwrap(),
            Some(Event::new(EventKind::RowGround { row: 3 }, true))
        );

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_write_event_fields_encodes_gpi() {
        let expectations = [write_transaction!(TEST_ADDR, REG_RESET1_EVENT_A, 0xE6)];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        let written = dev
            .write_event_fields(EventRegister::Reset1A, &EventFields::gpi(5, true))
            .await
            .unwrap();
        assert_eq!(written, Some(0xE6));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_write_event_rejects_fifo() {
        let i2c = I2cMock::new(&[]);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        let result = dev
            .write_event(EventRegister::Fifo, Event::new(EventKind::Logic(1), true))
            .await;
        assert!(matches!(result, Err(Adp5589Error::InvalidArgument)));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_custom_key_map() {
        let expectations = [write_read_transaction!(TEST_ADDR, REG_UNLOCK1, 88)];

        let mut table = [[NO_KEY; 11]; 8];
        table[7][10] = 42;
        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::with_key_map(i2c, TEST_ADDR, &table);

        let fields = dev.read_event(EventRegister::Unlock1).await.unwrap();
        assert_eq!(fields.key_val, 42);
        assert_eq!(fields.state, 0);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_configure_kypd() {
        let expectations = [
            write_transaction!(TEST_ADDR, REG_PIN_CONFIG_A, 0x0F, 0x0F, 0x00),
            write_read_transaction!(TEST_ADDR, REG_POLL_TIME_CFG, 0x03),
            write_transaction!(TEST_ADDR, REG_POLL_TIME_CFG, 0x00),
            write_read_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0x60),
            write_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0x00),
            write_read_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0x00),
            write_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0x80),
            write_transaction!(TEST_ADDR, REG_INT_EN, 0x05),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.configure(&KeypadConfig::default()).await.unwrap();

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_interrupts_read_and_clear() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_INT_STATUS, 0x09),
            write_transaction!(TEST_ADDR, REG_INT_STATUS, 0x09),
            write_read_transaction!(TEST_ADDR, REG_STATUS, 0x23),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        let status = dev.interrupt_status().await.unwrap();
        assert_eq!(status, Interrupts::EVENT | Interrupts::LOCK);
        dev.clear_interrupts(status).await.unwrap();
        assert_eq!(dev.event_count().await.unwrap(), 3);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_lock_and_chip_id() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_LOCK_CFG, 0x00),
            write_transaction!(TEST_ADDR, REG_LOCK_CFG, 0x01),
            write_read_transaction!(TEST_ADDR, REG_STATUS, 0x00),
            write_read_transaction!(TEST_ADDR, REG_ID, 0x12),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_lock_enabled(true).await.unwrap();
        assert!(!dev.is_locked().await.unwrap());
        assert_eq!(dev.chip_id().await.unwrap(), (0x1, 0x2));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_gpio_bank_and_pin() {
        let expectations = [
            write_transaction!(TEST_ADDR, REG_GPO_DATA_OUT_A, 0x00, 0x01, 0x00),
            write_read_transaction!(TEST_ADDR, REG_GPI_STATUS_A, 0x80, 0x00, 0x00),
            write_read_transaction!(TEST_ADDR, REG_GPI_EVENT_EN_A, 0x00),
            write_transaction!(TEST_ADDR, REG_GPI_EVENT_EN_A, 0x01),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.write_gpio_bank(GpioBank::GpoDataOut, 1 << 8).await.unwrap();
        assert_eq!(dev.read_gpio_bank(GpioBank::GpiStatus).await.unwrap(), 0x80);
        dev.set_gpio(GpioBank::GpiEventEnable, 1, true).await.unwrap();

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_pull_config() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_RPULL_CONFIG_A, 5, 4, 3, 2, 1),
            write_transaction!(TEST_ADDR, REG_RPULL_CONFIG_A, 0, 0, 0, 0, 0),
            // Row 2 is RPULL_CONFIG_A[5:4].
            write_read_transaction!(TEST_ADDR, REG_RPULL_CONFIG_A, 0x00),
            write_transaction!(TEST_ADDR, REG_RPULL_CONFIG_A, 0x30),
            // Column 10 is RPULL_CONFIG_E[5:4].
            write_read_transaction!(TEST_ADDR, 0x1D, 0x10),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        assert_eq!(dev.read_pull_config().await.unwrap(), [5, 4, 3, 2, 1]);
        dev.write_pull_config(&[0; 5]).await.unwrap();
        dev.set_row_pull(2, Pull::Disabled).await.unwrap();
        assert_eq!(dev.col_pull(10).await.unwrap(), Pull::Down300k);
        assert!(matches!(
            dev.row_pull(8).await,
            Err(Adp5589Error::InvalidArgument)
        ));
        assert!(matches!(
            dev.set_col_pull(11, Pull::Up100k).await,
            Err(Adp5589Error::InvalidArgument)
        ));

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_timers() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0000_0011),
            write_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0101_0011),
            write_read_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0101_0011),
            write_read_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0101_0011),
            write_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0101_0111),
            write_read_transaction!(TEST_ADDR, REG_UNLOCK_TIMERS, 0b0101_0111),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_int_mask_timer(10).await.unwrap();
        assert_eq!(dev.int_mask_timer().await.unwrap(), 10);
        dev.set_unlock_timer(7).await.unwrap();
        assert_eq!(dev.unlock_timer().await.unwrap(), 7);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_reset_fields_are_independent() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_0000),
            write_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_0011),
            write_read_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_0011),
            write_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_1011),
            write_read_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_1011),
            write_read_transaction!(TEST_ADDR, REG_RESET_CFG, 0b1000_1011),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_reset_pulse_width(ResetPulseWidth::Ms10).await.unwrap();
        dev.set_reset_trigger_time(ResetTriggerTime::S1_5)
            .await
            .unwrap();
        assert_eq!(
            dev.reset_trigger_time().await.unwrap(),
            ResetTriggerTime::S1_5
        );
        assert_eq!(
            dev.reset_pulse_width().await.unwrap(),
            ResetPulseWidth::Ms10
        );

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_pwm_times() {
        let expectations = [
            write_transaction!(TEST_ADDR, REG_PWM_ONT_LOW, 0xE8, 0x03),
            write_read_transaction!(TEST_ADDR, REG_PWM_OFFT_LOW, 0x10, 0x27),
            write_transaction!(TEST_ADDR, REG_PWM_OFFT_LOW, 0x00, 0x01),
            write_read_transaction!(TEST_ADDR, REG_PWM_ONT_LOW, 0xFF, 0xFF),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_pwm_on_time(1000).await.unwrap();
        assert_eq!(dev.pwm_off_time().await.unwrap(), 10_000);
        dev.set_pwm_off_time(0x0100).await.unwrap();
        assert_eq!(dev.pwm_on_time().await.unwrap(), u16::MAX);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_clock_poll_and_core_frequency() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_CLOCK_DIV_CFG, 0x01),
            write_transaction!(TEST_ADDR, REG_CLOCK_DIV_CFG, 0x0B),
            write_read_transaction!(TEST_ADDR, REG_CLOCK_DIV_CFG, 0x0B),
            write_read_transaction!(TEST_ADDR, REG_POLL_TIME_CFG, 0x00),
            write_transaction!(TEST_ADDR, REG_POLL_TIME_CFG, 0x02),
            write_read_transaction!(TEST_ADDR, REG_POLL_TIME_CFG, 0x02),
            write_read_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0x80),
            write_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0xA0),
            write_read_transaction!(TEST_ADDR, REG_GENERAL_CFG_B, 0xA0),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_clock_divider(5).await.unwrap();
        assert_eq!(dev.clock_divider().await.unwrap(), 5);
        dev.set_poll_time(PollTime::Ms30).await.unwrap();
        assert_eq!(dev.poll_time().await.unwrap(), PollTime::Ms30);
        dev.set_core_frequency(CoreFrequency::Khz100).await.unwrap();
        assert_eq!(dev.core_frequency().await.unwrap(), CoreFrequency::Khz100);

        dev.destroy().done();
    }

    #[tokio::test]
    async fn async_logic_function_both_blocks() {
        let expectations = [
            write_read_transaction!(TEST_ADDR, REG_LOGIC_2_CFG, 0x80),
            write_transaction!(TEST_ADDR, REG_LOGIC_2_CFG, 0x82),
            write_read_transaction!(TEST_ADDR, REG_LOGIC_1_CFG, 0x0D),
        ];

        let i2c = I2cMock::new(&expectations);
        let mut dev = Adp5589Async::new(i2c, TEST_ADDR);

        dev.set_logic_function(2, LogicFunction::Or).await.unwrap();
        assert_eq!(dev.logic_function(1).await.unwrap(), LogicFunction::InA);
        assert!(matches!(
            dev.set_logic_function(0, LogicFunction::Or).await,
            Err(Adp5589Error::InvalidArgument)
        ));

        dev.destroy().done();
    }
}
