//! Packed register bit-field descriptors.
//!
//! Every configurable field of the ADP5589 lives inside one 8-bit register.
//! A [`BitField`] names such a field by packing the register address into the
//! high byte and the field mask into the low byte of a `u16`, so a single
//! constant is enough to read or modify the field without disturbing its
//! neighbours.
//!
//! Multi-bit fields ("groups") are right-justified: the value written to or
//! read from a group is shifted by the position of the mask's lowest set bit.

/// Returns the index of the lowest set bit of `mask`.
///
/// `0b0000_0001` gives 0, `0b0011_0000` gives 4 and `0b1000_0000` gives 7.
/// An empty mask has no set bit and yields 8; [`BitField`] never carries one.
pub const fn mask_to_scale(mask: u8) -> u8 {
    mask.trailing_zeros() as u8
}

/// A packed (register address, bit mask) pair identifying a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField(u16);

impl BitField {
    /// Creates a descriptor for `mask` inside the register at `address`.
    ///
    /// Intended for constants: an empty mask fails const evaluation. Use
    /// [`try_new`](Self::try_new) for masks computed at runtime.
    pub const fn new(address: u8, mask: u8) -> Self {
        assert!(mask != 0, "bit field mask must not be empty");
        Self(((address as u16) << 8) | mask as u16)
    }

    /// Creates a descriptor, returning `None` for an empty mask.
    pub const fn try_new(address: u8, mask: u8) -> Option<Self> {
        if mask == 0 {
            None
        } else {
            Some(Self(((address as u16) << 8) | mask as u16))
        }
    }

    /// Reinterprets a packed `0xAAMM` value, returning `None` for an empty mask.
    pub const fn from_raw(raw: u16) -> Option<Self> {
        Self::try_new((raw >> 8) as u8, raw as u8)
    }

    /// The packed `0xAAMM` representation.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Register address of the field.
    pub const fn address(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Mask of the field within its register.
    pub const fn mask(self) -> u8 {
        self.0 as u8
    }

    /// Bit position of the field's least significant bit.
    pub const fn scale(self) -> u8 {
        mask_to_scale(self.mask())
    }

    /// Returns `true` when the field is a single bit.
    pub const fn is_single_bit(self) -> bool {
        self.mask().count_ones() == 1
    }

    /// Largest right-justified value the field can hold.
    pub const fn max_value(self) -> u8 {
        self.mask() >> self.scale()
    }

    /// Merges raw, already positioned `bits` into `current`, leaving every
    /// bit outside the mask untouched.
    pub const fn merge(self, current: u8, bits: u8) -> u8 {
        (current & !self.mask()) | (bits & self.mask())
    }

    /// Shifts a right-justified `value` into position.
    ///
    /// Returns `None` when any bit of the shifted value would land outside the
    /// mask, which covers both values wider than the field and values that hit
    /// a hole in a sparse mask.
    pub const fn position(self, value: u8) -> Option<u8> {
        let shifted = (value as u16) << self.scale();
        if shifted & !(self.mask() as u16) != 0 {
            None
        } else {
            Some(shifted as u8)
        }
    }

    /// Extracts the right-justified field value from a full register value.
    pub const fn extract(self, register: u8) -> u8 {
        (register & self.mask()) >> self.scale()
    }

    /// Returns `true` when any bit of the field is set in `register`.
    pub const fn is_set(self, register: u8) -> bool {
        register & self.mask() != 0
    }

    /// Register value after setting (`true`) or clearing (`false`) every bit
    /// of the field.
    pub const fn apply_flag(self, current: u8, value: bool) -> u8 {
        self.merge(current, if value { 0xFF } else { 0x00 })
    }
}

impl From<BitField> for u16 {
    fn from(field: BitField) -> Self {
        field.raw()
    }
}
