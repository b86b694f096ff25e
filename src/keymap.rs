//! Key map: physical matrix position to caller-defined key value.

use crate::event::{Event, EventFields, EventKind, KEY_LAST, NOT_APPLICABLE, NO_KEY, ROW_GROUND_LAST};
use crate::{COLS, GPIOS, LOGIC_BLOCKS, ROWS};

/// Raw key-map table, indexed `[row][col]`.
pub type KeyTable = [[i32; COLS as usize]; ROWS as usize];

/// Layout of a Digilent PmodKYPD plugged into the J1 connector of a
/// PmodIOXP: rows 0..=3 and columns 0..=3 carry the 16 hex keys.
pub const KEYPAD_KYPD: KeyTable = {
    const N: i32 = NO_KEY;
    [
        [0xD, 0xC, 0xB, 0xA, N, N, N, N, N, N, N],
        [0xE, 0x9, 0x6, 0x3, N, N, N, N, N, N, N],
        [0xF, 0x8, 0x5, 0x2, N, N, N, N, N, N, N],
        [0x0, 0x7, 0x4, 0x1, N, N, N, N, N, N, N],
        [N; COLS as usize],
        [N; COLS as usize],
        [N; COLS as usize],
        [N; COLS as usize],
    ]
};

/// Translation table between matrix coordinates and key values.
///
/// Any `i32` is a legal cell value, duplicates included. Looking a value up
/// scans row-major and returns the first match, so a value stored twice
/// always resolves to its first position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    table: KeyTable,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(KEYPAD_KYPD)
    }
}

impl KeyMap {
    pub const fn new(table: KeyTable) -> Self {
        Self { table }
    }

    /// Replaces every cell with the contents of `table`.
    pub fn replace(&mut self, table: &KeyTable) {
        self.table = *table;
    }

    pub fn table(&self) -> &KeyTable {
        &self.table
    }

    /// Key value at (`row`, `col`), or [`NO_KEY`] outside the matrix.
    pub fn key_at(&self, row: u8, col: u8) -> i32 {
        self.table
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .unwrap_or(NO_KEY)
    }

    /// First (row, col) holding `key_val` in row-major order.
    pub fn position_of(&self, key_val: i32) -> Option<(u8, u8)> {
        self.table.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == key_val)
                .map(|col| (row as u8, col as u8))
        })
    }

    /// Key value of a key-matrix event, `None` for every other event kind.
    pub fn key_of(&self, event: &Event) -> Option<i32> {
        match event.kind {
            EventKind::Key { row, col } => Some(self.key_at(row, col)),
            _ => None,
        }
    }

    /// Key-matrix event for `key_val`, `None` if no cell holds it.
    pub fn key_event(&self, key_val: i32, active: bool) -> Option<Event> {
        self.position_of(key_val)
            .map(|(row, col)| Event::new(EventKind::Key { row, col }, active))
    }

    /// Decodes an event byte into its flattened fields.
    ///
    /// Bytes that carry no event still report their state bit; every other
    /// field keeps its "not applicable" value.
    pub fn decode(&self, byte: u8) -> EventFields {
        match Event::from_byte(byte) {
            Some(event) => {
                let key_val = self.key_of(&event).unwrap_or(NO_KEY);
                EventFields::from_event(event, key_val)
            }
            None => EventFields {
                state: (byte & 0x80 != 0) as u8,
                ..EventFields::default()
            },
        }
    }

    /// Encodes flattened fields into an event byte.
    ///
    /// Keyboard fields take precedence: a key value alone is resolved through
    /// the map, a row without a column is a row-to-ground event. Otherwise a
    /// GPI in 1..=19 is encoded, then a logic block in 0..=2. Returns `None`
    /// when nothing can be encoded: a key value missing from the map, a
    /// column without a row, or coordinates outside the matrix.
    ///
    /// GPI and logic numbers sit one above [`Event::to_byte`]: GPI `n`
    /// becomes event number `97 + n` and logic `n` becomes `116 + n`. Use
    /// [`Event`] for values that must decode back to the same GPI or logic
    /// block.
    pub fn encode(&self, fields: &EventFields) -> Option<u8> {
        let number = if fields.is_keyboard() {
            let (row, col) = if fields.key_val != NO_KEY
                && fields.row == NOT_APPLICABLE
                && fields.col == NOT_APPLICABLE
            {
                self.position_of(fields.key_val)?
            } else {
                (fields.row, fields.col)
            };
            if row >= ROWS || (col != NOT_APPLICABLE && col >= COLS) {
                return None;
            }
            if col == NOT_APPLICABLE {
                KEY_LAST + 1 + row
            } else {
                1 + row * COLS + col
            }
        } else if (1..=GPIOS).contains(&fields.gpi) {
            1 + ROW_GROUND_LAST + fields.gpi
        } else if fields.logic <= LOGIC_BLOCKS {
            1 + ROW_GROUND_LAST + GPIOS + fields.logic
        } else {
            return None;
        };

        Some(if fields.state != 0 { number | 0x80 } else { number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_is_the_kypd_layout() {
        let map = KeyMap::default();
        assert_eq!(map.key_at(0, 0), 0xD);
        assert_eq!(map.key_at(3, 3), 0x1);
        assert_eq!(map.key_at(0, 4), NO_KEY);
        assert_eq!(map.key_at(7, 10), NO_KEY);
    }

    #[test]
    fn key_at_outside_the_matrix_is_no_key() {
        let map = KeyMap::default();
        assert_eq!(map.key_at(8, 0), NO_KEY);
        assert_eq!(map.key_at(0, 11), NO_KEY);
    }

    #[test]
    fn decode_first_key_of_the_default_map() {
        let fields = KeyMap::default().decode(0x01);
        assert_eq!(fields.key_val, 0xD);
        assert_eq!(fields.row, 0);
        assert_eq!(fields.col, 0);
        assert_eq!(fields.gpi, NOT_APPLICABLE);
        assert_eq!(fields.logic, NOT_APPLICABLE);
        assert_eq!(fields.state, 0);
    }

    #[test]
    fn decode_unmapped_key_keeps_coordinates() {
        let fields = KeyMap::default().decode(0x80 | 88);
        assert_eq!(fields.key_val, NO_KEY);
        assert_eq!((fields.row, fields.col), (7, 10));
        assert_eq!(fields.state, 1);
    }

    #[test]
    fn decode_non_key_events() {
        let map = KeyMap::default();

        let ground = map.decode(89);
        assert_eq!((ground.row, ground.col), (0, NOT_APPLICABLE));

        let gpi = map.decode(0x80 | 97);
        assert_eq!(gpi.gpi, 1);
        assert_eq!(gpi.row, NOT_APPLICABLE);
        assert_eq!(gpi.state, 1);

        let logic = map.decode(117);
        assert_eq!(logic.logic, 2);
        assert_eq!(logic.gpi, NOT_APPLICABLE);
    }

    #[test]
    fn decode_unassigned_number_reports_only_state() {
        let fields = KeyMap::default().decode(0x80 | 120);
        assert_eq!(
            fields,
            EventFields {
                state: 1,
                ..EventFields::default()
            }
        );
        assert_eq!(KeyMap::default().decode(0), EventFields::default());
    }

    #[test]
    fn encode_key_value_resolves_through_the_map() {
        let map = KeyMap::default();
        assert_eq!(map.encode(&EventFields::key(0xD, false)), Some(0x01));
        assert_eq!(map.encode(&EventFields::key(0x1, true)), Some(0x80 | 37));
    }

    #[test]
    fn encode_unknown_key_produces_no_event() {
        let map = KeyMap::default();
        assert_eq!(map.encode(&EventFields::key(0x1234, true)), None);
    }

    #[test]
    fn encode_explicit_coordinates() {
        let map = KeyMap::default();
        let matrix = EventFields {
            row: 2,
            col: 5,
            state: 1,
            ..EventFields::default()
        };
        assert_eq!(map.encode(&matrix), Some(0x80 | 28));

        let ground = EventFields {
            row: 6,
            ..EventFields::default()
        };
        assert_eq!(map.encode(&ground), Some(95));
    }

    #[test]
    fn encode_column_without_row_produces_no_event() {
        let fields = EventFields {
            col: 3,
            ..EventFields::default()
        };
        assert_eq!(KeyMap::default().encode(&fields), None);
    }

    #[test]
    fn encode_coordinates_outside_the_matrix_produce_no_event() {
        let map = KeyMap::default();
        let row = EventFields {
            row: 8,
            col: 0,
            ..EventFields::default()
        };
        let col = EventFields {
            row: 0,
            col: 11,
            ..EventFields::default()
        };
        let ground = EventFields {
            row: 200,
            ..EventFields::default()
        };
        assert_eq!(map.encode(&row), None);
        assert_eq!(map.encode(&col), None);
        assert_eq!(map.encode(&ground), None);
    }

    #[test]
    fn encode_gpi_uses_library_numbering() {
        let map = KeyMap::default();
        assert_eq!(map.encode(&EventFields::gpi(5, true)), Some(0xE6));
        assert_eq!(map.encode(&EventFields::gpi(5, false)), Some(102));
        assert_eq!(map.encode(&EventFields::gpi(19, false)), Some(116));
    }

    #[test]
    fn encode_logic_accepts_zero_to_two() {
        let map = KeyMap::default();
        assert_eq!(map.encode(&EventFields::logic(0, false)), Some(116));
        assert_eq!(map.encode(&EventFields::logic(2, true)), Some(0x80 | 118));
        assert_eq!(map.encode(&EventFields::logic(3, true)), None);
    }

    #[test]
    fn encode_all_sentinels_produces_no_event() {
        assert_eq!(KeyMap::default().encode(&EventFields::default()), None);
    }

    #[test]
    fn keyboard_fields_take_precedence_over_gpi() {
        let fields = EventFields {
            key_val: 0xC,
            gpi: 4,
            ..EventFields::default()
        };
        assert_eq!(KeyMap::default().encode(&fields), Some(0x02));
    }

    #[test]
    fn keyboard_bytes_round_trip_through_fields() {
        let mut table = [[NO_KEY; COLS as usize]; ROWS as usize];
        for (row, cells) in table.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = (row * 100 + col) as i32;
            }
        }
        let map = KeyMap::new(table);
        for byte in (0x01..=0x60u8).chain(0x81..=0xE0u8) {
            let fields = map.decode(byte);
            assert_eq!(map.encode(&fields), Some(byte), "byte {:#04x}", byte);
        }
    }

    #[test]
    fn duplicate_values_resolve_to_first_occurrence() {
        let mut table = [[NO_KEY; COLS as usize]; ROWS as usize];
        table[0][0] = 0x55;
        table[1][1] = 0x55;
        let map = KeyMap::new(table);

        assert_eq!(map.position_of(0x55), Some((0, 0)));
        let first = EventFields {
            row: 0,
            col: 0,
            ..EventFields::default()
        };
        assert_eq!(map.encode(&EventFields::key(0x55, false)), map.encode(&first));

        // (1, 1) decodes to the duplicated value, which re-encodes as (0, 0).
        let second = map.decode(1 + 11 + 1);
        assert_eq!(second.key_val, 0x55);
        assert_eq!(map.encode(&EventFields::key(second.key_val, false)), Some(0x01));
    }

    #[test]
    fn replace_overwrites_every_cell() {
        let mut map = KeyMap::default();
        let table = [[7; COLS as usize]; ROWS as usize];
        map.replace(&table);

        assert_eq!(map.table(), &table);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(map.key_at(row, col), 7);
            }
        }
        assert_eq!(map.position_of(0xD), None);
    }

    #[test]
    fn key_event_and_key_of_are_inverse_for_unique_values() {
        let map = KeyMap::default();
        let event = map.key_event(0x5, true).unwrap();
        assert_eq!(event.kind, EventKind::Key { row: 2, col: 2 });
        assert_eq!(map.key_of(&event), Some(0x5));
        assert_eq!(map.key_of(&Event::new(EventKind::Gpi(1), true)), None);
        assert_eq!(map.key_event(0x99, true), None);
    }
}
