use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::board::Side;

/// Зона на столе, над которой можно отпустить кость.
///
/// `Opening` активна только пока стол пуст, `Left`/`Right` — только после первого хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DropZone {
    Opening,
    Left,
    Right,
}

impl DropZone {
    /// Сторона цепочки, которую продолжает зона. Для `Opening` — None.
    pub fn side(self) -> Option<Side> {
        match self {
            DropZone::Opening => None,
            DropZone::Left => Some(Side::Left),
            DropZone::Right => Some(Side::Right),
        }
    }

    /// Активна ли зона при данном размере цепочки.
    pub fn is_active(self, board_len: usize) -> bool {
        match self {
            DropZone::Opening => board_len == 0,
            DropZone::Left | DropZone::Right => board_len > 0,
        }
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DropZone::Opening => "opening",
            DropZone::Left => "left",
            DropZone::Right => "right",
        };
        write!(f, "{s}")
    }
}
