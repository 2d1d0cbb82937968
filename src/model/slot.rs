//! Row slots: a real item or a parity filler.

/// One column slot in a packed row.
///
/// `Filler` keeps the stagger consistent when the last two rows would
/// otherwise share the same length parity. It takes a grid position but is
/// never rendered and carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    /// A caller-supplied item.
    Item(T),
    /// Zero-size placeholder.
    Filler,
}

impl<T> Slot<T> {
    /// The item, if this slot holds one.
    pub fn item(&self) -> Option<&T> {
        match self {
            Slot::Item(item) => Some(item),
            Slot::Filler => None,
        }
    }

    /// Check if this slot is the filler.
    pub fn is_filler(&self) -> bool {
        matches!(self, Slot::Filler)
    }
}
