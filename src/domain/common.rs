use uuid::Uuid;

/// Exposes a stable identifier for records held in a collection.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Returns the position of the record with the given id, if present.
pub fn position_of<T: Identifiable>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
