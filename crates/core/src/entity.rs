//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with the given id, if present.
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Whether any entity in `items` carries the given id.
pub fn contains_id<E: Entity>(items: &[E], id: &E::Id) -> bool {
    position_of(items, id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn position_of_finds_first_match() {
        let rows = vec![Row { id: 3 }, Row { id: 7 }, Row { id: 9 }];
        assert_eq!(position_of(&rows, &7), Some(1));
        assert_eq!(position_of(&rows, &4), None);
        assert!(contains_id(&rows, &9));
        assert!(!contains_id(&[] as &[Row], &9));
    }
}
