use std::fmt;

/// One of the independent keyed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Characters,
    Inventory,
    Rooms,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Characters, Namespace::Inventory, Namespace::Rooms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Characters => "characters",
            Namespace::Inventory => "inventory",
            Namespace::Rooms => "rooms",
        }
    }

    /// Name of the key field in request bodies.
    pub fn key_field(&self) -> &'static str {
        match self {
            Namespace::Characters | Namespace::Inventory => "username",
            Namespace::Rooms => "roomId",
        }
    }

    /// Name of the payload field in request and response bodies.
    pub fn payload_field(&self) -> &'static str {
        match self {
            Namespace::Characters | Namespace::Inventory => "data",
            Namespace::Rooms => "players",
        }
    }

    /// Payload served for a key that was never saved. Only rooms have one;
    /// the other namespaces report not found.
    pub fn missing_default(&self) -> Option<&'static str> {
        match self {
            Namespace::Rooms => Some("[]"),
            Namespace::Characters | Namespace::Inventory => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rooms_have_a_default() {
        let defaults: Vec<_> = Namespace::ALL.iter().map(|n| n.missing_default()).collect();
        assert_eq!(defaults, vec![None, None, Some("[]")]);
    }

    #[test]
    fn field_names_match_wire_format() {
        assert_eq!(Namespace::Rooms.key_field(), "roomId");
        assert_eq!(Namespace::Inventory.payload_field(), "data");
        assert_eq!(Namespace::Characters.to_string(), "characters");
    }
}
