use serde::Serialize;

/// `{ "connect": { "id": ... } }` — link to an existing record by id.
/// Reference fields always go out in this form, never as raw scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connect {
    connect: ConnectById,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ConnectById {
    id: String,
}

impl Connect {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            connect: ConnectById { id: id.into() },
        }
    }
}

/// `{ "set": ... }` — explicit field replacement during an update. Fields not
/// wrapped (or skipped entirely) are left untouched by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetField<T> {
    set: T,
}

impl<T> SetField<T> {
    pub fn to(value: T) -> Self {
        Self { set: value }
    }
}

/// `{ "id": ... }` — unique target for updates and deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereId {
    id: String,
}

impl WhereId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// `{ "id": { "equals": ... } }` — filter form used by findFirst lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereIdEquals {
    id: IdEquals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct IdEquals {
    equals: String,
}

impl WhereIdEquals {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: IdEquals { equals: id.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connect_shape() {
        let value = serde_json::to_value(Connect::by_id("g1")).unwrap();
        assert_eq!(value, json!({ "connect": { "id": "g1" } }));
    }

    #[test]
    fn test_set_field_shape() {
        let value = serde_json::to_value(SetField::to(1959)).unwrap();
        assert_eq!(value, json!({ "set": 1959 }));
    }

    #[test]
    fn test_where_forms() {
        assert_eq!(
            serde_json::to_value(WhereId::new("m1")).unwrap(),
            json!({ "id": "m1" })
        );
        assert_eq!(
            serde_json::to_value(WhereIdEquals::new("m1")).unwrap(),
            json!({ "id": { "equals": "m1" } })
        );
    }
}
