use serde_json::{Value, json};

/// The bookstore document: five books, three of them with an `isbn`, and a
/// bicycle.
pub fn bookstore() -> Value {
    json!({
        "store": {
            "book": [
                { "category": "reference",
                  "author": "Nigel Rees",
                  "title": "Sayings of the Century",
                  "price": 8.95
                },
                { "category": "fiction",
                  "author": "Evelyn Waugh",
                  "title": "Sword of Honour",
                  "price": 12.99
                },
                { "category": "fiction",
                  "author": "Herman Melville",
                  "title": "Moby Dick",
                  "isbn": "0-553-21311-3",
                  "price": 8.99
                },
                { "category": "fiction",
                  "author": "J. R. R. Tolkien",
                  "title": "The Lord of the Rings",
                  "isbn": "0-395-19395-8",
                  "price": 22.99
                },
                { "category": "programming",
                  "author": ["Andrew Hunt", "David Thomas"],
                  "title": "The Pragmatic Programmer: From Journeyman to Master",
                  "isbn": "0-201-61622-X",
                  "price": 33.68
                }
            ],
            "bicycle": {
                "color": "red",
                "price": 19.95
            }
        }
    })
}

/// The `store.book` entries of [`bookstore`].
pub fn books(data: &Value) -> Vec<Value> {
    data["store"]["book"].as_array().cloned().unwrap_or_default()
}

/// A document with the same field name at several depths, including inside
/// a match.
pub fn nested_names() -> Value {
    json!({
        "name": "root",
        "children": [
            { "name": "a", "children": [ { "name": "a1" }, { "name": "a2" } ] },
            { "label": { "name": "b" } },
            { "name": { "name": "shadowed" } }
        ],
        "meta": { "owner": { "name": "c" } }
    })
}
