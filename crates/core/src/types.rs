/// Identifiers are assigned by the document store and treated as opaque
/// hex strings. An item has an id only once it has been persisted.
pub type DocId = String;
