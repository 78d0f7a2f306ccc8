/// Key extracted from a record's unique key field.
/// Examples: `user_7f3a`, `orders::2024-10-15::0001`
pub type KeyValue = String;
/// Name of a record field.
/// Examples: `id`, `slug`, `email`
pub type FieldName = String;
