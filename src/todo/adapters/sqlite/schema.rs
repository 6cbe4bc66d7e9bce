//! Diesel schema for to-do task persistence.

diesel::table! {
    /// To-do task records.
    to_do_tasks (id) {
        /// Store-assigned task identifier.
        id -> Integer,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Due date in UTC.
        due_date -> Timestamp,
        /// Canonical status label.
        status -> Text,
    }
}
