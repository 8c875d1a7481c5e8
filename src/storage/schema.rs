//! Diesel schema for the task board tables.

diesel::table! {
    /// Category records grouping tasks.
    categories (id) {
        /// Generated category identifier.
        id -> BigInt,
        /// Unique category name.
        name -> Text,
        /// `#RRGGBB` display colour.
        color -> Text,
    }
}

diesel::table! {
    /// Priority records ranking tasks by urgency.
    priorities (id) {
        /// Generated priority identifier.
        id -> BigInt,
        /// Unique priority name.
        name -> Text,
        /// Ascending sort key; lower levels list first.
        level -> BigInt,
        /// `#RRGGBB` display colour.
        color -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
    }
}

diesel::table! {
    /// Task records referencing categories and priorities.
    tasks (id) {
        /// Generated task identifier.
        id -> BigInt,
        /// Task title.
        title -> Text,
        /// Lifecycle status (`pending`, `in_progress`, `completed`).
        status -> Text,
        /// Optional owning category.
        category_id -> Nullable<BigInt>,
        /// Optional assigned priority.
        priority_id -> Nullable<BigInt>,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due timestamp.
        due_date -> Nullable<TimestamptzSqlite>,
        /// Creation timestamp.
        created_at -> TimestamptzSqlite,
        /// Last update timestamp; null until the first update.
        updated_at -> Nullable<TimestamptzSqlite>,
    }
}

diesel::joinable!(tasks -> categories (category_id));
diesel::joinable!(tasks -> priorities (priority_id));

diesel::allow_tables_to_appear_in_same_query!(categories, priorities, tasks);
