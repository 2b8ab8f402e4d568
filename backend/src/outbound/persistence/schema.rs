//! Diesel table definitions. Must match `backend/migrations`.

diesel::table! {
    /// Per-card display overrides, one row per card id.
    card_configs (id) {
        id -> Uuid,
        #[max_length = 256]
        title -> Varchar,
        #[max_length = 256]
        skin -> Varchar,
    }
}
