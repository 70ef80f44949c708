//! Diesel table definitions. Must match `backend/migrations`.

diesel::table! {
    /// Invoices billed to customers.
    invoices (id) {
        /// Primary key, generated by the database.
        id -> Uuid,
        /// Billed customer.
        customer_id -> Uuid,
        /// Amount in cents.
        amount -> Int4,
        /// `pending` or `paid`.
        status -> Varchar,
        /// Creation date.
        date -> Date,
    }
}
