//! Diesel schema for applications and tasks.

diesel::table! {
    /// Applications owning tasks. Managed outside this crate.
    applications (id) {
        /// Application identifier.
        id -> Uuid,
        /// Owning tenant.
        tenant_id -> Uuid,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning application.
        application_id -> Uuid,
        /// Tenant copied from the application at creation time.
        tenant_id -> Uuid,
        /// Task kind (`call`, `email`, `review`).
        #[sql_name = "type"]
        #[max_length = 20]
        kind -> Varchar,
        /// Due timestamp.
        due_at -> Timestamptz,
        /// Lifecycle status (`open`, `completed`).
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> applications (application_id));
diesel::allow_tables_to_appear_in_same_query!(applications, tasks);
