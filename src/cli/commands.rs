use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mindcare",
    about = "Clinic case management for a student mental-health program"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a student
    StudentAdd {
        /// JSON with name, guardian_name, phone, circle
        json: String,
    },
    /// Update a student's details
    StudentUpdate {
        /// Student ID
        id: i64,
        /// JSON with any of name, guardian_name, phone, circle
        json: String,
    },
    /// Remove a student
    StudentRemove {
        /// Student ID
        id: i64,
    },
    /// List students (paginated)
    Students {
        /// Search by name, phone, or exact ID
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        page_size: u64,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Open a case file for a student
    CaseOpen {
        /// JSON with student_id, title, diagnosis
        json: String,
    },
    /// Mark a case solved
    CaseResolve {
        /// Case ID
        id: i64,
    },
    /// List case files (paginated)
    Cases {
        /// Search by title, diagnosis, or exact ID
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        page_size: u64,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Open a walk-in case
    GeneralOpen {
        /// JSON with person_name, description
        json: String,
    },
    /// Mark a walk-in case solved
    GeneralResolve {
        /// Case ID
        id: i64,
    },
    /// List walk-in cases (paginated)
    Generals {
        /// Search by person name, description, or exact ID
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        page_size: u64,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Append a clinical note to a case
    NoteAdd {
        /// Case ID
        case_id: i64,
        /// Note kind (diagnosis, observation, treatment)
        kind: String,
        /// Note text
        body: String,
    },
    /// List a case's notes, oldest first
    Notes {
        /// Case ID
        case_id: i64,
    },
    /// Book an appointment
    Book {
        /// JSON with student_id, scheduled_for (RFC3339 or YYYY-MM-DD), reason
        json: String,
    },
    /// Mark an appointment completed
    Complete {
        /// Appointment ID
        id: i64,
    },
    /// Cancel an appointment
    Cancel {
        /// Appointment ID
        id: i64,
    },
    /// List appointments (paginated)
    Appointments {
        /// Search by reason or exact ID
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        page_size: u64,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Upcoming scheduled appointments, soonest first
    Upcoming {
        #[arg(long, default_value = "10")]
        limit: u64,
    },
    /// Add a task
    TaskAdd {
        /// JSON with title, details, due_date (YYYY-MM-DD)
        json: String,
    },
    /// Mark a task done
    TaskDone {
        /// Task ID
        id: i64,
    },
    /// Remove a task
    TaskRemove {
        /// Task ID
        id: i64,
    },
    /// List tasks (paginated)
    Tasks {
        /// Search by title, details, or exact ID
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        page_size: u64,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show dashboard summary counts
    Dashboard,
    /// Yearly case-load report (12 month rows)
    Report {
        /// Calendar year, e.g. 2024
        year: i32,
    },
}
