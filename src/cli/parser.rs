use crate::export::ReportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for stafftrack
/// CLI application to track employee attendance and task productivity with SQLite
#[derive(Parser)]
#[command(
    name = "stafftrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee attendance and task productivity, build reports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this stored employee (email); defaults to the local admin operator
    #[arg(global = true, long = "actor")]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for validity")]
        check: bool,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage departments
    Dept {
        #[command(subcommand)]
        action: DeptAction,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record a check-in for an employee
    CheckIn {
        /// Employee email
        email: String,

        #[arg(long = "date", help = "Date of the check-in (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Check-in time (HH:MM or HH:MM:SS, default now)")]
        at: Option<String>,
    },

    /// Record a check-out for an employee
    CheckOut {
        /// Employee email
        email: String,

        #[arg(long = "date", help = "Date of the check-out (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Check-out time (HH:MM or HH:MM:SS, default now)")]
        at: Option<String>,
    },

    /// List attendance records or the worked-hours timeseries
    Attendance {
        #[arg(long = "employee", help = "Filter by employee email")]
        employee: Option<String>,

        #[arg(long = "from", help = "Start date (YYYY-MM-DD, inclusive)")]
        from: Option<String>,

        #[arg(long = "to", help = "End date (YYYY-MM-DD, inclusive)")]
        to: Option<String>,

        #[arg(long = "hours", help = "Show worked hours per day instead of raw records")]
        hours: bool,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Build analytics reports
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },

    /// Bulk import attendance or tasks from a CSV file
    Import {
        /// What the file contains
        target: ImportTarget,

        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ImportTarget {
    Attendance,
    Tasks,
}

#[derive(Subcommand)]
pub enum DeptAction {
    /// Create a department
    Add {
        name: String,

        #[arg(long, help = "Manager display name")]
        manager: Option<String>,
    },

    /// List departments
    List,

    /// Delete a department (fails while employees are still assigned)
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create an employee
    Add {
        name: String,
        email: String,

        #[arg(long, default_value = "employee", help = "Role: employee or admin")]
        role: String,

        #[arg(long = "dept", help = "Department id")]
        dept: Option<i64>,

        #[arg(long = "join-date", help = "Join date (YYYY-MM-DD)")]
        join_date: Option<String>,

        #[arg(long, help = "Initial password (stored as a hash)")]
        password: Option<String>,
    },

    /// List employees
    List {
        #[arg(long = "dept", help = "Filter by department id")]
        dept: Option<i64>,
    },

    /// Update an employee (only the supplied fields change)
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "Role: employee or admin")]
        role: Option<String>,

        #[arg(long = "dept", help = "Department id")]
        dept: Option<i64>,

        #[arg(long = "clear-dept", help = "Remove the department assignment")]
        clear_dept: bool,

        #[arg(long = "join-date", help = "Join date (YYYY-MM-DD)")]
        join_date: Option<String>,

        #[arg(long, help = "New password (stored as a hash)")]
        password: Option<String>,
    },

    /// Delete an employee and all of their attendance/task records
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Assign a task to an employee
    Add {
        /// Employee email
        email: String,

        /// Task name
        name: String,

        #[arg(long, help = "Start timestamp (YYYY-MM-DD HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "End timestamp (YYYY-MM-DD HH:MM)")]
        end: Option<String>,

        #[arg(long, help = "Status: pending, in-progress or completed")]
        status: Option<String>,

        #[arg(long, help = "Productivity score (0-100)")]
        score: Option<f64>,
    },

    /// Update a task (only the supplied fields change)
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Start timestamp (YYYY-MM-DD HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "End timestamp (YYYY-MM-DD HH:MM)")]
        end: Option<String>,

        #[arg(long, help = "Status: pending, in-progress or completed")]
        status: Option<String>,

        #[arg(long, help = "Productivity score (0-100)")]
        score: Option<f64>,
    },

    /// List tasks
    List {
        #[arg(long = "employee", help = "Filter by employee email")]
        employee: Option<String>,

        #[arg(long, help = "Filter by status")]
        status: Option<String>,

        #[arg(long = "from", help = "Started on/after (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "Ended on/before (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Delete a task
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum ReportKind {
    /// Average productivity score per department
    DepartmentProductivity {
        #[arg(long = "from")]
        from: Option<String>,

        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write the table to a file")]
        out: Option<String>,
    },

    /// Best average scores first
    TopPerformers {
        #[arg(long, default_value_t = 5)]
        limit: usize,

        #[arg(long = "from")]
        from: Option<String>,

        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write the table to a file")]
        out: Option<String>,
    },

    /// Per-record attendance projection for charting
    AttendanceSummary {
        #[arg(long = "from")]
        from: String,

        #[arg(long = "to")]
        to: String,

        #[arg(long = "dept", help = "Filter by department id")]
        dept: Option<i64>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write the table to a file")]
        out: Option<String>,
    },

    /// Average productivity bucketed by task end day
    DailyProductivity {
        #[arg(long = "employee", help = "Filter by employee email")]
        employee: Option<String>,

        #[arg(long = "from")]
        from: Option<String>,

        #[arg(long = "to")]
        to: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Write the table to a file")]
        out: Option<String>,
    },
}
