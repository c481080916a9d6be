use crate::domain::error::DomainError;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::case_repository::CaseRepository;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::ports::student_repository::StudentRepository;
use crate::domain::ports::task_repository::TaskRepository;
use crate::domain::values::filter::RecordFilter;
use crate::domain::values::monthly::{aggregate_by_month, MONTH_NAMES};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DashboardSummary {
    pub students_total: u64,
    pub open_cases: u64,
    pub appointments_today: u64,
    pub pending_tasks: u64,
}

/// One row of the yearly case-load report.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyCaseLoad {
    pub month: &'static str,
    pub total: u64,
    pub solved: u64,
    pub pending: u64,
}

/// Dashboard widgets. These are read-heavy and degrade to zero/empty
/// states instead of failing: every swallowed store error is logged
/// with the widget it came from.
pub struct DashboardUseCase {
    students: Arc<dyn StudentRepository>,
    cases: Arc<dyn CaseRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl DashboardUseCase {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        cases: Arc<dyn CaseRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            students,
            cases,
            appointments,
            tasks,
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        let today = Utc::now().date_naive();
        DashboardSummary {
            students_total: count_or_zero(
                "dashboard.students_total",
                self.students.count(&RecordFilter::default()),
            ),
            open_cases: count_or_zero("dashboard.open_cases", self.cases.open_count()),
            appointments_today: count_or_zero(
                "dashboard.appointments_today",
                self.appointments.scheduled_on(today),
            ),
            pending_tasks: count_or_zero("dashboard.pending_tasks", self.tasks.pending_count()),
        }
    }

    /// Yearly case-load: 12 month rows with total/solved/pending counts.
    pub fn monthly_report(&self, year: i32) -> Vec<MonthlyCaseLoad> {
        let records = match self.cases.by_year(year) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    operation = "dashboard.monthly_report",
                    year,
                    error = %err,
                    "case fetch failed, reporting empty year"
                );
                Vec::new()
            }
        };
        let buckets = aggregate_by_month(year, &records);
        MONTH_NAMES
            .into_iter()
            .zip(buckets)
            .map(|(month, bucket)| MonthlyCaseLoad {
                month,
                total: bucket.total,
                solved: bucket.solved,
                pending: bucket.pending,
            })
            .collect()
    }
}

fn count_or_zero(operation: &str, result: Result<u64, DomainError>) -> u64 {
    match result {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(operation, error = %err, "dashboard count failed, showing zero");
            0
        }
    }
}
