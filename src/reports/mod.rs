//! Reports for the budget planner
//!
//! Pure functions over the snapshot: dashboard, budget status, transaction
//! register, monthly overview, expense pie chart and savings projections.

pub mod budget_status;
pub mod chart;
pub mod dashboard;
pub mod monthly;
pub mod register;
pub mod savings;
pub mod totals;

pub use budget_status::{BudgetProgress, BudgetStatus, BudgetSummary, ComplianceStatus};
pub use chart::{category_color, PieChart, PieSlice};
pub use dashboard::{DashboardSummary, IndexedTransaction};
pub use monthly::{available_months, available_years, Insight, MonthlyOverview};
pub use register::{RegisterPage, SortField, SortOrder, TransactionQuery, TypeFilter, PAGE_SIZE};
pub use savings::{time_until, GoalProjection, SavingsSummary};
pub use totals::{CategoryTotal, Totals};
