//! Entity Models
//!
//! One file per entity. Each file carries the stored entity, its insert
//! payload (`*Create`, the full shape minus server-generated fields) and,
//! where the entity is mutable, its partial-update payload (`*Update`,
//! every field optional). Closed value domains live next to the entity
//! that owns them.

pub mod activity;
pub mod announcement;
pub mod attendance;
pub mod document;
pub mod employee;
pub mod event;
pub mod leave;
pub mod payroll;
pub mod performance;
pub mod task;
pub mod user;

pub use activity::{Activity, ActivityCreate, ActivityStatus, ActivityStatusUpdate, ActivityType};
pub use announcement::{Announcement, AnnouncementCreate};
pub use attendance::{Attendance, AttendanceCreate, AttendanceUpdate};
pub use document::{Document, DocumentCreate};
pub use employee::{Department, Employee, EmployeeCreate, EmployeeUpdate, EmploymentType};
pub use event::{Event, EventCreate};
pub use leave::{Leave, LeaveCreate, LeaveStatus, LeaveStatusUpdate, LeaveType};
pub use payroll::{Payroll, PayrollCreate, PayrollUpdate};
pub use performance::{Performance, PerformanceCreate, PerformanceUpdate};
pub use task::{Task, TaskCreate, TaskPriority, TaskUpdate};
pub use user::{User, UserCreate, UserUpdate};
