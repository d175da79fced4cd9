//! # wellcast-calendar
//!
//! Day-index calendar arithmetic for production and forecast series.
//!
//! Every time value in the workspace is a day index counted from the
//! 1900-01-01 epoch (day 0). This crate converts those indices to and from
//! real Gregorian dates and groups them into calendar months.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["day index (i64)"] -->|"idx_to_date()"| B["NaiveDate"]
//!     B -->|"date_to_idx()"| A
//!     A -->|"Month::of_idx()"| C["Month"]
//!     C -->|".first_idx() / .last_idx()"| A
//!     A -->|"month_day_grid()"| D["Vec of day indices"]
//!     E["values + edges"] -->|"digitize()"| F["bin indices"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use wellcast_calendar::{Month, idx_from_ymd, idx_to_date};
//!
//! let idx = idx_from_ymd(2020, 3, 15).unwrap();
//! let month = Month::of_idx(idx).unwrap();
//! assert_eq!(month.n_days(), 31);
//! assert_eq!(idx_to_date(month.first_idx()).unwrap().to_string(), "2020-03-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `epoch` | Day index <-> date conversion |
//! | `month` | Calendar month boundaries |
//! | `sequence` | Month-spanning daily grids |
//! | `bins` | `digitize` and weighted histograms |
//! | `error` | Error types |

mod bins;
mod epoch;
mod error;
mod month;
mod sequence;

pub use bins::{digitize, weighted_histogram};
pub use epoch::{BASE_YEAR, base_date, date_to_idx, day_of, idx_from_ymd, idx_to_date};
pub use error::CalendarError;
pub use month::{Month, days_in_month, month_end_idx, month_start_idx};
pub use sequence::{month_day_grid, month_sequence};
