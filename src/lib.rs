//! # Nomadix
//!
//! Tourism metrics aggregation and insight engine: the filtering,
//! aggregation, trend/seasonality computation, and rule-based insight
//! extraction behind a province-level tourism dashboard.
//!
//! The engine is a pure, stateless function of its inputs. It consumes an
//! immutable [`RecordStore`](record::RecordStore) of per-province monthly
//! records plus a [`FilterSpec`](filter::FilterSpec), and produces a
//! [`DashboardSummary`](analytics::DashboardSummary) of typed aggregates
//! and findings. Chart drawing, number formatting, and page layout belong
//! to the rendering layer; data loading and validation belong to the data
//! source.
//!
//! # Quick Start
//!
//! ```
//! use nomadix::analytics::MetricsEngine;
//! use nomadix::filter::{FilterSpec, Period};
//! use nomadix::generator::{self, SampleDataConfig};
//! use nomadix::record::Province;
//!
//! // Synthetic feed standing in for a real data source.
//! let store = generator::generate(&SampleDataConfig::default());
//!
//! let spec = FilterSpec {
//!     period: Period::LastSixMonths,
//!     provinces: [Province::Luanda, Province::Benguela].into_iter().collect(),
//! };
//!
//! let summary = MetricsEngine::default().summarize(&store, &spec);
//! assert!(summary.record_count > 0);
//! ```
//!
//! # Modules
//!
//! - [`record`] — record types, provinces, and the immutable store
//! - [`filter`] — period windows and province selection
//! - [`analytics`] — aggregates, trend, seasonality, insights, engine
//! - [`generator`] — seeded synthetic sample data
//! - [`models`] — forecasting/clustering capability seams
//! - [`error`] — error taxonomy and crate `Result`

pub mod analytics;
pub mod error;
pub mod filter;
pub mod generator;
pub mod models;
pub mod record;

pub use analytics::{DashboardSummary, EngineConfig, MetricsEngine};
pub use error::{MetricsError, Result};
pub use filter::{FilterSpec, Period};
pub use record::{Province, RecordStore, TourismRecord};
