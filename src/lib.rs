// Library root - layer wiring and public surface
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use crate::application::dashboard::{Dashboard, DashboardError, FieldDescription};
pub use crate::application::data_accessor::{DataAccessor, PlotParams};
pub use crate::application::mixins::{MatchTeam, PlayerSeasonsLeagues, SeasonsLeagues};
pub use crate::application::pizza::PizzaDashboard;
pub use crate::domain::fields::{FieldDef, FieldError, FieldKind, FieldSet, FieldValues};
pub use crate::domain::figure::{AxesSpec, Figure, PlotResult};
