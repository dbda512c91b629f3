//! Calculation engine components
//!
//! Each component is a pure function of its inputs. Leaf to root:
//! allocation, projection, scenario simulation, scorecard and narrative.

pub mod allocation;
pub mod narrative;
pub mod projection;
pub mod scenario;
pub mod scorecard;

pub use allocation::BudgetAllocator;
pub use narrative::NarrativeGenerator;
pub use projection::WealthProjector;
pub use scenario::ScenarioSimulator;
