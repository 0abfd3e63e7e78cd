pub mod guide;
pub mod place;

pub use guide::{BudgetEstimate, Classification, GuideSections, TravelTips};
pub use place::{document_id, IndexedPlace, PlaceRecord};
