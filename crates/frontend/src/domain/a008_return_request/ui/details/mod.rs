pub mod model;
pub mod view;

pub use view::{ReturnRequestCreate, ReturnRequestDetails};
