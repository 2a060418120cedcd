pub mod model;
pub mod view;
pub mod view_model;

pub use view::CustomerDetails;
