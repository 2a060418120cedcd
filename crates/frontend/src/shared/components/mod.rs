pub mod pagination_controls;
pub mod stat_card;
pub mod table_checkbox;
pub mod ui;

pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use table_checkbox::TableCheckbox;
